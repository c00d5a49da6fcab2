//! Conversions to host graphics types.
//!
//! Host frameworks work in binary floating point, so crossing this boundary
//! narrows each `Decimal` to `f64` (or `f32`). The narrowing only happens
//! through the explicit `to_point`/`to_rect` calls on the value types.

use glam::{DVec2, Vec2};
use rust_decimal::{
    Decimal,
    prelude::{FromPrimitive, ToPrimitive},
};

/// A host point type constructible from `(x, y)`.
pub trait HostPoint: Sized {
    fn from_xy(x: f64, y: f64) -> Self;
}

/// A host rectangle type constructible from its top-left and bottom-right
/// corners.
pub trait HostRect: Sized {
    type Point: HostPoint;

    fn from_corners(top_left: Self::Point, bottom_right: Self::Point) -> Self;
}

impl HostPoint for DVec2 {
    fn from_xy(x: f64, y: f64) -> Self {
        DVec2::new(x, y)
    }
}

impl HostPoint for Vec2 {
    fn from_xy(x: f64, y: f64) -> Self {
        Vec2::new(x as f32, y as f32)
    }
}

impl HostPoint for (f64, f64) {
    fn from_xy(x: f64, y: f64) -> Self {
        (x, y)
    }
}

impl HostRect for (DVec2, DVec2) {
    type Point = DVec2;

    fn from_corners(top_left: DVec2, bottom_right: DVec2) -> Self {
        (top_left, bottom_right)
    }
}

impl HostRect for [DVec2; 2] {
    type Point = DVec2;

    fn from_corners(top_left: DVec2, bottom_right: DVec2) -> Self {
        [top_left, bottom_right]
    }
}

pub(crate) fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// `to - from` as `f64`. Falls back to subtracting in `f64` when the
/// difference does not fit in a `Decimal`.
pub(crate) fn difference_f64(from: Decimal, to: Decimal) -> f64 {
    match to.checked_sub(from) {
        Some(diff) => decimal_to_f64(diff),
        None => decimal_to_f64(to) - decimal_to_f64(from),
    }
}

/// Widen an `f64` result back to a decimal, saturating at the `Decimal`
/// range. NaN maps to zero.
pub(crate) fn f64_to_decimal(value: f64) -> Decimal {
    if value.is_nan() {
        return Decimal::ZERO;
    }
    Decimal::from_f64(value).unwrap_or(if value.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}
