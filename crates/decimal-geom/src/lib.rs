//! Decimal-backed 2D geometry values.
//!
//! [`Coordinate`] and [`BoundingBox`] store every scalar as a
//! [`rust_decimal::Decimal`] so edge arithmetic stays exact. Binary floating
//! point only appears in two places:
//!
//! - [`Coordinate::angle_to`] and [`Coordinate::distance_to`], which evaluate
//!   `atan2`/`hypot` in `f64` and convert the result straight back
//! - the explicit conversions to host graphics types in [`host`]

mod bounding_box;
mod coordinate;
pub mod host;
mod text;

pub use bounding_box::BoundingBox;
pub use coordinate::Coordinate;
pub use host::{HostPoint, HostRect};
pub use rust_decimal::Decimal;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeomError {
    #[error("right edge {right} is less than left edge {left}")]
    RightBeforeLeft { left: Decimal, right: Decimal },

    #[error("bottom edge {bottom} is less than top edge {top}")]
    BottomAboveTop { top: Decimal, bottom: Decimal },

    #[error("cannot build a bounding box from an empty set of coordinates")]
    EmptyInput,

    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, GeomError>;
