use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use glam::DVec2;
use rust_decimal::Decimal;

use crate::host::{HostPoint, decimal_to_f64, difference_f64, f64_to_decimal};
use crate::text::parse_fields;
use crate::GeomError;

/// A 2D point with decimal components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: Decimal,
    pub y: Decimal,
}

impl Coordinate {
    pub const ZERO: Self = Self {
        x: Decimal::ZERO,
        y: Decimal::ZERO,
    };

    pub fn new(x: impl Into<Decimal>, y: impl Into<Decimal>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Angle in degrees from `self` to `other`, counter-clockwise from due
    /// East, in (-180, 180]. Coincident points give 0.
    pub fn angle_to(&self, other: &Coordinate) -> Decimal {
        Self::angle_between(self, other)
    }

    pub fn angle_between(origin: &Coordinate, target: &Coordinate) -> Decimal {
        let dy = difference_f64(origin.y, target.y);
        let dx = difference_f64(origin.x, target.x);
        f64_to_decimal(dy.atan2(dx).to_degrees())
    }

    /// Straight-line distance between `self` and `other`.
    pub fn distance_to(&self, other: &Coordinate) -> Decimal {
        Self::distance_between(self, other)
    }

    /// Euclidean distance. A result beyond `Decimal::MAX` saturates.
    pub fn distance_between(a: &Coordinate, b: &Coordinate) -> Decimal {
        let dx = difference_f64(a.x, b.x);
        let dy = difference_f64(a.y, b.y);
        f64_to_decimal(dx.hypot(dy))
    }

    pub fn to_point<P: HostPoint>(&self) -> P {
        P::from_xy(decimal_to_f64(self.x), decimal_to_f64(self.y))
    }

    pub fn to_dvec2(&self) -> DVec2 {
        self.to_point()
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign for Coordinate {
    fn add_assign(&mut self, rhs: Coordinate) {
        *self = *self + rhs;
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl SubAssign for Coordinate {
    fn sub_assign(&mut self, rhs: Coordinate) {
        *self = *self - rhs;
    }
}

impl From<(Decimal, Decimal)> for Coordinate {
    fn from((x, y): (Decimal, Decimal)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Coordinate {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y] = parse_fields(s)?;
        Ok(Self { x, y })
    }
}
