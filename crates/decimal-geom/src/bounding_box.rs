use std::fmt;
use std::str::FromStr;

use glam::DVec2;
use log::{debug, trace};
use rust_decimal::Decimal;

use crate::host::HostRect;
use crate::text::parse_fields;
use crate::{Coordinate, GeomError, Result};

/// An axis-aligned rectangle that grows to enclose the coordinates it is
/// given.
///
/// Only the four edges are stored. Width, height, the corners and the
/// center are computed from them on every read, so they always agree with
/// the current edges no matter which setter ran last.
///
/// The `right >= left` / `bottom >= top` invariant is checked by the
/// constructors only. Edge setters accept any value, which allows a caller
/// to move several edges one at a time through a temporarily inverted box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    left: Decimal,
    top: Decimal,
    right: Decimal,
    bottom: Decimal,
}

impl BoundingBox {
    /// Build a box from explicit edges.
    ///
    /// The horizontal pair is checked first, so a box inverted on both axes
    /// reports [`GeomError::RightBeforeLeft`].
    pub fn new(
        left: impl Into<Decimal>,
        top: impl Into<Decimal>,
        right: impl Into<Decimal>,
        bottom: impl Into<Decimal>,
    ) -> Result<Self> {
        let (left, top, right, bottom) = (left.into(), top.into(), right.into(), bottom.into());

        if right < left {
            debug!("Rejecting bounding box: right {right} < left {left}");
            return Err(GeomError::RightBeforeLeft { left, right });
        }
        if bottom < top {
            debug!("Rejecting bounding box: bottom {bottom} < top {top}");
            return Err(GeomError::BottomAboveTop { top, bottom });
        }

        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// A zero-size box anchored at `coordinate`.
    pub fn from_coordinate(coordinate: Coordinate) -> Self {
        Self {
            left: coordinate.x,
            top: coordinate.y,
            right: coordinate.x,
            bottom: coordinate.y,
        }
    }

    /// A zero-size box anchored at `(left, top)`.
    pub fn from_scalars(left: impl Into<Decimal>, top: impl Into<Decimal>) -> Self {
        Self::from_coordinate(Coordinate::new(left, top))
    }

    /// The smallest box enclosing every coordinate in `coordinates`.
    pub fn from_coordinates<I>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut iter = coordinates.into_iter();
        let first = iter.next().ok_or(GeomError::EmptyInput)?;

        let mut bbox = Self::from_coordinate(first);
        bbox.encompass_all(iter);
        Ok(bbox)
    }

    pub fn left(&self) -> Decimal {
        self.left
    }

    pub fn top(&self) -> Decimal {
        self.top
    }

    pub fn right(&self) -> Decimal {
        self.right
    }

    pub fn bottom(&self) -> Decimal {
        self.bottom
    }

    pub fn set_left(&mut self, left: impl Into<Decimal>) {
        self.left = left.into();
    }

    pub fn set_top(&mut self, top: impl Into<Decimal>) {
        self.top = top.into();
    }

    pub fn set_right(&mut self, right: impl Into<Decimal>) {
        self.right = right.into();
    }

    pub fn set_bottom(&mut self, bottom: impl Into<Decimal>) {
        self.bottom = bottom.into();
    }

    /// `right - left`, saturating at the `Decimal` range.
    pub fn width(&self) -> Decimal {
        self.right.saturating_sub(self.left)
    }

    /// `bottom - top`, saturating at the `Decimal` range.
    pub fn height(&self) -> Decimal {
        self.bottom.saturating_sub(self.top)
    }

    pub fn top_left(&self) -> Coordinate {
        Coordinate::new(self.left, self.top)
    }

    pub fn top_right(&self) -> Coordinate {
        Coordinate::new(self.right, self.top)
    }

    pub fn bottom_left(&self) -> Coordinate {
        Coordinate::new(self.left, self.bottom)
    }

    pub fn bottom_right(&self) -> Coordinate {
        Coordinate::new(self.right, self.bottom)
    }

    /// Midpoint of the edges, as `left / 2 + right / 2`. Never overflows.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            self.left / Decimal::TWO + self.right / Decimal::TWO,
            self.top / Decimal::TWO + self.bottom / Decimal::TWO,
        )
    }

    /// The center as an offset from the top-left corner.
    pub fn relative_center(&self) -> Coordinate {
        let center = self.center();
        Coordinate::new(
            center.x.saturating_sub(self.left),
            center.y.saturating_sub(self.top),
        )
    }

    /// Closed-interval membership: points on an edge are inside.
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        (self.left..=self.right).contains(&coordinate.x)
            && (self.top..=self.bottom).contains(&coordinate.y)
    }

    /// Grow the box so `coordinate` lies inside it. Returns whether any edge
    /// moved.
    pub fn encompass(&mut self, coordinate: Coordinate) -> bool {
        let before = *self;

        if coordinate.x < self.left {
            self.left = coordinate.x;
        }
        if coordinate.x > self.right {
            self.right = coordinate.x;
        }
        if coordinate.y < self.top {
            self.top = coordinate.y;
        }
        if coordinate.y > self.bottom {
            self.bottom = coordinate.y;
        }

        let grew = *self != before;
        if grew {
            trace!("Encompassed {coordinate}: {before} -> {}", self);
        }
        grew
    }

    /// Encompass each coordinate in order. Returns whether any edge moved.
    pub fn encompass_all<I>(&mut self, coordinates: I) -> bool
    where
        I: IntoIterator<Item = Coordinate>,
    {
        coordinates
            .into_iter()
            .fold(false, |grew, c| self.encompass(c) | grew)
    }

    /// Grow the box to also enclose `other`.
    pub fn union(&mut self, other: &BoundingBox) -> bool {
        self.encompass_all([other.top_left(), other.bottom_right()])
    }

    /// Build a host rectangle from the top-left and bottom-right corners.
    pub fn to_rect<R: HostRect>(&self) -> R {
        R::from_corners(self.top_left().to_point(), self.bottom_right().to_point())
    }

    pub fn to_dvec2_corners(&self) -> (DVec2, DVec2) {
        self.to_rect()
    }
}

impl From<Coordinate> for BoundingBox {
    fn from(coordinate: Coordinate) -> Self {
        Self::from_coordinate(coordinate)
    }
}

impl TryFrom<&[Coordinate]> for BoundingBox {
    type Error = GeomError;

    fn try_from(coordinates: &[Coordinate]) -> Result<Self> {
        Self::from_coordinates(coordinates.iter().copied())
    }
}

/// Renders `top,left,width,height`.
impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.top,
            self.left,
            self.width(),
            self.height()
        )
    }
}

impl FromStr for BoundingBox {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self> {
        let [top, left, width, height] = parse_fields(s)?;
        let right = left
            .checked_add(width)
            .ok_or_else(|| GeomError::Parse(format!("right edge overflows in '{s}'")))?;
        let bottom = top
            .checked_add(height)
            .ok_or_else(|| GeomError::Parse(format!("bottom edge overflows in '{s}'")))?;
        Self::new(left, top, right, bottom)
    }
}
