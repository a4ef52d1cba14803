use std::fmt;

use crate::npoint::write_point;
use crate::rect::Rectangle;
use crate::shape::{Encapsulate, Geometry};

/// A point in the fixed 2D family.
///
/// Points have no extent: their hypervolume is always 0. Encapsulating two
/// points yields the [`Rectangle`] spanning them.
///
/// Converts to and from `mint::Point2<f64>`, `[f64; 2]` and `(f64, f64)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Point2D { x, y }
    }
}

impl From<[f64; 2]> for Point2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Point2D { x, y }
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Point2D { x, y }
    }
}

impl From<mint::Point2<f64>> for Point2D {
    fn from(p: mint::Point2<f64>) -> Self {
        Point2D { x: p.x, y: p.y }
    }
}

impl From<Point2D> for mint::Point2<f64> {
    fn from(p: Point2D) -> Self {
        mint::Point2 { x: p.x, y: p.y }
    }
}

impl Geometry for Point2D {
    fn dimensions(&self) -> usize {
        2
    }

    fn hypervolume(&self) -> f64 {
        0.0
    }
}

impl Encapsulate<Point2D> for Point2D {
    type Output = Rectangle;

    /// Returns the rectangle spanning both points.
    ///
    /// # Example
    /// ```rust
    /// use hyperbox::{Encapsulate, Geometry, Point2D};
    ///
    /// let r = Point2D::new(0.0, 3.0).encapsulate(&Point2D::new(4.0, 0.0));
    /// assert_eq!(r.lower_left(), Point2D::new(0.0, 0.0));
    /// assert_eq!(r.upper_right(), Point2D::new(4.0, 3.0));
    /// assert_eq!(r.hypervolume(), 12.0);
    /// ```
    fn encapsulate(&self, other: &Point2D) -> Rectangle {
        Rectangle::new(*self, *other)
    }
}

impl Encapsulate<Rectangle> for Point2D {
    type Output = Rectangle;

    fn encapsulate(&self, rect: &Rectangle) -> Rectangle {
        // Same region either way around; the rectangle holds the logic.
        rect.encapsulate(self)
    }
}

/// Renders as `Point(x, y)` with two-decimal coordinates, sharing the
/// [`NPoint`](crate::NPoint) renderer.
impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_point(f, [self.x, self.y])
    }
}
