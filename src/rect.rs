use std::fmt;

use crate::point::Point2D;
use crate::shape::{Encapsulate, Geometry};

/// An axis-aligned rectangle, the 2D box of the algebra.
///
/// Corners are normalized at construction: `lower_left` is the per-axis
/// minimum of the two corners given and `upper_right` the per-axis maximum,
/// whatever order they were supplied in. The invariant
/// `lower_left.x <= upper_right.x && lower_left.y <= upper_right.y` holds for
/// the life of the value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    lower_left: Point2D,
    upper_right: Point2D,
}

impl Rectangle {
    /// Creates the rectangle spanning two opposite corners, in either order.
    ///
    /// # Example
    /// ```rust
    /// use hyperbox::{Point2D, Rectangle};
    ///
    /// // Upper-left and lower-right corners still normalize.
    /// let r = Rectangle::new(Point2D::new(0.0, 3.0), Point2D::new(4.0, 0.0));
    /// assert_eq!(r.lower_left(), Point2D::new(0.0, 0.0));
    /// assert_eq!(r.upper_right(), Point2D::new(4.0, 3.0));
    /// ```
    pub fn new(a: Point2D, b: Point2D) -> Self {
        Rectangle {
            lower_left: Point2D::new(a.x.min(b.x), a.y.min(b.y)),
            upper_right: Point2D::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn lower_left(&self) -> Point2D {
        self.lower_left
    }

    pub fn upper_right(&self) -> Point2D {
        self.upper_right
    }

    /// Extent along the x axis, always >= 0.
    pub fn width(&self) -> f64 {
        self.upper_right.x - self.lower_left.x
    }

    /// Extent along the y axis, always >= 0.
    pub fn height(&self) -> f64 {
        self.upper_right.y - self.lower_left.y
    }
}

impl Geometry for Rectangle {
    fn dimensions(&self) -> usize {
        2
    }

    /// The area of the rectangle.
    fn hypervolume(&self) -> f64 {
        self.width() * self.height()
    }
}

impl Encapsulate<Point2D> for Rectangle {
    type Output = Rectangle;

    /// Returns the rectangle widened just enough to also cover `point`.
    ///
    /// # Example
    /// ```rust
    /// use hyperbox::{Encapsulate, Geometry, Point2D, Rectangle};
    ///
    /// let r = Rectangle::new(Point2D::new(0.0, 0.0), Point2D::new(2.0, 2.0));
    /// let grown = r.encapsulate(&Point2D::new(5.0, 5.0));
    /// assert_eq!(grown.upper_right(), Point2D::new(5.0, 5.0));
    /// assert_eq!(grown.hypervolume(), 25.0);
    /// ```
    fn encapsulate(&self, point: &Point2D) -> Rectangle {
        Rectangle {
            lower_left: Point2D::new(
                self.lower_left.x.min(point.x),
                self.lower_left.y.min(point.y),
            ),
            upper_right: Point2D::new(
                self.upper_right.x.max(point.x),
                self.upper_right.y.max(point.y),
            ),
        }
    }
}

impl Encapsulate<Rectangle> for Rectangle {
    type Output = Rectangle;

    /// Classic bounding-box union of two rectangles.
    fn encapsulate(&self, other: &Rectangle) -> Rectangle {
        Rectangle {
            lower_left: Point2D::new(
                self.lower_left.x.min(other.lower_left.x),
                self.lower_left.y.min(other.lower_left.y),
            ),
            upper_right: Point2D::new(
                self.upper_right.x.max(other.upper_right.x),
                self.upper_right.y.max(other.upper_right.y),
            ),
        }
    }
}

/// Renders as `Rectangle[<lower left>, <upper right>] (Area: <area>)`.
impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle[{}, {}] (Area: {:.2})",
            self.lower_left,
            self.upper_right,
            self.hypervolume()
        )
    }
}
