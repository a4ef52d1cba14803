use std::fmt;

use crate::npoint::NPoint;
use crate::shape::{DimensionMismatch, Encapsulate, Geometry};

/// An axis-aligned box in n-dimensional space, the general case of
/// [`Rectangle`](crate::Rectangle).
///
/// Corners are normalized at construction: on every axis `i`,
/// `lower_corner[i] <= upper_corner[i]` holds for the life of the value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Volume {
    lower: NPoint,
    upper: NPoint,
}

impl Volume {
    /// Creates the box spanning two opposite corners, in any per-axis order.
    ///
    /// # Example
    /// ```rust
    /// use hyperbox::{Geometry, NPoint, Volume};
    ///
    /// let v = Volume::new(NPoint::new([2.0, 0.0, 4.0]), NPoint::new([0.0, 3.0, 1.0]));
    /// assert_eq!(v.lower_corner(), &NPoint::new([0.0, 0.0, 1.0]));
    /// assert_eq!(v.upper_corner(), &NPoint::new([2.0, 3.0, 4.0]));
    /// assert_eq!(v.hypervolume(), 18.0);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the corners have different dimensionality.
    pub fn new(a: NPoint, b: NPoint) -> Self {
        assert_eq!(
            a.dimensions(),
            b.dimensions(),
            "Volume corners must have equal dimensionality"
        );
        let mut lower = a.coordinates().to_vec();
        let mut upper = a.coordinates().to_vec();
        extend_bounds(&mut lower, &mut upper, b.coordinates());
        Volume {
            lower: NPoint::new(lower),
            upper: NPoint::new(upper),
        }
    }

    pub fn lower_corner(&self) -> &NPoint {
        &self.lower
    }

    pub fn upper_corner(&self) -> &NPoint {
        &self.upper
    }

    /// Extent along one axis, always >= 0.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= self.dimensions()`.
    pub fn edge_length(&self, axis: usize) -> f64 {
        self.upper.coordinate(axis) - self.lower.coordinate(axis)
    }
}

/// Widens per-axis bounds to also cover `point`. All three slices must have
/// the same length.
pub(crate) fn extend_bounds(lower: &mut [f64], upper: &mut [f64], point: &[f64]) {
    for axis in 0..lower.len() {
        lower[axis] = lower[axis].min(point[axis]);
        upper[axis] = upper[axis].max(point[axis]);
    }
}

impl Geometry for Volume {
    fn dimensions(&self) -> usize {
        self.lower.dimensions()
    }

    /// Product of the edge lengths over all axes. Zero exactly when some edge
    /// has zero length.
    fn hypervolume(&self) -> f64 {
        (0..self.dimensions()).map(|axis| self.edge_length(axis)).product()
    }
}

impl Encapsulate<NPoint> for Volume {
    type Output = Result<Volume, DimensionMismatch>;

    /// Returns the box widened just enough to also cover `point`.
    ///
    /// # Example
    /// ```rust
    /// use hyperbox::{Encapsulate, Geometry, NPoint, Volume};
    ///
    /// let v = Volume::new(NPoint::new([0.0, 0.0, 0.0]), NPoint::new([2.0, 2.0, 2.0]));
    /// let grown = v.encapsulate(&NPoint::new([3.0, 3.0, 3.0])).unwrap();
    /// assert_eq!(grown.hypervolume(), 27.0);
    /// ```
    fn encapsulate(&self, point: &NPoint) -> Self::Output {
        if self.dimensions() != point.dimensions() {
            return Err(DimensionMismatch {
                left: self.dimensions(),
                right: point.dimensions(),
            });
        }
        let mut lower = self.lower.coordinates().to_vec();
        let mut upper = self.upper.coordinates().to_vec();
        extend_bounds(&mut lower, &mut upper, point.coordinates());
        Ok(Volume {
            lower: NPoint::new(lower),
            upper: NPoint::new(upper),
        })
    }
}

impl Encapsulate<Volume> for Volume {
    type Output = Result<Volume, DimensionMismatch>;

    /// Bounding-box union of two boxes.
    fn encapsulate(&self, other: &Volume) -> Self::Output {
        if self.dimensions() != other.dimensions() {
            return Err(DimensionMismatch {
                left: self.dimensions(),
                right: other.dimensions(),
            });
        }
        let mut lower = self.lower.coordinates().to_vec();
        let mut upper = self.upper.coordinates().to_vec();
        extend_bounds(&mut lower, &mut upper, other.lower.coordinates());
        extend_bounds(&mut lower, &mut upper, other.upper.coordinates());
        Ok(Volume {
            lower: NPoint::new(lower),
            upper: NPoint::new(upper),
        })
    }
}

/// Renders as `Volume[<lower corner>, <upper corner>] (Volume: <measure>)`.
impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Volume[{}, {}] (Volume: {:.2})",
            self.lower,
            self.upper,
            self.hypervolume()
        )
    }
}
