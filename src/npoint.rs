use std::fmt;

use crate::shape::{DimensionMismatch, Encapsulate, Geometry};
use crate::volume::{extend_bounds, Volume};

/// A point in n-dimensional space, `n >= 2`.
///
/// Unlike [`Point2D`](crate::Point2D), which is fixed to two named axes, an
/// `NPoint` carries an arbitrary number of indexed coordinates and pairs with
/// [`Volume`] the way `Point2D` pairs with
/// [`Rectangle`](crate::Rectangle).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NPoint {
    coordinates: Vec<f64>,
}

impl NPoint {
    /// Creates a point from its coordinates. The buffer is owned by the point,
    /// so the caller keeps no way to mutate it afterwards.
    ///
    /// # Example
    /// ```rust
    /// use hyperbox::{Geometry, NPoint};
    ///
    /// let p = NPoint::new([1.0, 2.0, 3.0]);
    /// assert_eq!(p.dimensions(), 3);
    /// assert_eq!(p.coordinate(2), 3.0);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if fewer than 2 coordinates are supplied.
    pub fn new(coordinates: impl Into<Vec<f64>>) -> Self {
        let coordinates = coordinates.into();
        assert!(
            coordinates.len() >= 2,
            "NPoint requires at least 2 coordinates, got {}",
            coordinates.len()
        );
        NPoint { coordinates }
    }

    /// All coordinates, in axis order.
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// The coordinate on one axis.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.dimensions()`.
    pub fn coordinate(&self, index: usize) -> f64 {
        self.coordinates[index]
    }
}

impl Geometry for NPoint {
    fn dimensions(&self) -> usize {
        self.coordinates.len()
    }

    fn hypervolume(&self) -> f64 {
        0.0
    }
}

impl Encapsulate<NPoint> for NPoint {
    type Output = Result<Volume, DimensionMismatch>;

    /// Returns the volume spanning both points, or a [`DimensionMismatch`]
    /// if they live in spaces of different dimensionality.
    ///
    /// # Example
    /// ```rust
    /// use hyperbox::{Encapsulate, Geometry, NPoint};
    ///
    /// let v = NPoint::new([0.0, 0.0, 0.0])
    ///     .encapsulate(&NPoint::new([2.0, 3.0, 4.0]))
    ///     .unwrap();
    /// assert_eq!(v.hypervolume(), 24.0);
    /// ```
    fn encapsulate(&self, other: &NPoint) -> Self::Output {
        if self.dimensions() != other.dimensions() {
            return Err(DimensionMismatch {
                left: self.dimensions(),
                right: other.dimensions(),
            });
        }
        let mut lower = self.coordinates.clone();
        let mut upper = self.coordinates.clone();
        extend_bounds(&mut lower, &mut upper, &other.coordinates);
        Ok(Volume::new(NPoint::new(lower), NPoint::new(upper)))
    }
}

impl Encapsulate<Volume> for NPoint {
    type Output = Result<Volume, DimensionMismatch>;

    fn encapsulate(&self, volume: &Volume) -> Self::Output {
        // Same region either way around; the volume holds the logic.
        volume.encapsulate(self)
    }
}

/// Renders a coordinate list as `Point(c0, c1, ..., cn)`, two decimals per
/// coordinate. Shared by both point types so box corners print uniformly.
pub(crate) fn write_point(
    f: &mut fmt::Formatter<'_>,
    coordinates: impl IntoIterator<Item = f64>,
) -> fmt::Result {
    f.write_str("Point(")?;
    let mut sep = "";
    for c in coordinates {
        write!(f, "{}{:.2}", sep, c)?;
        sep = ", ";
    }
    f.write_str(")")
}

impl fmt::Display for NPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_point(f, self.coordinates.iter().copied())
    }
}
