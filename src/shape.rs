use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

use crate::npoint::NPoint;
use crate::point::Point2D;
use crate::rect::Rectangle;
use crate::volume::Volume;

/// Two shapes of different dimensionality were asked to encapsulate each
/// other. This is the one error expected during normal use of the algebra;
/// callers branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("dimension mismatch: {left}-dimensional shape cannot encapsulate {right}-dimensional shape")]
pub struct DimensionMismatch {
    /// Dimensionality of the shape the operation was invoked on.
    pub left: usize,
    /// Dimensionality of the argument shape.
    pub right: usize,
}

/// Failure of a [`Shape`]-level encapsulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncapsulateError {
    #[error(transparent)]
    DimensionMismatch(#[from] DimensionMismatch),
    /// The fixed-2D family ([`Point2D`]/[`Rectangle`]) and the n-dimensional
    /// family ([`NPoint`]/[`Volume`]) stay disjoint even when an `NPoint` or
    /// `Volume` happens to be 2-dimensional.
    #[error("Point2D/Rectangle and NPoint/Volume are disjoint shape families")]
    DisjointFamilies,
}

/// The extent contract every shape satisfies: a fixed dimensionality and a
/// non-negative measure of extent, recomputed from the geometry on every call.
pub trait Geometry {
    /// The dimensionality of the space the shape lives in. Fixed at
    /// construction, always >= 2.
    fn dimensions(&self) -> usize;

    /// The generalized measure of extent: 0 for points, area for rectangles,
    /// the product of edge lengths for n-dimensional boxes. Never negative.
    fn hypervolume(&self) -> f64;

    /// Total order by hypervolume **alone**.
    ///
    /// This is a measure-only order, not geometric equality: two
    /// non-congruent shapes of equal hypervolume compare `Equal` here while
    /// still being `!=` as values. That is also why shapes do not implement
    /// `PartialOrd` directly.
    ///
    /// # Example
    /// ```rust
    /// use std::cmp::Ordering;
    /// use hyperbox::{Geometry, Point2D, Rectangle};
    ///
    /// let small = Rectangle::new(Point2D::new(0.0, 0.0), Point2D::new(2.0, 2.0));
    /// let large = Rectangle::new(Point2D::new(0.0, 0.0), Point2D::new(3.0, 3.0));
    /// assert_eq!(small.cmp_extent(&large), Ordering::Less);
    /// assert_eq!(large.cmp_extent(&small), Ordering::Greater);
    /// assert_eq!(small.cmp_extent(&small), Ordering::Equal);
    /// ```
    fn cmp_extent<G: Geometry + ?Sized>(&self, other: &G) -> Ordering {
        self.hypervolume().total_cmp(&other.hypervolume())
    }
}

/// Encapsulation: building the smallest axis-aligned box containing `self`
/// and `other`. Neither operand is mutated.
///
/// The relation is symmetric in effect: whenever both orders of a pairing are
/// valid, `a.encapsulate(b)` and `b.encapsulate(a)` produce the same
/// normalized region, even though one side may implement the math and the
/// other delegate.
pub trait Encapsulate<T> {
    /// What the pairing produces: a concrete box for infallible pairings, a
    /// `Result` where a dimension mismatch is possible.
    type Output;

    fn encapsulate(&self, other: &T) -> Self::Output;
}

/// Any shape of the algebra, as one tagged value.
///
/// The closed set of valid encapsulation pairings is point+point,
/// point+box and box+box within each family; the total match in
/// [`Shape::encapsulate`](Encapsulate::encapsulate) handles every one of
/// them in both orders, so no "unknown shape" case exists at runtime.
///
/// # Example
/// ```rust
/// use hyperbox::{Encapsulate, Geometry, NPoint, Point2D, Shape};
///
/// let a = Shape::from(Point2D::new(0.0, 0.0));
/// let b = Shape::from(Point2D::new(4.0, 3.0));
/// let bbox = a.encapsulate(&b).unwrap();
/// assert_eq!(bbox.hypervolume(), 12.0);
///
/// // Mismatched dimensionality is a typed error, not a panic:
/// let c = Shape::from(NPoint::new([0.0, 0.0, 0.0]));
/// assert!(a.encapsulate(&c).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    Point2D(Point2D),
    NPoint(NPoint),
    Rectangle(Rectangle),
    Volume(Volume),
}

impl From<Point2D> for Shape {
    fn from(p: Point2D) -> Self {
        Shape::Point2D(p)
    }
}

impl From<NPoint> for Shape {
    fn from(p: NPoint) -> Self {
        Shape::NPoint(p)
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}

impl From<Volume> for Shape {
    fn from(v: Volume) -> Self {
        Shape::Volume(v)
    }
}

impl Geometry for Shape {
    fn dimensions(&self) -> usize {
        match self {
            Shape::Point2D(p) => p.dimensions(),
            Shape::NPoint(p) => p.dimensions(),
            Shape::Rectangle(r) => r.dimensions(),
            Shape::Volume(v) => v.dimensions(),
        }
    }

    fn hypervolume(&self) -> f64 {
        match self {
            Shape::Point2D(p) => p.hypervolume(),
            Shape::NPoint(p) => p.hypervolume(),
            Shape::Rectangle(r) => r.hypervolume(),
            Shape::Volume(v) => v.hypervolume(),
        }
    }
}

impl Encapsulate<Shape> for Shape {
    type Output = Result<Shape, EncapsulateError>;

    /// Total dispatch over the pair of variants, dimension check first.
    ///
    /// Within a family every pairing is handled in both orders. The only
    /// pairing left after an equal-dimension check is a cross-family one
    /// (a 2-dimensional [`NPoint`]/[`Volume`] meeting a
    /// [`Point2D`]/[`Rectangle`]), which the algebra keeps apart and reports
    /// as [`EncapsulateError::DisjointFamilies`].
    fn encapsulate(&self, other: &Shape) -> Self::Output {
        if self.dimensions() != other.dimensions() {
            return Err(DimensionMismatch {
                left: self.dimensions(),
                right: other.dimensions(),
            }
            .into());
        }
        match (self, other) {
            (Shape::Point2D(a), Shape::Point2D(b)) => Ok(a.encapsulate(b).into()),
            (Shape::Point2D(p), Shape::Rectangle(r)) | (Shape::Rectangle(r), Shape::Point2D(p)) => {
                Ok(r.encapsulate(p).into())
            }
            (Shape::Rectangle(a), Shape::Rectangle(b)) => Ok(a.encapsulate(b).into()),
            (Shape::NPoint(a), Shape::NPoint(b)) => Ok(a.encapsulate(b)?.into()),
            (Shape::NPoint(p), Shape::Volume(v)) | (Shape::Volume(v), Shape::NPoint(p)) => {
                Ok(v.encapsulate(p)?.into())
            }
            (Shape::Volume(a), Shape::Volume(b)) => Ok(a.encapsulate(b)?.into()),
            _ => Err(EncapsulateError::DisjointFamilies),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Point2D(p) => p.fmt(f),
            Shape::NPoint(p) => p.fmt(f),
            Shape::Rectangle(r) => r.fmt(f),
            Shape::Volume(v) => v.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::{DimensionMismatch, Encapsulate, EncapsulateError, Geometry, Shape};
    use crate::npoint::NPoint;
    use crate::point::Point2D;
    use crate::rect::Rectangle;
    use crate::volume::Volume;

    fn rect(x1: f64, y1: f64, x2: f64, y2: f64) -> Shape {
        Rectangle::new(Point2D::new(x1, y1), Point2D::new(x2, y2)).into()
    }

    #[test]
    fn points_span_a_rectangle() {
        let u = Shape::from(Point2D::new(0.0, 0.0))
            .encapsulate(&Point2D::new(4.0, 3.0).into())
            .unwrap();
        assert_eq!(u, rect(0.0, 0.0, 4.0, 3.0));
        assert_eq!(u.hypervolume(), 12.0);
    }

    #[test]
    fn rectangle_grows_around_point() {
        let u = rect(0.0, 0.0, 2.0, 2.0)
            .encapsulate(&Point2D::new(5.0, 5.0).into())
            .unwrap();
        assert_eq!(u, rect(0.0, 0.0, 5.0, 5.0));
        assert_eq!(u.hypervolume(), 25.0);
    }

    #[test]
    fn npoints_span_a_volume() {
        let u = Shape::from(NPoint::new([0.0, 0.0, 0.0]))
            .encapsulate(&NPoint::new([2.0, 3.0, 4.0]).into())
            .unwrap();
        let expected = Volume::new(NPoint::new([0.0, 0.0, 0.0]), NPoint::new([2.0, 3.0, 4.0]));
        assert_eq!(u, expected.into());
        assert_eq!(u.hypervolume(), 24.0);
    }

    #[test]
    fn volume_grows_around_npoint() {
        let v: Shape = Volume::new(NPoint::new([0.0, 0.0, 0.0]), NPoint::new([2.0, 2.0, 2.0])).into();
        let u = v.encapsulate(&NPoint::new([3.0, 3.0, 3.0]).into()).unwrap();
        assert_eq!(u.hypervolume(), 27.0);
    }

    #[test]
    fn dimension_mismatch_beats_variant_mismatch() {
        // 2D point vs 3D point: rejected on dimensionality, whatever the variants.
        let err = Shape::from(Point2D::new(1.0, 1.0))
            .encapsulate(&NPoint::new([0.0, 0.0, 0.0]).into())
            .unwrap_err();
        assert_eq!(
            err,
            EncapsulateError::DimensionMismatch(DimensionMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn equal_dimension_cross_family_is_rejected() {
        // A 2-dimensional NPoint is numerically compatible with a Point2D but
        // belongs to the other family.
        let err = Shape::from(Point2D::new(1.0, 1.0))
            .encapsulate(&NPoint::new([0.0, 0.0]).into())
            .unwrap_err();
        assert_eq!(err, EncapsulateError::DisjointFamilies);

        let planar = rect(0.0, 0.0, 1.0, 1.0);
        let spatial: Shape =
            Volume::new(NPoint::new([0.0, 0.0]), NPoint::new([1.0, 1.0])).into();
        assert_eq!(
            planar.encapsulate(&spatial).unwrap_err(),
            EncapsulateError::DisjointFamilies
        );
    }

    #[test]
    fn every_valid_pairing_is_symmetric() {
        let pairs: Vec<(Shape, Shape)> = vec![
            (Point2D::new(0.0, 3.0).into(), Point2D::new(4.0, 0.0).into()),
            (Point2D::new(5.0, -1.0).into(), rect(0.0, 0.0, 2.0, 2.0)),
            (rect(0.0, 0.0, 2.0, 2.0), rect(1.0, -1.0, 5.0, 1.0)),
            (
                NPoint::new([0.0, 3.0, 1.0]).into(),
                NPoint::new([4.0, 0.0, 2.0]).into(),
            ),
            (
                NPoint::new([5.0, 5.0, 5.0]).into(),
                Volume::new(NPoint::new([0.0, 0.0, 0.0]), NPoint::new([2.0, 2.0, 2.0])).into(),
            ),
            (
                Volume::new(NPoint::new([0.0, 0.0, 0.0]), NPoint::new([2.0, 2.0, 2.0])).into(),
                Volume::new(NPoint::new([1.0, -1.0, 1.0]), NPoint::new([5.0, 1.0, 1.5])).into(),
            ),
        ];
        for (a, b) in pairs {
            assert_eq!(a.encapsulate(&b).unwrap(), b.encapsulate(&a).unwrap());
        }
    }

    #[test]
    fn cmp_extent_orders_by_hypervolume() {
        let small = rect(0.0, 0.0, 2.0, 2.0);
        let large = rect(0.0, 0.0, 3.0, 3.0);
        assert_eq!(small.cmp_extent(&large), Ordering::Less);
        assert_eq!(large.cmp_extent(&small), Ordering::Greater);
        assert_eq!(small.cmp_extent(&small), Ordering::Equal);
    }

    #[test]
    fn cmp_extent_ignores_position_and_variant() {
        // Same measure, different geometry and different variant families.
        let r = rect(10.0, 10.0, 14.0, 13.0);
        let v: Shape =
            Volume::new(NPoint::new([0.0, 0.0]), NPoint::new([6.0, 2.0])).into();
        assert_eq!(r.cmp_extent(&v), Ordering::Equal);
        assert_ne!(r, v);

        // Every point is Equal to every other point under this order.
        let p: Shape = Point2D::new(1.0, 2.0).into();
        let q: Shape = NPoint::new([9.0, 9.0, 9.0]).into();
        assert_eq!(p.cmp_extent(&q), Ordering::Equal);
    }

    #[test]
    fn display_forwards_to_variants() {
        let shapes: Vec<Shape> = vec![
            Point2D::new(1.0, 2.0).into(),
            NPoint::new([1.0, 2.0, 3.0]).into(),
            rect(0.0, 0.0, 4.0, 3.0),
            Volume::new(NPoint::new([0.0, 0.0, 0.0]), NPoint::new([2.0, 3.0, 4.0])).into(),
        ];
        let rendered: Vec<String> = shapes.iter().map(Shape::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "Point(1.00, 2.00)",
                "Point(1.00, 2.00, 3.00)",
                "Rectangle[Point(0.00, 0.00), Point(4.00, 3.00)] (Area: 12.00)",
                "Volume[Point(0.00, 0.00, 0.00), Point(2.00, 3.00, 4.00)] (Volume: 24.00)",
            ]
        );
    }

    #[test]
    fn error_messages() {
        let err = DimensionMismatch { left: 2, right: 3 };
        assert_eq!(
            err.to_string(),
            "dimension mismatch: 2-dimensional shape cannot encapsulate 3-dimensional shape"
        );
        // The transparent wrapper renders identically.
        assert_eq!(EncapsulateError::from(err).to_string(), err.to_string());
    }
}
