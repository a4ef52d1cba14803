//!
//! hyperbox is a small algebra of axis-aligned shapes: 2D points, n-dimensional
//! points, rectangles and n-dimensional boxes ("volumes").
//!
//! Every shape measures its extent through [`Geometry::hypervolume`] (area in
//! 2D, volume in 3D, products of edge lengths above that) and combines with
//! another shape through [`Encapsulate::encapsulate`], which yields the
//! smallest axis-aligned box containing both operands.
//!
//! Shapes are plain immutable values: encapsulation never mutates its operands,
//! it builds a new shape. Box corners are normalized at construction so that
//! `lower <= upper` holds per axis no matter what order the corners were given
//! in.
//!
//! ```rust
//! use hyperbox::{Encapsulate, Geometry, Point2D, Rectangle};
//!
//! let bbox = Point2D::new(0.0, 0.0).encapsulate(&Point2D::new(4.0, 3.0));
//! assert_eq!(bbox, Rectangle::new(Point2D::new(0.0, 0.0), Point2D::new(4.0, 3.0)));
//! assert_eq!(bbox.hypervolume(), 12.0);
//! ```
//!
//! The fixed-2D family ([`Point2D`], [`Rectangle`]) and the n-dimensional
//! family ([`NPoint`], [`Volume`]) are deliberately separate types: 2D callers
//! get `x`/`y` accessors instead of indexed axes. [`Shape`] wraps all four in
//! one tagged value for callers that mix them at runtime.
//!

pub mod npoint;
pub mod point;
pub mod rect;
pub mod shape;
pub mod volume;

pub use npoint::NPoint;
pub use point::Point2D;
pub use rect::Rectangle;
pub use shape::{DimensionMismatch, Encapsulate, EncapsulateError, Geometry, Shape};
pub use volume::Volume;
