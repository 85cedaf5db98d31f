//! 2D convex geometry core.
//!
//! Vector, segment, disk and polygon primitives, plus the two GJK
//! (Gilbert–Johnson–Keerthi) queries over the Minkowski difference: a
//! boolean intersection test and a separating-distance computation.
//!
//! ```
//! use convex2d::geometry::ConvexPolygon;
//! use convex2d::math::Point2;
//!
//! let a = ConvexPolygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ])?;
//! let b = ConvexPolygon::new(vec![
//!     Point2::new(2.0, 2.0),
//!     Point2::new(3.0, 2.0),
//!     Point2::new(3.0, 3.0),
//!     Point2::new(2.0, 3.0),
//! ])?;
//!
//! assert!(!a.intersects(&b)?);
//! assert!((a.distance_to(&b)? - 2.0_f64.sqrt()).abs() < 1e-9);
//! # Ok::<(), convex2d::Convex2dError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{AlgorithmError, Convex2dError, GeometryError, Result};
