pub mod support_2d;
pub mod vector_2d;

pub use vector_2d::Vector2Ext;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Tolerance for "close enough to zero" and "no further progress" checks
/// inside the GJK algorithms.
pub const EPSILON: f64 = 1e-7;

/// Determinant magnitude below which two segments are treated as parallel.
pub const PARALLEL_TOLERANCE: f64 = 1e-7;
