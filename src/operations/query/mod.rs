mod gjk_distance;
mod gjk_intersect;
mod simplex;

pub use gjk_distance::GjkDistance;
pub use gjk_intersect::GjkIntersect;

use crate::error::{AlgorithmError, GeometryError, Result};
use crate::math::{Point2, Vector2};

/// Lower bound of the default GJK iteration cap.
const MIN_ITERATIONS: usize = 32;

/// Default iterations allowed per input vertex.
const ITERATIONS_PER_VERTEX: usize = 4;

/// Arbitrary non-zero direction the GJK searches start from.
fn seed_direction() -> Vector2 {
    Vector2::new(1.0, -1.0)
}

/// Validates the inputs of a GJK query and resolves its iteration cap.
fn iteration_limit(a: &[Point2], b: &[Point2], requested: Option<usize>) -> Result<usize> {
    if a.is_empty() || b.is_empty() {
        return Err(AlgorithmError::DegenerateInput(format!(
            "GJK needs two non-empty point sets, got {} and {} points",
            a.len(),
            b.len()
        ))
        .into());
    }
    if a.iter().chain(b).any(|p| !(p.x.is_finite() && p.y.is_finite())) {
        return Err(GeometryError::InvalidArgument(
            "GJK point sets must have finite coordinates".to_owned(),
        )
        .into());
    }
    match requested {
        Some(0) => Err(GeometryError::InvalidArgument(
            "GJK iteration cap must be positive".to_owned(),
        )
        .into()),
        Some(limit) => Ok(limit),
        None => Ok(MIN_ITERATIONS.max(ITERATIONS_PER_VERTEX * (a.len() + b.len()))),
    }
}
