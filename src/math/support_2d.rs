//! Support-function primitives over the Minkowski difference of two point
//! sets, shared by the GJK intersection and distance queries.

use super::{Point2, Vector2};
use crate::error::{AlgorithmError, Result};

/// Returns the point of `points` with the largest projection onto `dir`.
///
/// Ties are broken by scan order: the first point reaching the maximum wins.
///
/// # Errors
///
/// Returns `AlgorithmError::DegenerateInput` if `points` is empty.
pub fn farthest_point(points: &[Point2], dir: &Vector2) -> Result<Point2> {
    let (first, rest) = points.split_first().ok_or_else(|| {
        AlgorithmError::DegenerateInput("support query on an empty point set".into())
    })?;

    let mut best = *first;
    let mut best_dot = first.coords.dot(dir);
    for pt in rest {
        let dot = pt.coords.dot(dir);
        if dot > best_dot {
            best_dot = dot;
            best = *pt;
        }
    }
    Ok(best)
}

/// Farthest point of the Minkowski difference `a - b` along `dir`.
///
/// # Errors
///
/// Returns `AlgorithmError::DegenerateInput` if either set is empty.
pub fn support(a: &[Point2], b: &[Point2], dir: &Vector2) -> Result<Vector2> {
    Ok(farthest_point(a, dir)? - farthest_point(b, &(-*dir))?)
}

/// Closest point to the origin on the segment from `a` to `b`.
///
/// A degenerate segment (`a == b`) yields `a`.
#[must_use]
pub fn closest_to_origin(a: &Vector2, b: &Vector2) -> Vector2 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq == 0.0 {
        return *a;
    }
    let t = (-a.dot(&ab) / len_sq).clamp(0.0, 1.0);
    *a + ab * t
}

/// Explicit Minkowski difference `{p - q | p in a, q in b}`.
///
/// Quadratic in size; the GJK queries never build it and only sample it
/// through [`support`].
#[must_use]
pub fn minkowski_difference(a: &[Point2], b: &[Point2]) -> Vec<Vector2> {
    let mut out = Vec::with_capacity(a.len() * b.len());
    for p in a {
        for q in b {
            out.push(*p - *q);
        }
    }
    out
}
