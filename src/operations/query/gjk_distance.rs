use tracing::{trace, warn};

use crate::error::{AlgorithmError, Result};
use crate::math::support_2d::{closest_to_origin, support};
use crate::math::{Point2, Vector2Ext, EPSILON};

use super::{iteration_limit, seed_direction};

/// GJK separating distance between two convex point sets.
///
/// Keeps a segment `(a, b)` of Minkowski-difference points and repeatedly
/// replaces one endpoint with the support point along the direction from
/// the segment's closest point toward the origin, until no support point
/// advances by more than [`EPSILON`].
///
/// Returns 0 when the shapes touch or overlap. Both sets must describe
/// convex shapes; this is not checked.
#[derive(Debug, Clone, Copy)]
pub struct GjkDistance<'a> {
    a: &'a [Point2],
    b: &'a [Point2],
    max_iterations: Option<usize>,
}

impl<'a> GjkDistance<'a> {
    /// Creates a new `GjkDistance` query.
    #[must_use]
    pub fn new(a: &'a [Point2], b: &'a [Point2]) -> Self {
        Self {
            a,
            b,
            max_iterations: None,
        }
    }

    /// Overrides the default iteration cap of `max(32, 4 * (|a| + |b|))`.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Executes the query, returning the non-negative separating distance.
    ///
    /// # Errors
    ///
    /// - `AlgorithmError::DegenerateInput` if either point set is empty
    /// - `GeometryError::InvalidArgument` if a coordinate is not finite or
    ///   the iteration cap is zero
    /// - `AlgorithmError::NumericalNonconvergence` if the cap is exceeded
    pub fn execute(&self) -> Result<f64> {
        let limit = iteration_limit(self.a, self.b, self.max_iterations)?;

        let seed = seed_direction();
        let mut a = support(self.a, self.b, &seed)?;
        let mut b = support(self.a, self.b, &-seed)?;
        // `dir` must stay exactly the negated closest point: the final
        // distance is read back from `c . dir`.
        let mut dir = -closest_to_origin(&a, &b);
        if dir.norm_squared() <= EPSILON {
            return Ok(0.0);
        }

        for iteration in 1..=limit {
            let c = support(self.a, self.b, &dir)?;

            let sa = a.cross_2d(&b);
            let sb = b.cross_2d(&c);
            let sc = c.cross_2d(&a);
            if (sa * sb).min(sa * sc) > 0.0 {
                trace!(iteration, "triangle encloses the origin");
                return Ok(0.0);
            }

            let da = a.dot(&dir);
            let db = b.dot(&dir);
            let dc = c.dot(&dir);
            if (dc - da).min(dc - db) <= EPSILON {
                trace!(iteration, "support point made no progress");
                return Ok((-dc).max(0.0).sqrt());
            }

            let p1 = closest_to_origin(&a, &c);
            let p2 = closest_to_origin(&b, &c);
            let p1_sq = p1.norm_squared();
            let p2_sq = p2.norm_squared();
            if p1_sq.min(p2_sq) <= EPSILON {
                trace!(iteration, "closest feature touches the origin");
                return Ok(0.0);
            }

            if p1_sq <= p2_sq {
                b = c;
                dir = -p1;
            } else {
                a = c;
                dir = -p2;
            }
        }

        warn!(limit, "GJK distance query hit its iteration cap");
        Err(AlgorithmError::NumericalNonconvergence { iterations: limit }.into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::error::Convex2dError;

    fn square(x: f64, y: f64, side: f64) -> Vec<Point2> {
        vec![
            Point2::new(x, y),
            Point2::new(x + side, y),
            Point2::new(x + side, y + side),
            Point2::new(x, y + side),
        ]
    }

    #[test]
    fn diagonal_squares() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(2.0, 2.0, 1.0);
        let d = GjkDistance::new(&a, &b).execute().unwrap();
        assert_relative_eq!(d, 2.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn side_by_side_squares() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(3.0, 0.5, 1.0);
        let d = GjkDistance::new(&a, &b).execute().unwrap();
        assert_relative_eq!(d, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn overlapping_squares_are_zero() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(5.0, 5.0, 10.0);
        assert_abs_diff_eq!(GjkDistance::new(&a, &b).execute().unwrap(), 0.0);
    }

    #[test]
    fn touching_squares_are_zero() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(1.0, 0.0, 1.0);
        assert_abs_diff_eq!(GjkDistance::new(&a, &b).execute().unwrap(), 0.0);
    }

    #[test]
    fn point_to_point() {
        let a = vec![Point2::new(1.0, 1.0)];
        let b = vec![Point2::new(4.0, 5.0)];
        let d = GjkDistance::new(&a, &b).execute().unwrap();
        assert_relative_eq!(d, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn point_to_triangle_edge() {
        let tri = vec![Point2::new(0.0, 0.0), Point2::new(4.0, 0.0), Point2::new(2.0, 4.0)];
        let p = vec![Point2::new(2.0, -3.0)];
        let d = GjkDistance::new(&tri, &p).execute().unwrap();
        assert_relative_eq!(d, 3.0, epsilon = 1e-6);
    }

    #[test]
    fn symmetric_in_arguments() {
        let a = vec![Point2::new(0.0, 0.0), Point2::new(3.0, 1.0), Point2::new(1.0, 4.0)];
        let b = vec![
            Point2::new(6.0, 2.0),
            Point2::new(9.0, 2.5),
            Point2::new(8.0, 6.0),
            Point2::new(6.5, 5.0),
        ];
        let ab = GjkDistance::new(&a, &b).execute().unwrap();
        let ba = GjkDistance::new(&b, &a).execute().unwrap();
        assert!(ab > 0.0);
        assert_relative_eq!(ab, ba, epsilon = 1e-6);
    }

    #[test]
    fn empty_set_is_degenerate() {
        let a = square(0.0, 0.0, 1.0);
        let err = GjkDistance::new(&[], &a).execute().unwrap_err();
        assert!(matches!(
            err,
            Convex2dError::Algorithm(AlgorithmError::DegenerateInput(_))
        ));
    }

    #[test]
    fn iteration_cap_reports_nonconvergence() {
        // The diagonal squares need two refinement steps.
        let a = square(0.0, 0.0, 1.0);
        let b = square(2.0, 2.0, 1.0);
        let err = GjkDistance::new(&a, &b)
            .with_max_iterations(1)
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            Convex2dError::Algorithm(AlgorithmError::NumericalNonconvergence { iterations: 1 })
        ));
    }
}
