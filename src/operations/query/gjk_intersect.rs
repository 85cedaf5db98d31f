use tracing::{trace, warn};

use crate::error::{AlgorithmError, Result};
use crate::math::support_2d::support;
use crate::math::{Point2, Vector2, Vector2Ext};

use super::simplex::Simplex;
use super::{iteration_limit, seed_direction};

/// Boolean GJK intersection test between two convex point sets.
///
/// Grows a simplex of Minkowski-difference points toward the origin until
/// it either encloses the origin (the sets intersect) or a support point
/// fails to pass the origin (they are disjoint).
///
/// Both sets must describe convex shapes; this is not checked. Only the
/// convex hull of each set matters, so vertex order is irrelevant.
#[derive(Debug, Clone, Copy)]
pub struct GjkIntersect<'a> {
    a: &'a [Point2],
    b: &'a [Point2],
    max_iterations: Option<usize>,
}

impl<'a> GjkIntersect<'a> {
    /// Creates a new `GjkIntersect` query.
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

    /// Executes the query, returning `true` if the two sets intersect.
    ///
    /// Boundaries that only touch report `false` when a support point lands
    /// exactly on the origin, even though the distance is then 0.
    ///
    /// # Errors
    ///
    /// - `AlgorithmError::DegenerateInput` if either point set is empty
    /// - `GeometryError::InvalidArgument` if a coordinate is not finite or
    ///   the iteration cap is zero
    /// - `AlgorithmError::NumericalNonconvergence` if the cap is exceeded
    pub fn execute(&self) -> Result<bool> {
        let limit = iteration_limit(self.a, self.b, self.max_iterations)?;

        let mut dir = seed_direction();
        let mut simplex = Simplex::new(support(self.a, self.b, &-dir)?);

        for iteration in 1..=limit {
            let newest = support(self.a, self.b, &dir)?;
            if newest.dot(&dir) <= 0.0 {
                trace!(iteration, "support point does not pass the origin");
                return Ok(false);
            }
            simplex.push(newest);
            if refine(&mut simplex, &mut dir) {
                trace!(iteration, "simplex encloses the origin");
                return Ok(true);
            }
        }

        warn!(limit, "GJK intersection test hit its iteration cap");
        Err(AlgorithmError::NumericalNonconvergence { iterations: limit }.into())
    }
}

/// Updates the simplex and search direction after a push.
///
/// Returns `true` once a triangle encloses the origin. A segment never does;
/// it only turns the search direction toward the origin.
fn refine(simplex: &mut Simplex, dir: &mut Vector2) -> bool {
    let a = simplex.newest();

    if simplex.len() == 2 {
        let b = simplex.get(0);
        let mut normal = (b - a).perpendicular();
        if a.dot(&normal) > 0.0 {
            normal = -normal;
        }
        *dir = normal;
        return false;
    }

    let b = simplex.get(1);
    let c = simplex.get(0);

    let ab_normal = outward_normal(&(b - a), &(c - a));
    if a.dot(&ab_normal) < 0.0 {
        simplex.remove(0);
        *dir = ab_normal;
        return false;
    }

    let ac_normal = outward_normal(&(c - a), &(b - a));
    if a.dot(&ac_normal) < 0.0 {
        simplex.remove(1);
        *dir = ac_normal;
        return false;
    }

    true
}

/// Perpendicular of `edge` pointing away from `inner`.
fn outward_normal(edge: &Vector2, inner: &Vector2) -> Vector2 {
    let normal = edge.perpendicular();
    if normal.dot(inner) > 0.0 {
        -normal
    } else {
        normal
    }
}
