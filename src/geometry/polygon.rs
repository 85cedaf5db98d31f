use nalgebra::Rotation2;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2};
use crate::operations::query::{GjkDistance, GjkIntersect};

use super::LineSegment;

/// Far-away end of the ray cast by [`ConvexPolygon::contains`].
///
/// The irregular coordinates keep the ray off the vertices of axis-aligned
/// and lattice-aligned polygons.
const RAY_TARGET: Point2 = Point2::new(312_345.678_9, 297_531.246_8);

/// A polygon given by its ordered vertices.
///
/// Edges run from vertex `i` to vertex `(i + 1) % n`, including the closing
/// edge. The GJK-backed queries ([`intersects`](Self::intersects),
/// [`distance_to`](Self::distance_to)) require both polygons to be convex;
/// convexity is never checked and a concave input gives meaningless results.
/// The other queries only need a simple polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexPolygon {
    vertices: Vec<Point2>,
}

impl ConvexPolygon {
    /// Creates a polygon from its vertices.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` if `vertices` is empty or
    /// holds a non-finite coordinate.
    pub fn new(vertices: Vec<Point2>) -> Result<Self> {
        if vertices.is_empty() {
            return Err(GeometryError::InvalidArgument(
                "a polygon needs at least one vertex".to_owned(),
            )
            .into());
        }
        if let Some(i) = vertices.iter().position(|p| !is_finite(p)) {
            return Err(GeometryError::InvalidArgument(format!(
                "polygon vertex {i} is not finite: {}",
                vertices[i]
            ))
            .into());
        }
        Ok(Self { vertices })
    }

    /// Returns the vertices in order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Returns the number of vertices (and edges).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns edge `i`, wrapping around past the last vertex.
    #[must_use]
    pub fn edge(&self, i: usize) -> LineSegment {
        let n = self.vertices.len();
        LineSegment::new(self.vertices[i % n], self.vertices[(i + 1) % n])
    }

    /// Iterates over all edges, the closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = LineSegment> + '_ {
        (0..self.vertices.len()).map(|i| self.edge(i))
    }

    /// Moves every vertex by `offset`.
    pub fn translate(&mut self, offset: &Vector2) {
        for v in &mut self.vertices {
            *v += *offset;
        }
    }

    /// Rotates every vertex counter-clockwise by `angle` radians about `center`.
    pub fn rotate(&mut self, angle: f64, center: &Point2) {
        let rot = Rotation2::new(angle);
        for v in &mut self.vertices {
            *v = *center + rot * (*v - *center);
        }
    }

    /// Returns `true` if `point` lies inside the polygon.
    ///
    /// Ray-casting parity test; works for any simple polygon. The answer is
    /// unspecified for points exactly on an edge and when the ray passes
    /// through a vertex.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        let ray = LineSegment::new(*point, RAY_TARGET);
        let crossings = self.edges().filter(|edge| edge.intersects(&ray)).count();
        crossings % 2 == 1
    }

    /// Returns `true` if the segment has an endpoint inside the polygon or
    /// crosses one of its edges.
    #[must_use]
    pub fn intersects_segment(&self, segment: &LineSegment) -> bool {
        self.contains(&segment.start)
            || self.contains(&segment.end)
            || self.edges().any(|edge| edge.intersects(segment))
    }

    /// Returns `true` if the two convex polygons intersect (GJK).
    ///
    /// # Errors
    ///
    /// Returns `AlgorithmError::NumericalNonconvergence` if GJK fails to
    /// converge.
    pub fn intersects(&self, other: &ConvexPolygon) -> Result<bool> {
        GjkIntersect::new(&self.vertices, &other.vertices).execute()
    }

    /// Edge-by-edge intersection test, quadratic in the vertex counts.
    ///
    /// Agrees with [`intersects`](Self::intersects) on convex polygons whose
    /// boundaries do not merely touch.
    #[must_use]
    pub fn naive_intersects(&self, other: &ConvexPolygon) -> bool {
        other.edges().any(|edge| self.intersects_segment(&edge))
            || other.contains(&self.vertices[0])
    }

    /// Euclidean distance from `point` to the polygon; 0 inside.
    #[must_use]
    pub fn distance_to_point(&self, point: &Point2) -> f64 {
        if self.contains(point) {
            return 0.0;
        }
        self.penetration(point)
    }

    /// Minimum distance between the polygon boundary and `segment`.
    ///
    /// A segment lying entirely inside the polygon is not at distance 0.
    #[must_use]
    pub fn distance_to_segment(&self, segment: &LineSegment) -> f64 {
        self.edges()
            .map(|edge| edge.dist_to_segment(segment))
            .fold(f64::INFINITY, f64::min)
    }

    /// Separating distance between two convex polygons (GJK); 0 when they
    /// intersect.
    ///
    /// # Errors
    ///
    /// Returns `AlgorithmError::NumericalNonconvergence` if GJK fails to
    /// converge.
    pub fn distance_to(&self, other: &ConvexPolygon) -> Result<f64> {
        if self.intersects(other)? {
            return Ok(0.0);
        }
        GjkDistance::new(&self.vertices, &other.vertices).execute()
    }

    /// Edge-by-edge separating distance, quadratic in the vertex counts.
    #[must_use]
    pub fn naive_distance_to(&self, other: &ConvexPolygon) -> f64 {
        if self.naive_intersects(other) {
            return 0.0;
        }
        other
            .edges()
            .map(|edge| self.distance_to_segment(&edge))
            .fold(f64::INFINITY, f64::min)
    }

    /// Point on the polygon boundary closest to `point`.
    ///
    /// On ties the earliest edge wins.
    #[must_use]
    pub fn closest_point_to(&self, point: &Point2) -> Point2 {
        let mut nearest = self.vertices[0];
        let mut min_dist = f64::INFINITY;
        for edge in self.edges() {
            let candidate = edge.project_in(point);
            let dist = (point - candidate).norm();
            if dist < min_dist {
                min_dist = dist;
                nearest = candidate;
            }
        }
        nearest
    }

    /// Distance from `point` to the nearest edge, inside or outside.
    ///
    /// Unsigned: this is the distance to the boundary, not a penetration
    /// depth with a sign.
    #[must_use]
    pub fn penetration(&self, point: &Point2) -> f64 {
        self.edges()
            .map(|edge| edge.dist_to_point(point))
            .fold(f64::INFINITY, f64::min)
    }
}

fn is_finite(p: &Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::error::Convex2dError;

    fn poly(points: &[(f64, f64)]) -> ConvexPolygon {
        ConvexPolygon::new(points.iter().map(|&(x, y)| Point2::new(x, y)).collect()).unwrap()
    }

    fn square(x: f64, y: f64, side: f64) -> ConvexPolygon {
        poly(&[(x, y), (x + side, y), (x + side, y + side), (x, y + side)])
    }

    fn triangle() -> ConvexPolygon {
        poly(&[(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)])
    }

    #[test]
    fn empty_polygon_is_rejected() {
        let err = ConvexPolygon::new(vec![]).unwrap_err();
        assert!(matches!(
            err,
            Convex2dError::Geometry(GeometryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn non_finite_vertex_is_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = ConvexPolygon::new(vec![
                Point2::new(0.0, 0.0),
                Point2::new(bad, 0.0),
                Point2::new(0.0, 1.0),
            ])
            .unwrap_err();
            assert!(matches!(
                err,
                Convex2dError::Geometry(GeometryError::InvalidArgument(_))
            ));
        }
        assert!(ConvexPolygon::new(vec![Point2::new(1.0, f64::NAN)]).is_err());
    }

    #[test]
    fn edges_wrap_around() {
        let sq = square(0.0, 0.0, 1.0);
        let edges: Vec<_> = sq.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].start, Point2::new(0.0, 1.0));
        assert_eq!(edges[3].end, Point2::new(0.0, 0.0));
        assert_eq!(sq.edge(5), edges[1]);
    }

    #[test]
    fn contains_inside_and_outside() {
        let tri = triangle();
        assert!(tri.contains(&Point2::new(5.0, 5.0)));
        assert!(tri.contains(&Point2::new(1.0, 0.5)));
        assert!(!tri.contains(&Point2::new(0.0, 5.0)));
        assert!(!tri.contains(&Point2::new(5.0, -1.0)));
        assert!(!tri.contains(&Point2::new(20.0, 20.0)));

        let sq = square(0.0, 0.0, 1.0);
        assert!(sq.contains(&Point2::new(0.5, 0.5)));
        assert!(!sq.contains(&Point2::new(1.5, 0.5)));
    }

    #[test]
    fn contains_works_for_concave_polygons() {
        // An L shape: the notch at the top right is outside.
        let l = poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (2.0, 2.0), (2.0, 4.0), (0.0, 4.0)]);
        assert!(l.contains(&Point2::new(1.0, 3.0)));
        assert!(l.contains(&Point2::new(3.0, 1.0)));
        assert!(!l.contains(&Point2::new(3.0, 3.0)));
    }

    #[test]
    fn translate_and_rotate() {
        let mut sq = square(0.0, 0.0, 2.0);
        sq.translate(&Vector2::new(1.0, -1.0));
        assert_eq!(sq.vertices()[0], Point2::new(1.0, -1.0));
        assert_eq!(sq.vertices()[2], Point2::new(3.0, 1.0));

        let mut sq = square(0.0, 0.0, 2.0);
        sq.rotate(FRAC_PI_2, &Point2::new(1.0, 1.0));
        assert_relative_eq!(sq.vertices()[0], Point2::new(2.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(sq.vertices()[1], Point2::new(2.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn segment_intersection() {
        let sq = square(0.0, 0.0, 2.0);
        let crossing = LineSegment::new(Point2::new(-1.0, 1.0), Point2::new(3.0, 1.0));
        let inside = LineSegment::new(Point2::new(0.5, 0.5), Point2::new(1.5, 1.5));
        let outside = LineSegment::new(Point2::new(3.0, 0.0), Point2::new(3.0, 2.0));
        assert!(sq.intersects_segment(&crossing));
        assert!(sq.intersects_segment(&inside));
        assert!(!sq.intersects_segment(&outside));
    }

    #[test]
    fn polygon_intersection_gjk_and_naive() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(2.0, 2.0, 1.0);
        let c = square(0.5, 0.5, 1.0);
        assert!(!a.intersects(&b).unwrap());
        assert!(!a.naive_intersects(&b));
        assert!(a.intersects(&c).unwrap());
        assert!(a.naive_intersects(&c));
    }

    #[test]
    fn naive_intersects_handles_containment() {
        let outer = square(0.0, 0.0, 10.0);
        let inner = square(4.0, 4.0, 1.0);
        assert!(outer.naive_intersects(&inner));
        assert!(inner.naive_intersects(&outer));
        assert!(outer.intersects(&inner).unwrap());
        assert!(inner.intersects(&outer).unwrap());
    }

    #[test]
    fn distance_to_point_inside_is_zero() {
        let tri = triangle();
        assert_eq!(tri.distance_to_point(&Point2::new(5.0, 5.0)), 0.0);
        assert_relative_eq!(tri.distance_to_point(&Point2::new(5.0, -2.0)), 2.0);
    }

    #[test]
    fn distance_to_segment_uses_edges() {
        let sq = square(0.0, 0.0, 1.0);
        let seg = LineSegment::new(Point2::new(3.0, 0.0), Point2::new(3.0, 1.0));
        assert_relative_eq!(sq.distance_to_segment(&seg), 2.0);
        let crossing = LineSegment::new(Point2::new(-1.0, 0.5), Point2::new(2.0, 0.5));
        assert_eq!(sq.distance_to_segment(&crossing), 0.0);
        // A segment strictly inside only measures the gap to the boundary.
        let inner = LineSegment::new(Point2::new(0.4, 0.5), Point2::new(0.6, 0.5));
        assert_relative_eq!(sq.distance_to_segment(&inner), 0.4, epsilon = 1e-12);
    }

    #[test]
    fn distance_between_polygons() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(2.0, 2.0, 1.0);
        assert_relative_eq!(a.distance_to(&b).unwrap(), 2.0_f64.sqrt(), epsilon = 1e-9);
        assert_relative_eq!(a.naive_distance_to(&b), 2.0_f64.sqrt(), epsilon = 1e-9);

        let c = square(0.5, 0.5, 1.0);
        assert_abs_diff_eq!(a.distance_to(&c).unwrap(), 0.0);
        assert_abs_diff_eq!(a.naive_distance_to(&c), 0.0);
    }

    #[test]
    fn corner_contact_is_disjoint_at_zero_distance() {
        // The support step through the shared corner lands exactly on the
        // origin, so the intersection test stops with `false`.
        let a = square(0.0, 0.0, 1.0);
        let b = square(1.0, 1.0, 1.0);
        assert!(!a.intersects(&b).unwrap());
        assert!(!b.intersects(&a).unwrap());
        assert_abs_diff_eq!(a.distance_to(&b).unwrap(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.distance_to(&a).unwrap(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn closest_point_on_boundary() {
        let sq = square(0.0, 0.0, 2.0);
        assert_eq!(sq.closest_point_to(&Point2::new(1.0, -3.0)), Point2::new(1.0, 0.0));
        assert_eq!(sq.closest_point_to(&Point2::new(5.0, 5.0)), Point2::new(2.0, 2.0));
        // Inside: projects onto the nearest edge.
        assert_eq!(sq.closest_point_to(&Point2::new(0.5, 1.0)), Point2::new(0.0, 1.0));
    }

    #[test]
    fn closest_point_tie_takes_first_edge() {
        // The center is equidistant from all four edges.
        let sq = square(0.0, 0.0, 2.0);
        assert_eq!(sq.closest_point_to(&Point2::new(1.0, 1.0)), Point2::new(1.0, 0.0));
    }

    #[test]
    fn penetration_is_unsigned_edge_distance() {
        let sq = square(0.0, 0.0, 4.0);
        assert_relative_eq!(sq.penetration(&Point2::new(1.0, 2.0)), 1.0);
        assert_relative_eq!(sq.penetration(&Point2::new(-1.0, 2.0)), 1.0);
        assert_relative_eq!(sq.penetration(&Point2::new(2.0, 2.0)), 2.0);
    }

    #[test]
    fn single_vertex_polygon() {
        let p = poly(&[(1.0, 1.0)]);
        assert_eq!(p.vertex_count(), 1);
        assert!(!p.contains(&Point2::new(1.0, 1.0)));
        assert_relative_eq!(p.distance_to_point(&Point2::new(4.0, 5.0)), 5.0);
        let sq = square(3.0, 0.0, 1.0);
        assert!(!p.intersects(&sq).unwrap());
        assert_relative_eq!(p.distance_to(&sq).unwrap(), 2.0, epsilon = 1e-6);
    }
}
