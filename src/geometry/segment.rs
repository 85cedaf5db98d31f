use crate::math::{Point2, Vector2, Vector2Ext, PARALLEL_TOLERANCE};

/// A directed line segment from `start` to `end`.
///
/// A segment with `start == end` is degenerate; projections onto it
/// collapse to `start` instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// First endpoint.
    pub start: Point2,
    /// Second endpoint.
    pub end: Point2,
}

impl LineSegment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Vector from `start` to `end`.
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        self.end - self.start
    }

    /// Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    /// The same segment traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Projects `pt` onto the infinite line through the segment and returns
    /// `t` such that the projection is `start + vector() * t`.
    ///
    /// `t` lies in `[0, 1]` exactly when the projection falls on the segment.
    /// Returns 0 for a zero-length segment.
    #[must_use]
    pub fn project_t(&self, pt: &Point2) -> f64 {
        let v = self.vector();
        let len_sq = v.norm_squared();
        if len_sq == 0.0 {
            return 0.0;
        }
        (pt - self.start).dot(&v) / len_sq
    }

    /// Projection of `pt` onto the infinite line through the segment.
    #[must_use]
    pub fn project(&self, pt: &Point2) -> Point2 {
        self.start + self.vector() * self.project_t(pt)
    }

    /// Closest point to `pt` on the segment itself.
    #[must_use]
    pub fn project_in(&self, pt: &Point2) -> Point2 {
        self.start + self.vector() * self.project_t(pt).clamp(0.0, 1.0)
    }

    /// Returns `true` if the two segments cross.
    ///
    /// Collinear overlapping segments are reported as not intersecting: the
    /// orientation test is strict, so collinear triples count as clockwise
    /// on both sides.
    #[must_use]
    pub fn intersects(&self, other: &LineSegment) -> bool {
        let (a, b) = (self.start, self.end);
        let (c, d) = (other.start, other.end);
        ccw(&a, &c, &d) != ccw(&b, &c, &d) && ccw(&a, &b, &c) != ccw(&a, &b, &d)
    }

    /// Intersection point of the two segments, if they meet within both.
    ///
    /// Returns `None` for (near-)parallel segments or when the crossing of the
    /// supporting lines lies outside either segment.
    #[must_use]
    pub fn intersection_point(&self, other: &LineSegment) -> Option<Point2> {
        let d1 = self.vector();
        let d2 = other.vector();
        let delta = d2.cross_2d(&d1);
        if delta.abs() < PARALLEL_TOLERANCE {
            return None;
        }

        let w = other.start - self.start;
        // Cramer's rule on start1 + d1 * t == start2 + d2 * s.
        let s = d1.cross_2d(&w) / delta;
        let t = d2.cross_2d(&w) / delta;
        if !((0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&t)) {
            return None;
        }
        Some(self.start + d1 * t)
    }

    /// Euclidean distance from `pt` to the segment.
    #[must_use]
    pub fn dist_to_point(&self, pt: &Point2) -> f64 {
        (pt - self.project_in(pt)).norm()
    }

    /// Shortest distance between two segments; 0 when they cross.
    #[must_use]
    pub fn dist_to_segment(&self, other: &LineSegment) -> f64 {
        if self.intersects(other) {
            return 0.0;
        }

        let d1 = (self.project_in(&other.start) - other.start).norm();
        let d2 = (self.project_in(&other.end) - other.end).norm();
        let d3 = (other.project_in(&self.start) - self.start).norm();
        let d4 = (other.project_in(&self.end) - self.end).norm();
        d1.min(d2).min(d3.min(d4))
    }
}

/// Whether `a`, `b`, `c` are listed in strictly counter-clockwise order.
fn ccw(a: &Point2, b: &Point2, c: &Point2) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}
