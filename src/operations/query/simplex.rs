use crate::math::Vector2;

/// Up to three Minkowski-difference points bracketing the origin.
///
/// Index 0 is the oldest point, the last live index the newest.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Simplex {
    points: [Vector2; 3],
    len: usize,
}

impl Simplex {
    /// Creates a simplex holding a single seed point.
    pub(crate) fn new(seed: Vector2) -> Self {
        Self {
            points: [seed, Vector2::zeros(), Vector2::zeros()],
            len: 1,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Appends a point. The caller never pushes onto a full triangle.
    pub(crate) fn push(&mut self, point: Vector2) {
        debug_assert!(self.len < 3, "simplex already holds a triangle");
        self.points[self.len] = point;
        self.len += 1;
    }

    /// Most recently added point.
    pub(crate) fn newest(&self) -> Vector2 {
        self.points[self.len - 1]
    }

    pub(crate) fn get(&self, index: usize) -> Vector2 {
        debug_assert!(index < self.len);
        self.points[index]
    }

    /// Drops the point at `index` from a triangle, keeping the order of the
    /// remaining two.
    pub(crate) fn remove(&mut self, index: usize) {
        debug_assert!(index < self.len);
        for i in index..self.len - 1 {
            self.points[i] = self.points[i + 1];
        }
        self.len -= 1;
    }
}
