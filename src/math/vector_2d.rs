use super::Vector2;

/// Planar operations missing from `nalgebra::Vector2`.
///
/// Addition, subtraction, negation, scaling, `dot`, `norm`, `norm_squared`
/// and `normalize` come from nalgebra directly. Note that `normalize` on
/// the zero vector produces NaN components; use `try_normalize` when the
/// input may vanish.
pub trait Vector2Ext {
    /// Scalar 2D cross product (determinant) `x1 * y2 - y1 * x2`.
    fn cross_2d(&self, other: &Vector2) -> f64;

    /// Manhattan norm `|x| + |y|`.
    fn l1_norm(&self) -> f64;

    /// Chebyshev norm `max(|x|, |y|)`.
    fn linf_norm(&self) -> f64;

    /// The vector rotated by +90 degrees, `(-y, x)`.
    fn perpendicular(&self) -> Vector2;
}

impl Vector2Ext for Vector2 {
    fn cross_2d(&self, other: &Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    fn l1_norm(&self) -> f64 {
        self.x.abs() + self.y.abs()
    }

    fn linf_norm(&self) -> f64 {
        self.x.abs().max(self.y.abs())
    }

    fn perpendicular(&self) -> Vector2 {
        Vector2::new(-self.y, self.x)
    }
}
