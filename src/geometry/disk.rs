use std::fmt;
use std::str::FromStr;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, Vector2Ext};

use super::LineSegment;

/// Distance metric used by a [`Disk`].
///
/// Each variant measures the distance between two points with its own norm;
/// all disk predicates share that single distance function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Manhattan distance. Disks are diamonds.
    L1,
    /// Euclidean distance. Disks are circles.
    L2,
    /// Chebyshev distance. Disks are axis-aligned squares.
    LInfinity,
}

impl Metric {
    /// Length of `v` under this metric.
    #[must_use]
    pub fn norm(self, v: &Vector2) -> f64 {
        match self {
            Self::L1 => v.l1_norm(),
            Self::L2 => v.norm(),
            Self::LInfinity => v.linf_norm(),
        }
    }

    /// Distance between `a` and `b` under this metric.
    #[must_use]
    pub fn distance(self, a: &Point2, b: &Point2) -> f64 {
        self.norm(&(a - b))
    }
}

impl FromStr for Metric {
    type Err = GeometryError;

    fn from_str(tag: &str) -> std::result::Result<Self, Self::Err> {
        match tag.to_ascii_lowercase().as_str() {
            "l1" => Ok(Self::L1),
            "l2" => Ok(Self::L2),
            "linf" | "linfty" | "li" => Ok(Self::LInfinity),
            _ => Err(GeometryError::InvalidMetric(tag.to_owned())),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::L1 => "l1",
            Self::L2 => "l2",
            Self::LInfinity => "linf",
        };
        f.write_str(tag)
    }
}

/// A disk (ball) in the plane under an L1, L2 or L-infinity metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    center: Point2,
    radius: f64,
    metric: Metric,
}

impl Disk {
    /// Creates a new disk.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` if the radius is negative or
    /// not finite.
    pub fn new(center: Point2, radius: f64, metric: Metric) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeometryError::InvalidArgument(format!(
                "disk radius must be a finite non-negative number, got {radius}"
            ))
            .into());
        }
        Ok(Self {
            center,
            radius,
            metric,
        })
    }

    /// Returns the center of the disk.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the disk.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the metric the disk is measured in.
    #[must_use]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Returns `true` if `point` lies strictly inside the disk.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        self.metric.distance(&self.center, point) < self.radius
    }

    /// Returns `true` if `point` is within `tolerance` of the boundary, on
    /// either side: `|distance - radius| < tolerance`.
    #[must_use]
    pub fn on_boundary(&self, point: &Point2, tolerance: f64) -> bool {
        (self.metric.distance(&self.center, point) - self.radius).abs() < tolerance
    }

    /// Metric distance from `point` to the boundary; negative inside.
    #[must_use]
    pub fn dist_to_point(&self, point: &Point2) -> f64 {
        self.metric.distance(&self.center, point) - self.radius
    }

    /// Returns `true` if the two disks overlap.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` if the disks use different
    /// metrics.
    pub fn intersects_disk(&self, other: &Disk) -> Result<bool> {
        let dist = self.center_distance(other)?;
        Ok(dist < self.radius + other.radius)
    }

    /// Returns `true` if the segment passes strictly inside the disk.
    ///
    /// The segment distance is Euclidean whatever the disk metric.
    #[must_use]
    pub fn intersects_segment(&self, segment: &LineSegment) -> bool {
        segment.dist_to_point(&self.center) < self.radius
    }

    /// Returns `true` if the gap between the two disks is at most `tolerance`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidArgument` if the disks use different
    /// metrics.
    pub fn neighbor(&self, other: &Disk, tolerance: f64) -> Result<bool> {
        let dist = self.center_distance(other)?;
        Ok(dist - self.radius - other.radius <= tolerance)
    }

    fn center_distance(&self, other: &Disk) -> Result<f64> {
        if self.metric != other.metric {
            return Err(GeometryError::InvalidArgument(format!(
                "cannot compare a {} disk with a {} disk",
                self.metric, other.metric
            ))
            .into());
        }
        Ok(self.metric.distance(&self.center, &other.center))
    }
}
