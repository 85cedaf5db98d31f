mod disk;
mod polygon;
mod segment;

pub use disk::{Disk, Metric};
pub use polygon::ConvexPolygon;
pub use segment::LineSegment;
