mod aabb;
mod segment;
mod spline;

pub use aabb::Aabb;
pub use segment::{Segment, SegmentKind};
pub use spline::Spline;
