mod area;
mod closest_point;
mod intersect;
mod visibility;

pub use area::{Area, NodeArea, SegmentArea, StripArea};
pub use closest_point::{ClosestPointOnSpline, ClosestPointResult};
pub use intersect::{SplineHit, SplineIntersect};
pub use visibility::{is_on_line, IsInternal, VisibleSegment};
