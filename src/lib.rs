pub mod boundary;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod path;

pub use boundary::{BoundaryId, BoundaryKind, BoundaryStore};
pub use domain::DomainType;
pub use error::{BoundlineError, Result};
pub use geometry::{Aabb, Segment, SegmentKind, Spline};
pub use path::BuildPath;
