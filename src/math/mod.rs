pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;
pub mod transform_2d;
pub mod tridiagonal;

/// 2D point type. Coordinate meaning depends on the [`DomainType`](crate::DomainType).
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3x3 homogeneous transformation matrix acting on `[x, y, 1]`.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Single-precision epsilon used by the on-line and visibility predicates.
pub const FLT_EPS: f64 = 1e-6;
