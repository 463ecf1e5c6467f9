use super::{Matrix3, Point2};

/// Transforms a point by a 3x3 matrix in homogeneous coordinates `[x, y, 1]`.
///
/// The matrix is assumed affine; the homogeneous component is dropped.
#[must_use]
pub fn transform_point(matrix: &Matrix3, point: &Point2) -> Point2 {
    let v = matrix * nalgebra::Vector3::new(point.x, point.y, 1.0);
    Point2::new(v.x, v.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Vector2, TOLERANCE};

    #[test]
    fn identity_preserves_point() {
        let q = transform_point(&Matrix3::identity(), &Point2::new(3.0, -2.0));
        assert!((q.x - 3.0).abs() < TOLERANCE);
        assert!((q.y + 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn translation_applies_to_points() {
        let m = Matrix3::new_translation(&Vector2::new(5.0, 1.0));
        let q = transform_point(&m, &Point2::new(1.0, 1.0));
        assert!((q.x - 6.0).abs() < TOLERANCE);
        assert!((q.y - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn scale_then_translate() {
        let m = Matrix3::new_translation(&Vector2::new(1.0, 0.0))
            * Matrix3::new_nonuniform_scaling(&Vector2::new(2.0, 3.0));
        let q = transform_point(&m, &Point2::new(1.0, 1.0));
        assert!((q.x - 3.0).abs() < TOLERANCE);
        assert!((q.y - 3.0).abs() < TOLERANCE);
    }
}
