use super::Vector2;

/// Returns the right-pointing normal of a direction vector (rotated -90°).
///
/// For a counter-clockwise loop this points out of the enclosed region.
#[must_use]
pub fn right_normal(dir: &Vector2) -> Vector2 {
    Vector2::new(dir.y, -dir.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn right_normal_of_x_axis() {
        let n = right_normal(&Vector2::new(1.0, 0.0));
        assert!(n.x.abs() < TOLERANCE);
        assert!((n.y + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn right_normal_keeps_length() {
        let d = Vector2::new(3.0, 4.0);
        let n = right_normal(&d);
        assert!((n.norm() - 5.0).abs() < TOLERANCE);
        assert!(n.dot(&d).abs() < TOLERANCE);
    }
}
