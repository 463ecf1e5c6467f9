use super::{Point2, TOLERANCE};

/// Returns the parameter `t` in `[0, 1]` of the point on segment `a → b`
/// closest to `p`.
///
/// Zero-length segments return `0`.
#[must_use]
pub fn project_onto_segment(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return 0.0;
    }
    // Project point onto the infinite line, clamp to [0, 1].
    ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn projection_of_interior_point() {
        let t = project_onto_segment(&p(1.0, 1.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert!((t - 0.5).abs() < TOL);
    }

    #[test]
    fn zero_length_segment_projects_to_start() {
        let t = project_onto_segment(&p(3.0, 4.0), &p(1.0, 1.0), &p(1.0, 1.0));
        assert!(t.abs() < TOL);
    }

    #[test]
    fn projection_clamps_past_end() {
        let t = project_onto_segment(&p(5.0, 1.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert!((t - 1.0).abs() < TOL);
        let t = project_onto_segment(&p(0.5, -3.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert!((t - 0.25).abs() < TOL);
    }
}
