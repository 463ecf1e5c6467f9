use crate::math::Point2;

use super::Segment;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb {
    /// Computes the box over a chain of segments.
    ///
    /// The box is seeded from the first segment's start point and then grown
    /// by each segment's end point only. Cubic control points are ignored.
    /// Returns `None` for an empty chain.
    #[must_use]
    pub fn from_segments(segments: &[Segment]) -> Option<Self> {
        let seed = segments.first()?.first_point();
        let mut aabb = Self {
            min: seed,
            max: seed,
        };
        for segment in segments {
            aabb.grow(&segment.last_point());
        }
        Some(aabb)
    }

    fn grow(&mut self, x: &Point2) {
        self.min.x = self.min.x.min(x.x);
        self.min.y = self.min.y.min(x.y);
        self.max.x = self.max.x.max(x.x);
        self.max.y = self.max.y.max(x.y);
    }

    /// Returns `true` if `point` lies inside or on the box.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn empty_chain_has_no_box() {
        assert!(Aabb::from_segments(&[]).is_none());
    }

    #[test]
    fn box_over_polyline() {
        let segs = vec![
            Segment::linear(p(0.0, 0.0), p(2.0, -1.0)),
            Segment::linear(p(2.0, -1.0), p(1.0, 3.0)),
        ];
        let aabb = Aabb::from_segments(&segs).unwrap();
        assert_eq!(aabb.min, p(0.0, -1.0));
        assert_eq!(aabb.max, p(2.0, 3.0));
        assert!(aabb.contains(&p(1.0, 1.0)));
        assert!(!aabb.contains(&p(3.0, 1.0)));
    }

    #[test]
    fn only_end_points_grow_the_box() {
        // Second segment starts away from the first's end; its start is not seen.
        let segs = vec![
            Segment::linear(p(0.0, 0.0), p(1.0, 0.0)),
            Segment::linear(p(5.0, 5.0), p(1.0, 1.0)),
        ];
        let aabb = Aabb::from_segments(&segs).unwrap();
        assert_eq!(aabb.max, p(1.0, 1.0));
    }
}
