use crate::boundary::{BoundaryStore, WallQuery};
use crate::geometry::{Segment, Spline};
use crate::math::{Point2, FLT_EPS, TOLERANCE};

/// Returns `true` if `point` lies on the chord between the segment's end
/// points.
///
/// The chord parameter is taken from the x coordinate, or from y for a
/// vertical chord, and must fall in `[0, 1]` up to `FLT_EPS`. The squared
/// miss distance, relative to the squared segment length, must not exceed
/// `FLT_EPS`. Zero-length segments contain no points.
#[must_use]
pub fn is_on_line(point: &Point2, segment: &Segment) -> bool {
    let x1 = segment.first_point();
    let x2 = segment.last_point();
    let l = segment.length();
    if l < TOLERANCE {
        return false;
    }

    let d = x2 - x1;
    let t = if d.x.abs() > 0.0 {
        (point.x - x1.x) / d.x
    } else {
        (point.y - x1.y) / d.y
    };
    if !(-FLT_EPS..=1.0 + FLT_EPS).contains(&t) {
        return false;
    }

    let on_chord = x1 + d * t;
    (on_chord - point).norm_squared() / (l * l) <= FLT_EPS
}

/// Finds the first wall segment that can "see" a point.
///
/// Linear segments are tried before cubic ones. A segment is visible if the
/// point lies on it, or if the straight probe from the point to the nearest
/// point on the segment crosses no other wall segment.
pub struct VisibleSegment {
    point: Point2,
}

impl VisibleSegment {
    /// Creates a new `VisibleSegment` query.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self { point }
    }

    /// Executes the query over `segments`, using `walls` to filter them.
    #[must_use]
    pub fn execute<'a, W: WallQuery + ?Sized>(
        &self,
        segments: &[&'a Segment],
        walls: &W,
    ) -> Option<&'a Segment> {
        for smooth in [false, true] {
            for (i, &segment) in segments.iter().enumerate() {
                if segment.is_smooth() != smooth || !walls.is_wall(segment) {
                    continue;
                }
                if is_on_line(&self.point, segment) {
                    return Some(segment);
                }

                let target = segment.pos(segment.closest_pos(&self.point));
                let probe = Segment::linear(self.point, target);
                let blocked = segments.iter().enumerate().any(|(j, &other)| {
                    j != i && walls.is_wall(other) && other.intersect(&probe).is_some()
                });
                if !blocked {
                    return Some(segment);
                }
            }
        }
        None
    }
}

/// Classifies a point as inside or outside the region bounded by walls.
///
/// The region lies on the back side of the wall normals: a closed loop
/// traversed counter-clockwise encloses its interior. Points on a wall are
/// internal. A point that sees no wall is external.
pub struct IsInternal {
    point: Point2,
}

impl IsInternal {
    /// Creates a new `IsInternal` query.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self { point }
    }

    /// Classifies against the segments of a single spline.
    #[must_use]
    pub fn execute<W: WallQuery + ?Sized>(&self, spline: &Spline, walls: &W) -> bool {
        let segments: Vec<&Segment> = spline.segments().iter().collect();
        self.classify(&segments, walls)
    }

    /// Classifies against every boundary registered in `store`.
    #[must_use]
    pub fn execute_region(&self, store: &BoundaryStore) -> bool {
        self.classify(&store.all_segments(), store)
    }

    fn classify<W: WallQuery + ?Sized>(&self, segments: &[&Segment], walls: &W) -> bool {
        let Some(segment) = VisibleSegment::new(self.point).execute(segments, walls) else {
            return false;
        };
        if is_on_line(&self.point, segment) {
            return true;
        }

        let t = segment.closest_pos(&self.point);
        let r = self.point - segment.pos(t);
        if r.norm() < TOLERANCE {
            return true;
        }
        r.dot(&segment.normal(t)) <= 0.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::boundary::{AllWalls, BoundaryKind};
    use crate::path::BuildPath;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn build(path: &str) -> Spline {
        BuildPath::new(path).execute(&BoundaryStore::new()).unwrap()
    }

    fn square() -> Spline {
        build("M 0 0 L 1 0 L 1 1 L 0 1 L 0 0")
    }

    #[test]
    fn on_line_checks() {
        let seg = Segment::linear(p(0.0, 0.0), p(2.0, 0.0));
        assert!(is_on_line(&p(1.0, 0.0), &seg));
        assert!(is_on_line(&p(0.0, 0.0), &seg));
        assert!(!is_on_line(&p(3.0, 0.0), &seg));
        assert!(!is_on_line(&p(1.0, 0.1), &seg));

        let vertical = Segment::linear(p(1.0, 0.0), p(1.0, 1.0));
        assert!(is_on_line(&p(1.0, 0.5), &vertical));
        assert!(!is_on_line(&p(1.0, 1.5), &vertical));

        let dot = Segment::linear(p(1.0, 1.0), p(1.0, 1.0));
        assert!(!is_on_line(&p(1.0, 1.0), &dot));
    }

    #[test]
    fn centroid_of_square_is_internal() {
        let s = square();
        assert!(IsInternal::new(p(0.5, 0.5)).execute(&s, &AllWalls));
        assert!(IsInternal::new(p(0.9, 0.2)).execute(&s, &AllWalls));
    }

    #[test]
    fn far_point_is_external() {
        let s = square();
        assert!(!IsInternal::new(p(5.0, 5.0)).execute(&s, &AllWalls));
        assert!(!IsInternal::new(p(0.5, -3.0)).execute(&s, &AllWalls));
        assert!(!IsInternal::new(p(-2.0, 0.5)).execute(&s, &AllWalls));
    }

    #[test]
    fn point_on_wall_is_internal() {
        let s = square();
        assert!(IsInternal::new(p(1.0, 0.5)).execute(&s, &AllWalls));
    }

    #[test]
    fn flipped_loop_inverts_classification() {
        let s = square().reversed();
        assert!(!IsInternal::new(p(0.5, 0.5)).execute(&s, &AllWalls));
    }

    #[test]
    fn linear_walls_are_preferred() {
        // A curved wall comes first in the list but the line is tried first.
        let arc = Segment::cubic(p(0.0, 2.0), p(0.5, 3.0), p(1.5, 3.0), p(2.0, 2.0));
        let line = Segment::linear(p(0.0, 0.0), p(2.0, 0.0));
        let segs = [&arc, &line];
        let seen = VisibleSegment::new(p(1.0, 1.0)).execute(&segs, &AllWalls).unwrap();
        assert!(!seen.is_smooth());
    }

    #[test]
    fn occluded_wall_is_skipped() {
        // The far wall at y = 2 is hidden behind the near wall at y = 1.
        let far = Segment::linear(p(0.0, 2.0), p(2.0, 2.0));
        let near = Segment::linear(p(0.5, 1.0), p(1.5, 1.0));
        let segs = [&far, &near];
        let seen = VisibleSegment::new(p(1.0, 0.0)).execute(&segs, &AllWalls).unwrap();
        assert!((seen.first_point() - p(0.5, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn non_walls_are_ignored() {
        let mut store = BoundaryStore::new();
        store
            .add_boundary("open", BoundaryKind::Neumann, square())
            .unwrap();
        assert!(!IsInternal::new(p(0.5, 0.5)).execute_region(&store));
    }

    #[test]
    fn region_made_of_several_boundaries() {
        let mut store = BoundaryStore::new();
        store
            .add_boundary("bottom", BoundaryKind::Dirichlet, build("M 0 0 L 2 0 L 2 2"))
            .unwrap();
        store
            .add_boundary("top", BoundaryKind::Dirichlet, build("M 2 2 L 0 2 L 0 0"))
            .unwrap();
        assert!(IsInternal::new(p(1.0, 1.0)).execute_region(&store));
        assert!(IsInternal::new(p(0.1, 1.9)).execute_region(&store));
        assert!(!IsInternal::new(p(3.0, 1.0)).execute_region(&store));
    }
}
