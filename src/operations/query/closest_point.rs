use crate::geometry::Spline;
use crate::math::Point2;

/// Result of a closest point query.
#[derive(Debug, Clone, Copy)]
pub struct ClosestPointResult {
    /// The closest point on the spline.
    pub point: Point2,
    /// The parametric position of the closest point.
    pub parameter: f64,
    /// The distance from the query point to the closest point.
    pub distance: f64,
}

/// Finds the closest point on a spline to a given point.
pub struct ClosestPointOnSpline {
    point: Point2,
}

impl ClosestPointOnSpline {
    /// Creates a new `ClosestPointOnSpline` query.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self { point }
    }

    /// Executes the query.
    ///
    /// Each segment is projected on individually; ties keep the earlier
    /// segment.
    #[must_use]
    pub fn execute(&self, spline: &Spline) -> ClosestPointResult {
        let mut best = ClosestPointResult {
            point: spline.first_point(),
            parameter: 0.0,
            distance: f64::INFINITY,
        };
        for segment in spline.segments() {
            let local = segment.closest_pos(&self.point);
            let closest = segment.pos(local);
            let distance = (self.point - closest).norm();
            if distance < best.distance {
                #[allow(clippy::cast_precision_loss)]
                let parameter = segment.index() as f64 + local;
                best = ClosestPointResult {
                    point: closest,
                    parameter,
                    distance,
                };
            }
        }
        best
    }
}
