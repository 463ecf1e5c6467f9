use crate::error::{GeometryError, Result};
use crate::geometry::Spline;

/// Result of a spline-spline intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineHit {
    /// Parametric position on the first (source) spline.
    pub t: f64,
    /// Parametric position on the other spline.
    pub other_t: f64,
}

/// Finds the first crossing between two splines.
///
/// Segments of the source spline in `[start, end)` are scanned in order,
/// each against every segment of the other spline; the first hit found is
/// returned, which is not necessarily the closest one.
pub struct SplineIntersect {
    range: Option<(usize, usize)>,
}

impl SplineIntersect {
    /// Creates a new `SplineIntersect` query over the whole source spline.
    #[must_use]
    pub fn new() -> Self {
        Self { range: None }
    }

    /// Restricts the scan to source segments `start..end`.
    #[must_use]
    pub fn with_range(mut self, start: usize, end: usize) -> Self {
        self.range = Some((start, end));
        self
    }

    /// Executes the query, returning `None` if the splines do not cross.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if the range is inverted
    /// or extends past the source spline.
    pub fn execute(&self, source: &Spline, other: &Spline) -> Result<Option<SplineHit>> {
        let ns = source.num_segments();
        let (start, end) = self.range.unwrap_or((0, ns));
        if end > ns || start > end {
            #[allow(clippy::cast_precision_loss)]
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "end",
                value: end as f64,
                min: start as f64,
                max: ns as f64,
            }
            .into());
        }

        for seg1 in &source.segments()[start..end] {
            for seg2 in other.segments() {
                if let Some((t1, t2)) = seg1.intersect(seg2) {
                    #[allow(clippy::cast_precision_loss)]
                    return Ok(Some(SplineHit {
                        t: seg1.index() as f64 + t1,
                        other_t: seg2.index() as f64 + t2,
                    }));
                }
            }
        }
        Ok(None)
    }

    /// Shorthand for the full-range source parameter of the first hit.
    #[must_use]
    pub fn first_t(source: &Spline, other: &Spline) -> Option<f64> {
        Self::new()
            .execute(source, other)
            .ok()
            .flatten()
            .map(|hit| hit.t)
    }
}

impl Default for SplineIntersect {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::boundary::BoundaryStore;
    use crate::path::BuildPath;

    const TOL: f64 = 1e-9;

    fn build(path: &str) -> Spline {
        BuildPath::new(path).execute(&BoundaryStore::new()).unwrap()
    }

    #[test]
    fn crossing_reports_curve_level_parameters() {
        let a = build("M 0 0 L 1 0 L 2 0 L 3 0");
        let b = build("M 2.5 -1 L 2.5 1");
        let hit = SplineIntersect::new().execute(&a, &b).unwrap().unwrap();
        assert!((hit.t - 2.5).abs() < TOL);
        assert!((hit.other_t - 0.5).abs() < TOL);
    }

    #[test]
    fn disjoint_splines_have_no_hit() {
        let a = build("M 0 0 L 1 0 L 1 1");
        let b = build("M 5 5 L 6 6");
        assert!(SplineIntersect::new().execute(&a, &b).unwrap().is_none());
        assert!(SplineIntersect::first_t(&a, &b).is_none());
    }

    #[test]
    fn first_hit_in_scan_order_wins() {
        // The vertical line crosses both the first and the last segment.
        let a = build("M 0 0 L 2 0 L 2 2 L 0 2");
        let b = build("M 1 -1 L 1 3");
        let hit = SplineIntersect::new().execute(&a, &b).unwrap().unwrap();
        assert!((hit.t - 0.5).abs() < TOL);

        let later = SplineIntersect::new()
            .with_range(1, 3)
            .execute(&a, &b)
            .unwrap()
            .unwrap();
        assert!((later.t - 2.5).abs() < TOL);
    }

    #[test]
    fn range_past_end_is_rejected() {
        let a = build("M 0 0 L 1 0");
        let b = build("M 0 1 L 1 1");
        assert!(SplineIntersect::new().with_range(0, 5).execute(&a, &b).is_err());
        assert!(SplineIntersect::new().with_range(1, 0).execute(&a, &b).is_err());
    }

    #[test]
    fn smooth_curve_against_line() {
        let arc = build("M 0 0 S 1 1 2 0");
        let line = build("M 0 0.5 L 2 0.5");
        let hit = SplineIntersect::new().execute(&arc, &line).unwrap().unwrap();
        let p = arc.pos(hit.t);
        assert!((p.y - 0.5).abs() < 1e-6);
        assert!(hit.t < 1.0);
    }
}
