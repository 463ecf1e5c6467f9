use std::f64::consts::PI;

use crate::domain::DomainType;
use crate::error::{GeometryError, Result};
use crate::geometry::Spline;

/// Computes the area attributed to breakpoint `i` of a spline.
///
/// In planar domains this is half the length of each adjoining segment. In
/// axisymmetric domains the same half-lengths are revolved about the axis
/// (Pappus): `2π R̄ (L1 + L2)`, where `R̄` is the mean of the adjoining
/// segment centroid radii, or the endpoint radius at the ends of the spline.
pub struct NodeArea {
    node: usize,
    domain: DomainType,
}

impl NodeArea {
    /// Creates a new `NodeArea` query.
    #[must_use]
    pub fn new(node: usize, domain: DomainType) -> Self {
        Self { node, domain }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if the node index exceeds
    /// `num_segments()`.
    pub fn execute(&self, spline: &Spline) -> Result<f64> {
        let i = self.node;
        let ns = spline.num_segments();
        if i > ns {
            #[allow(clippy::cast_precision_loss)]
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "node",
                value: i as f64,
                min: 0.0,
                max: ns as f64,
            }
            .into());
        }

        let segs = spline.segments();
        let left = i.checked_sub(1).map(|k| &segs[k]);
        let right = segs.get(i);

        let l1 = left.map_or(0.0, |s| 0.5 * s.length());
        let l2 = right.map_or(0.0, |s| 0.5 * s.length());

        let Some(j) = self.domain.radius_axis() else {
            return Ok(l1 + l2);
        };

        // At least one neighbour exists because splines are never empty.
        let r1 = match (left, right) {
            (Some(s), _) => s.centroid()[j],
            (None, Some(s)) => s.first_point()[j],
            (None, None) => 0.0,
        };
        let r2 = match (right, left) {
            (Some(s), _) => s.centroid()[j],
            (None, Some(s)) => s.last_point()[j],
            (None, None) => 0.0,
        };
        let r0 = 0.5 * (r1 + r2);

        Ok(2.0 * PI * r0 * (l1 + l2))
    }
}

/// Computes the area attributed to segment `i`: the sum of the node areas
/// of its two bounding breakpoints.
pub struct SegmentArea {
    segment: usize,
    domain: DomainType,
}

impl SegmentArea {
    /// Creates a new `SegmentArea` query.
    #[must_use]
    pub fn new(segment: usize, domain: DomainType) -> Self {
        Self { segment, domain }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if `segment` is not a
    /// segment index of the spline.
    pub fn execute(&self, spline: &Spline) -> Result<f64> {
        if self.segment >= spline.num_segments() {
            #[allow(clippy::cast_precision_loss)]
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "segment",
                value: self.segment as f64,
                min: 0.0,
                max: spline.num_segments().saturating_sub(1) as f64,
            }
            .into());
        }
        let a = NodeArea::new(self.segment, self.domain).execute(spline)?;
        let b = NodeArea::new(self.segment + 1, self.domain).execute(spline)?;
        Ok(a + b)
    }
}

/// Computes the area of the straight strip between two parametric
/// positions, ignoring any curvature in between.
///
/// Planar domains return the chord length `l`; axisymmetric domains return
/// `2π l r̄` with `r̄` the mean radius of the two end points.
pub struct StripArea {
    t1: f64,
    t2: f64,
    domain: DomainType,
}

impl StripArea {
    /// Creates a new `StripArea` query.
    #[must_use]
    pub fn new(t1: f64, t2: f64, domain: DomainType) -> Self {
        Self { t1, t2, domain }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self, spline: &Spline) -> f64 {
        let pos1 = spline.pos(self.t1);
        let pos2 = spline.pos(self.t2);
        let l = (pos2 - pos1).norm();
        match self.domain.radius_axis() {
            None => l,
            Some(j) => 2.0 * PI * l * 0.5 * (pos1[j] + pos2[j]),
        }
    }
}

/// Computes the total "surface" area of a spline as the sum of all node areas.
pub struct Area {
    domain: DomainType,
}

impl Area {
    /// Creates a new `Area` query.
    #[must_use]
    pub fn new(domain: DomainType) -> Self {
        Self { domain }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Propagates [`NodeArea`] errors, which cannot occur for the in-range
    /// node indices used here.
    pub fn execute(&self, spline: &Spline) -> Result<f64> {
        (0..spline.num_points())
            .map(|i| NodeArea::new(i, self.domain).execute(spline))
            .sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::boundary::BoundaryStore;
    use crate::math::Point2;
    use crate::path::BuildPath;

    const TOL: f64 = 1e-10;

    fn build(path: &str) -> Spline {
        BuildPath::new(path).execute(&BoundaryStore::new()).unwrap()
    }

    #[test]
    fn planar_node_areas_are_half_lengths() {
        let s = build("M 0 0 L 2 0 L 2 4");
        let xy = DomainType::Xy;
        assert!((NodeArea::new(0, xy).execute(&s).unwrap() - 1.0).abs() < TOL);
        assert!((NodeArea::new(1, xy).execute(&s).unwrap() - 3.0).abs() < TOL);
        assert!((NodeArea::new(2, xy).execute(&s).unwrap() - 2.0).abs() < TOL);
        assert!(NodeArea::new(3, xy).execute(&s).is_err());
    }

    #[test]
    fn planar_total_area_equals_length() {
        let s = build("M 0 0 L 2 0 L 2 4");
        let a = Area::new(DomainType::Xy).execute(&s).unwrap();
        assert!((a - s.length()).abs() < TOL);
    }

    #[test]
    fn segment_area_sums_bounding_nodes() {
        let s = build("M 0 0 L 2 0 L 2 4");
        let a = SegmentArea::new(0, DomainType::Xy).execute(&s).unwrap();
        assert!((a - 4.0).abs() < TOL);
        assert!(SegmentArea::new(2, DomainType::Xy).execute(&s).is_err());
    }

    #[test]
    fn revolved_cylinder_wall() {
        // Vertical line at r = 1 from z = 0 to z = 1 (RZ: x is radius).
        let s = Spline::line(Point2::new(1.0, 0.0), Point2::new(1.0, 1.0));
        let strip = StripArea::new(0.0, 1.0, DomainType::Rz).execute(&s);
        assert!((strip - 2.0 * PI).abs() < 1e-9);

        let total = Area::new(DomainType::Rz).execute(&s).unwrap();
        assert!((total - 2.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn zr_uses_second_axis() {
        // Horizontal line at r = 2 in ZR (y is radius), length 3.
        let s = Spline::line(Point2::new(0.0, 2.0), Point2::new(3.0, 2.0));
        let strip = StripArea::new(0.0, 1.0, DomainType::Zr).execute(&s);
        assert!((strip - 2.0 * PI * 3.0 * 2.0).abs() < 1e-9);
        // Under RZ the same line sits at mean radius 1.5.
        let strip = StripArea::new(0.0, 1.0, DomainType::Rz).execute(&s);
        assert!((strip - 2.0 * PI * 3.0 * 1.5).abs() < 1e-9);
    }

    #[test]
    fn revolved_disk_node_area_uses_centroid_radii() {
        // Radial line on the z = 0 plane, r from 0 to 2, two segments.
        let s = build("M 0 0 L 1 0 L 2 0");
        let rz = DomainType::Rz;
        // Node 1: L1 = L2 = 0.5, centroids at r = 0.5 and 1.5 → R̄ = 1.
        let a = NodeArea::new(1, rz).execute(&s).unwrap();
        assert!((a - 2.0 * PI).abs() < 1e-9);
        // Node 0: R1 = endpoint radius 0, R2 = 0.5.
        let a = NodeArea::new(0, rz).execute(&s).unwrap();
        assert!((a - 2.0 * PI * 0.25 * 0.5).abs() < 1e-9);
    }

    #[test]
    fn planar_strip_is_chord() {
        let s = build("M 0 0 L 3 0 L 3 4");
        let l = StripArea::new(0.0, 2.0, DomainType::Xy).execute(&s);
        assert!((l - 5.0).abs() < TOL);
    }
}
