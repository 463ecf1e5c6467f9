use crate::boundary::BoundaryId;
use crate::math::distance_2d::project_onto_segment;
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::polygon_2d::right_normal;
use crate::math::{Point2, Vector2, FLT_EPS, TOLERANCE};

/// Gauss-Legendre nodes and weights on `[-1, 1]` (5 points).
const GAUSS_NODES: [f64; 5] = [
    0.0,
    -0.538_469_310_105_683_1,
    0.538_469_310_105_683_1,
    -0.906_179_845_938_664,
    0.906_179_845_938_664,
];
const GAUSS_WEIGHTS: [f64; 5] = [
    0.568_888_888_888_888_9,
    0.478_628_670_499_366_5,
    0.478_628_670_499_366_5,
    0.236_926_885_056_189_1,
    0.236_926_885_056_189_1,
];

/// Number of sub-intervals used for cubic arc-length quadrature.
const LENGTH_INTERVALS: u32 = 16;

/// Number of chords a cubic is flattened into for intersection seeding.
const FLATTEN_CHORDS: u32 = 32;

/// Number of samples for the coarse closest-point search on a cubic.
const CLOSEST_SAMPLES: u32 = 64;

/// Geometric variant of a [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentKind {
    /// Straight line between the endpoints.
    Linear,
    /// Cubic Bezier with interior control points `p1` and `p2`.
    Cubic { p1: Point2, p2: Point2 },
}

/// Atomic piece of a [`Spline`](super::Spline): a line or a cubic Bezier.
///
/// Endpoints are fixed at construction. Arc length and centroid are computed
/// once and cached.
#[derive(Debug, Clone)]
pub struct Segment {
    x1: Point2,
    x2: Point2,
    kind: SegmentKind,
    index: usize,
    length: f64,
    centroid: Point2,
    boundary: Option<BoundaryId>,
}

impl Segment {
    /// Creates a linear segment from `x1` to `x2`.
    #[must_use]
    pub fn linear(x1: Point2, x2: Point2) -> Self {
        Self::from_kind(x1, x2, SegmentKind::Linear)
    }

    /// Creates a cubic Bezier segment `x1, p1, p2, x2`.
    ///
    /// When both control points sit on their endpoints the curve is a straight
    /// line and a linear segment is returned instead.
    #[must_use]
    pub fn cubic(x1: Point2, p1: Point2, p2: Point2, x2: Point2) -> Self {
        if (p1 - x1).norm_squared() < TOLERANCE * TOLERANCE
            && (x2 - p2).norm_squared() < TOLERANCE * TOLERANCE
        {
            tracing::trace!(?x1, ?x2, "collapsing degenerate cubic to a linear segment");
            return Self::linear(x1, x2);
        }
        Self::from_kind(x1, x2, SegmentKind::Cubic { p1, p2 })
    }

    fn from_kind(x1: Point2, x2: Point2, kind: SegmentKind) -> Self {
        let mut segment = Self {
            x1,
            x2,
            kind,
            index: 0,
            length: 0.0,
            centroid: x1,
            boundary: None,
        };
        segment.length = segment.compute_length();
        segment.centroid = segment.pos(0.5);
        segment
    }

    /// Returns the start point.
    #[must_use]
    pub fn first_point(&self) -> Point2 {
        self.x1
    }

    /// Returns the end point.
    #[must_use]
    pub fn last_point(&self) -> Point2 {
        self.x2
    }

    /// Returns the geometric variant.
    #[must_use]
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Returns `true` for cubic (smooth) segments.
    #[must_use]
    pub fn is_smooth(&self) -> bool {
        matches!(self.kind, SegmentKind::Cubic { .. })
    }

    /// Position of this segment within its owning spline.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Cached arc length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Cached representative midpoint, `pos(0.5)`.
    #[must_use]
    pub fn centroid(&self) -> Point2 {
        self.centroid
    }

    /// Boundary this segment belongs to, once registered.
    #[must_use]
    pub fn boundary(&self) -> Option<BoundaryId> {
        self.boundary
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub(crate) fn set_boundary(&mut self, boundary: BoundaryId) {
        self.boundary = Some(boundary);
    }

    /// Returns the same geometry traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let kind = match self.kind {
            SegmentKind::Linear => SegmentKind::Linear,
            SegmentKind::Cubic { p1, p2 } => SegmentKind::Cubic { p1: p2, p2: p1 },
        };
        Self {
            x1: self.x2,
            x2: self.x1,
            kind,
            ..self.clone()
        }
    }

    /// Evaluates the point at local parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn pos(&self, t: f64) -> Point2 {
        match self.kind {
            SegmentKind::Linear => self.x1 + (self.x2 - self.x1) * t,
            SegmentKind::Cubic { p1, p2 } => {
                let mt = 1.0 - t;
                let b0 = mt * mt * mt;
                let b1 = 3.0 * mt * mt * t;
                let b2 = 3.0 * mt * t * t;
                let b3 = t * t * t;
                Point2::from(
                    self.x1.coords * b0 + p1.coords * b1 + p2.coords * b2 + self.x2.coords * b3,
                )
            }
        }
    }

    /// First derivative with respect to the local parameter.
    fn derivative(&self, t: f64) -> Vector2 {
        match self.kind {
            SegmentKind::Linear => self.x2 - self.x1,
            SegmentKind::Cubic { p1, p2 } => {
                let mt = 1.0 - t;
                (p1 - self.x1) * (3.0 * mt * mt)
                    + (p2 - p1) * (6.0 * mt * t)
                    + (self.x2 - p2) * (3.0 * t * t)
            }
        }
    }

    /// Unit tangent at local parameter `t`.
    ///
    /// Where the derivative vanishes (a cubic whose control point coincides
    /// with an endpoint) the chord direction is used.
    #[must_use]
    pub fn tangent(&self, t: f64) -> Vector2 {
        let d = self.derivative(t);
        let len = d.norm();
        if len > TOLERANCE {
            return d / len;
        }
        let chord = self.x2 - self.x1;
        let chord_len = chord.norm();
        if chord_len > TOLERANCE {
            chord / chord_len
        } else {
            Vector2::zeros()
        }
    }

    /// Unit normal at local parameter `t`: the tangent rotated by -90°.
    #[must_use]
    pub fn normal(&self, t: f64) -> Vector2 {
        right_normal(&self.tangent(t))
    }

    fn compute_length(&self) -> f64 {
        match self.kind {
            SegmentKind::Linear => (self.x2 - self.x1).norm(),
            SegmentKind::Cubic { .. } => {
                let h = 1.0 / f64::from(LENGTH_INTERVALS);
                let mut sum = 0.0;
                for k in 0..LENGTH_INTERVALS {
                    let mid = (f64::from(k) + 0.5) * h;
                    for (node, weight) in GAUSS_NODES.iter().zip(GAUSS_WEIGHTS.iter()) {
                        let t = mid + 0.5 * h * node;
                        sum += weight * self.derivative(t).norm();
                    }
                }
                sum * 0.5 * h
            }
        }
    }

    /// Returns the local parameter of the point on this segment closest to `point`.
    #[must_use]
    pub fn closest_pos(&self, point: &Point2) -> f64 {
        match self.kind {
            SegmentKind::Linear => project_onto_segment(point, &self.x1, &self.x2),
            SegmentKind::Cubic { .. } => {
                let dist = |t: f64| (point - self.pos(t)).norm_squared();

                let mut best_t = 0.0;
                let mut best_dist = f64::INFINITY;
                for i in 0..=CLOSEST_SAMPLES {
                    let t = f64::from(i) / f64::from(CLOSEST_SAMPLES);
                    let d = dist(t);
                    if d < best_dist {
                        best_dist = d;
                        best_t = t;
                    }
                }

                // Refine with ternary search around the best sample.
                let dt = 1.0 / f64::from(CLOSEST_SAMPLES);
                let mut lo = (best_t - dt).max(0.0);
                let mut hi = (best_t + dt).min(1.0);
                for _ in 0..50 {
                    let m1 = lo + (hi - lo) / 3.0;
                    let m2 = hi - (hi - lo) / 3.0;
                    if dist(m1) < dist(m2) {
                        hi = m2;
                    } else {
                        lo = m1;
                    }
                }
                0.5 * (lo + hi)
            }
        }
    }

    /// Returns the local parameter at which this segment passes through
    /// `point`, or `None` if the point is not on the segment.
    #[must_use]
    pub fn eval_t(&self, point: &Point2) -> Option<f64> {
        if self.length < TOLERANCE {
            return ((point - self.x1).norm() < TOLERANCE).then_some(0.0);
        }
        let t = self.closest_pos(point);
        let miss = (point - self.pos(t)).norm();
        (miss <= FLT_EPS * self.length).then_some(t)
    }

    /// Intersects this segment with `other`.
    ///
    /// Returns `(t, u)`, the local parameters on `self` and `other`, both in
    /// `[0, 1]`. Among several crossings the one earliest along `self` is
    /// returned.
    #[must_use]
    pub fn intersect(&self, other: &Segment) -> Option<(f64, f64)> {
        if let (SegmentKind::Linear, SegmentKind::Linear) = (self.kind, other.kind) {
            return segment_segment_intersect_2d(&self.x1, &self.x2, &other.x1, &other.x2);
        }

        let (a_pts, a_n) = self.flatten();
        let (b_pts, b_n) = other.flatten();
        for i in 0..a_n {
            for j in 0..b_n {
                let (ia, jb) = (i as usize, j as usize);
                let Some((s, u)) = segment_segment_intersect_2d(
                    &a_pts[ia],
                    &a_pts[ia + 1],
                    &b_pts[jb],
                    &b_pts[jb + 1],
                ) else {
                    continue;
                };
                let t0 = (f64::from(i) + s) / f64::from(a_n);
                let u0 = (f64::from(j) + u) / f64::from(b_n);
                return Some(self.refine_intersection(other, t0, u0));
            }
        }
        None
    }

    /// Polyline approximation: the points and the number of chords.
    fn flatten(&self) -> (Vec<Point2>, u32) {
        let chords = match self.kind {
            SegmentKind::Linear => 1,
            SegmentKind::Cubic { .. } => FLATTEN_CHORDS,
        };
        let points = (0..=chords)
            .map(|k| self.pos(f64::from(k) / f64::from(chords)))
            .collect();
        (points, chords)
    }

    /// Newton iteration on `self.pos(t) - other.pos(u) = 0`, started from the
    /// chord estimate. Falls back to the estimate if the iteration leaves the
    /// unit square or fails to converge.
    fn refine_intersection(&self, other: &Segment, t0: f64, u0: f64) -> (f64, f64) {
        let (mut t, mut u) = (t0, u0);
        for _ in 0..16 {
            let f = self.pos(t) - other.pos(u);
            if f.norm() < TOLERANCE {
                return (t, u);
            }
            let da = self.derivative(t);
            let db = -other.derivative(u);
            let det = da.perp(&db);
            if det.abs() < TOLERANCE {
                break;
            }
            // Solve [da db] [dt du]^T = f by Cramer's rule.
            let dt = f.perp(&db) / det;
            let du = da.perp(&f) / det;
            t -= dt;
            u -= du;
            if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
                break;
            }
        }
        if (self.pos(t) - other.pos(u)).norm() < (self.pos(t0) - other.pos(u0)).norm()
            && (0.0..=1.0).contains(&t)
            && (0.0..=1.0).contains(&u)
        {
            (t, u)
        } else {
            (t0, u0)
        }
    }
}
