use crate::boundary::BoundaryId;
use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2};

use super::{Aabb, Segment};

/// An ordered chain of linear and cubic segments describing a boundary.
///
/// The parametric position `t` runs over `[0, num_segments()]`: its integer
/// part selects a segment and its fractional part is the local parameter on
/// it, so `t = 2.25` lies a quarter of the way along the third segment.
///
/// A `Spline` is never empty. The bounding box and total length are
/// recomputed whenever the segment list is replaced.
#[derive(Debug, Clone)]
pub struct Spline {
    segments: Vec<Segment>,
    bounds: Aabb,
    length: f64,
}

impl Spline {
    /// Creates a spline made of a single linear segment.
    #[must_use]
    pub fn line(x1: Point2, x2: Point2) -> Self {
        let segment = Segment::linear(x1, x2);
        let bounds = Aabb {
            min: Point2::new(x1.x.min(x2.x), x1.y.min(x2.y)),
            max: Point2::new(x1.x.max(x2.x), x1.y.max(x2.y)),
        };
        let length = segment.length();
        Self {
            segments: vec![segment],
            bounds,
            length,
        }
    }

    /// Creates a spline from an ordered list of segments.
    ///
    /// Segments are re-indexed to their position in the list.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if `segments` is empty.
    pub fn from_segments(mut segments: Vec<Segment>) -> Result<Self> {
        let bounds = Aabb::from_segments(&segments).ok_or_else(|| {
            GeometryError::Degenerate("spline needs at least one segment".into())
        })?;
        for (i, segment) in segments.iter_mut().enumerate() {
            segment.set_index(i);
        }
        let length = segments.iter().map(Segment::length).sum();
        Ok(Self {
            segments,
            bounds,
            length,
        })
    }

    /// Concatenates the segments of several splines, in order.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if there are no segments in total.
    pub fn join<'a>(splines: impl IntoIterator<Item = &'a Spline>) -> Result<Self> {
        let segments = splines
            .into_iter()
            .flat_map(|s| s.segments.iter().cloned())
            .collect();
        Self::from_segments(segments)
    }

    /// Returns the spline traversed in the opposite direction, which flips
    /// every normal.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut segments: Vec<Segment> = self.segments.iter().rev().map(Segment::reversed).collect();
        for (i, segment) in segments.iter_mut().enumerate() {
            segment.set_index(i);
        }
        let bounds = Aabb::from_segments(&segments).unwrap_or(self.bounds);
        Self {
            segments,
            bounds,
            length: self.length,
        }
    }

    pub(crate) fn assign_boundary(&mut self, boundary: BoundaryId) {
        for segment in &mut self.segments {
            segment.set_boundary(boundary);
        }
    }

    /// Returns the segments in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the i-th segment.
    #[must_use]
    pub fn segment(&self, i: usize) -> Option<&Segment> {
        self.segments.get(i)
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn num_segments(&self) -> usize {
        self.segments.len()
    }

    /// Returns the number of breakpoints, `num_segments() + 1`.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.segments.len() + 1
    }

    /// Cached bounding box.
    #[must_use]
    pub fn bounding_box(&self) -> Aabb {
        self.bounds
    }

    /// Cached total arc length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    fn last_segment(&self) -> &Segment {
        // Non-empty by construction.
        &self.segments[self.segments.len() - 1]
    }

    /// First point of the first segment.
    #[must_use]
    pub fn first_point(&self) -> Point2 {
        self.segments[0].first_point()
    }

    /// Last point of the last segment.
    #[must_use]
    pub fn last_point(&self) -> Point2 {
        self.last_segment().last_point()
    }

    /// Returns the i-th breakpoint: the start of segment `i`, or the last
    /// point for `i >= num_segments()`.
    #[must_use]
    pub fn point(&self, i: usize) -> Point2 {
        self.segments
            .get(i)
            .map_or_else(|| self.last_point(), Segment::first_point)
    }

    /// Returns the cached centroid of segment `i`.
    #[must_use]
    pub fn centroid(&self, i: usize) -> Option<Point2> {
        self.segments.get(i).map(Segment::centroid)
    }

    /// Splits a parametric position into a segment and its local parameter.
    ///
    /// `t` is clamped to `[0, num_segments()]`; the upper end maps to the end
    /// of the final segment.
    fn locate(&self, t: f64) -> (&Segment, f64) {
        let ns = self.segments.len();
        #[allow(clippy::cast_precision_loss)]
        let t = t.clamp(0.0, ns as f64);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let si = t.floor() as usize;
        if si >= ns {
            return (self.last_segment(), 1.0);
        }
        #[allow(clippy::cast_precision_loss)]
        let local = t - si as f64;
        (&self.segments[si], local)
    }

    /// Evaluates the position at parametric position `t`.
    #[must_use]
    pub fn pos(&self, t: f64) -> Point2 {
        let (segment, local) = self.locate(t);
        segment.pos(local)
    }

    /// Unit tangent at parametric position `t`.
    #[must_use]
    pub fn tangent(&self, t: f64) -> Vector2 {
        let (segment, local) = self.locate(t);
        segment.tangent(local)
    }

    /// Unit normal at parametric position `t`.
    #[must_use]
    pub fn normal(&self, t: f64) -> Vector2 {
        let (segment, local) = self.locate(t);
        segment.normal(local)
    }

    /// Returns the parametric position of `point` if it lies on the spline.
    ///
    /// Segments are tried in order and the first match wins.
    #[must_use]
    pub fn eval_t(&self, point: &Point2) -> Option<f64> {
        self.segments.iter().find_map(|segment| {
            #[allow(clippy::cast_precision_loss)]
            segment.eval_t(point).map(|t| segment.index() as f64 + t)
        })
    }
}
