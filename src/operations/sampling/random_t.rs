use std::f64::consts::PI;

use crate::domain::DomainType;
use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::Spline;
use crate::math::Point2;
use crate::operations::query::Area;

use super::{SamplingParams, SegmentWeighting, UniformSource};

/// Draws a random parametric position on a spline.
///
/// Planar domains pick a segment (uniformly, or by arc length) and a uniform
/// offset within it. Axisymmetric domains use rejection sampling so that
/// samples are uniform over the revolved surface: a candidate is accepted
/// with probability proportional to the area swept by a thin strip around
/// it. A strip parallel to the radius axis sweeps no area and is always
/// accepted.
pub struct RandomT {
    domain: DomainType,
    params: SamplingParams,
}

impl RandomT {
    /// Creates a new `RandomT` sampler with default parameters.
    #[must_use]
    pub fn new(domain: DomainType) -> Self {
        Self {
            domain,
            params: SamplingParams::default(),
        }
    }

    /// Overrides the sampling parameters.
    #[must_use]
    pub fn with_params(mut self, params: SamplingParams) -> Self {
        self.params = params;
        self
    }

    /// Draws one sample.
    ///
    /// # Errors
    ///
    /// In axisymmetric domains, returns `GeometryError::Degenerate` if the
    /// spline sweeps no area, and `OperationError::SamplingExhausted` if no
    /// candidate is accepted within `max_attempts`.
    pub fn execute<R: UniformSource + ?Sized>(&self, spline: &Spline, rng: &mut R) -> Result<f64> {
        if !self.domain.is_axisymmetric() {
            return Ok(self.candidate(spline, rng));
        }

        let total = Area::new(self.domain).execute(spline)?;
        if total <= 0.0 {
            return Err(GeometryError::Degenerate(format!(
                "spline sweeps no area in the {} domain",
                self.domain
            ))
            .into());
        }

        #[allow(clippy::cast_precision_loss)]
        let t_max = spline.num_segments() as f64;
        let half = self.params.strip_half_width;
        let radius = |t: f64| self.domain.radius(&spline.pos(t)).unwrap_or(0.0);
        for _ in 0..self.params.max_attempts {
            let t = self.candidate(spline, rng);
            let r1 = radius((t + half).min(t_max));
            let r2 = radius((t - half).max(0.0));
            let (rm, rp) = if r1 < r2 { (r1, r2) } else { (r2, r1) };

            let swept = PI * (rp * rp - rm * rm);
            if swept <= 0.0 || rng.uniform() <= swept / total {
                return Ok(t);
            }
        }

        tracing::warn!(
            attempts = self.params.max_attempts,
            domain = %self.domain,
            "rejection sampling exhausted"
        );
        Err(OperationError::SamplingExhausted {
            attempts: self.params.max_attempts,
        }
        .into())
    }

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn candidate<R: UniformSource + ?Sized>(&self, spline: &Spline, rng: &mut R) -> f64 {
        let ns = spline.num_segments();
        let seg = match self.params.weighting {
            SegmentWeighting::Uniform => ((ns as f64 * rng.uniform()) as usize).min(ns - 1),
            SegmentWeighting::ArcLength => pick_by_length(spline, rng.uniform()),
        };
        seg as f64 + rng.uniform()
    }
}

/// Picks the segment containing arc-length fraction `u` of the spline.
fn pick_by_length(spline: &Spline, u: f64) -> usize {
    let target = u * spline.length();
    let mut acc = 0.0;
    for (i, segment) in spline.segments().iter().enumerate() {
        acc += segment.length();
        if target < acc {
            return i;
        }
    }
    spline.num_segments() - 1
}

/// Draws a random position on a spline: `pos(RandomT)`.
pub struct RandomPos {
    sampler: RandomT,
}

impl RandomPos {
    /// Creates a new `RandomPos` sampler with default parameters.
    #[must_use]
    pub fn new(domain: DomainType) -> Self {
        Self {
            sampler: RandomT::new(domain),
        }
    }

    /// Overrides the sampling parameters.
    #[must_use]
    pub fn with_params(mut self, params: SamplingParams) -> Self {
        self.sampler = self.sampler.with_params(params);
        self
    }

    /// Draws one sample.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`RandomT::execute`].
    pub fn execute<R: UniformSource + ?Sized>(
        &self,
        spline: &Spline,
        rng: &mut R,
    ) -> Result<Point2> {
        let t = self.sampler.execute(spline, rng)?;
        Ok(spline.pos(t))
    }
}
