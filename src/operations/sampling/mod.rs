mod random_t;

pub use random_t::{RandomPos, RandomT};

/// A source of uniform random numbers in `[0, 1)`.
///
/// Implemented for every [`rand::Rng`], so any seeded or thread-local
/// generator can be passed in directly.
pub trait UniformSource {
    /// Draws the next value in `[0, 1)`.
    fn uniform(&mut self) -> f64;
}

impl<R: rand::Rng + ?Sized> UniformSource for R {
    fn uniform(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// How planar sampling picks a segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SegmentWeighting {
    /// Every segment is equally likely, regardless of its length.
    #[default]
    Uniform,
    /// Segments are picked in proportion to their arc length.
    ArcLength,
}

/// Parameters controlling random sampling along a spline.
#[derive(Debug, Clone, Copy)]
pub struct SamplingParams {
    /// Maximum number of rejection-sampling attempts in axisymmetric domains.
    pub max_attempts: usize,
    /// Half width, in parametric units, of the strip used to weigh a sample.
    pub strip_half_width: f64,
    /// Segment selection for planar domains.
    pub weighting: SegmentWeighting,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            max_attempts: 100_000,
            strip_half_width: 0.01,
            weighting: SegmentWeighting::Uniform,
        }
    }
}

impl SamplingParams {
    /// Sets the rejection-sampling attempt budget.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the strip half width.
    #[must_use]
    pub fn with_strip_half_width(mut self, strip_half_width: f64) -> Self {
        self.strip_half_width = strip_half_width;
        self
    }

    /// Sets the planar segment weighting.
    #[must_use]
    pub fn with_weighting(mut self, weighting: SegmentWeighting) -> Self {
        self.weighting = weighting;
        self
    }
}
