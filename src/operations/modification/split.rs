use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::{Segment, Spline};

/// Resamples a spline into `nn` parametric breakpoints.
///
/// Every original breakpoint is kept. The `nn - 1` sub-intervals are shared
/// out between segments in proportion to their length, and each segment is
/// divided evenly in its local parameter.
pub struct SplitSpline {
    nodes: usize,
    reverse: bool,
}

impl SplitSpline {
    /// Creates a new `SplitSpline` operation producing `nodes` breakpoints.
    #[must_use]
    pub fn new(nodes: usize) -> Self {
        Self {
            nodes,
            reverse: false,
        }
    }

    /// Returns the breakpoints from the end of the spline to its start.
    #[must_use]
    pub fn reversed(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Executes the resampling.
    ///
    /// The result has `nodes` entries, non-decreasing from `0` to
    /// `num_segments()` (or the other way round when reversed).
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if there are fewer nodes than
    /// `num_segments() + 1`, and `GeometryError::Degenerate` for a spline of
    /// zero length.
    pub fn execute(&self, spline: &Spline) -> Result<Vec<f64>> {
        let ns = spline.num_segments();
        let nn = self.nodes;
        if nn < ns + 1 {
            return Err(OperationError::InvalidInput(format!(
                "{nn} nodes cannot keep the {} breakpoints of the spline",
                ns + 1
            ))
            .into());
        }
        let total = spline.length();
        if total <= 0.0 {
            return Err(GeometryError::Degenerate("cannot split a zero-length spline".into()).into());
        }

        let intervals = nn - 1;
        let lengths: Vec<f64> = spline.segments().iter().map(Segment::length).collect();
        let mut divs: Vec<usize> = lengths
            .iter()
            .map(|&l| {
                #[allow(
                    clippy::cast_precision_loss,
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss
                )]
                let d = (intervals as f64 * l / total).round() as usize;
                d.max(1)
            })
            .collect();
        #[allow(clippy::cast_precision_loss)]
        let spacing = |s: usize, divs: &[usize]| lengths[s] / divs[s] as f64;

        let mut tot: usize = divs.iter().sum();
        if tot != intervals {
            tracing::debug!(allocated = tot, intervals, "rebalancing divisions");
        }
        while tot < intervals {
            // Reversed so that ties go to the first segment.
            let s = (0..ns)
                .rev()
                .max_by(|&a, &b| spacing(a, &divs).total_cmp(&spacing(b, &divs)))
                .unwrap_or(0);
            divs[s] += 1;
            tot += 1;
        }
        while tot > intervals {
            // At least one segment has spare divisions since `intervals >= ns`.
            let Some(s) = (0..ns)
                .filter(|&s| divs[s] > 1)
                .min_by(|&a, &b| spacing(a, &divs).total_cmp(&spacing(b, &divs)))
            else {
                break;
            };
            divs[s] -= 1;
            tot -= 1;
        }

        let mut t = Vec::with_capacity(nn);
        for (s, &d) in divs.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let start = s as f64;
            t.push(start);
            for k in 1..d {
                #[allow(clippy::cast_precision_loss)]
                t.push(start + k as f64 / d as f64);
            }
        }
        #[allow(clippy::cast_precision_loss)]
        t.push(ns as f64);

        if self.reverse {
            t.reverse();
        }
        Ok(t)
    }
}
