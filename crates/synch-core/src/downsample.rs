//! View-only signal downsampling
//!
//! Downsamples a signal to a bounded number of points for the currently
//! visible x range. Only the display is affected, never the data: the view
//! is recomputed from the full-resolution signal on every call, so zooming
//! in far enough always reaches sample-precise inspection.

use std::sync::Arc;

use crate::error::{SynchError, SynchResult};
use crate::signal::Signal;

/// Upper bound on the number of points emitted for any view window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownsampleBudget(usize);

impl DownsampleBudget {
    /// Create a budget; `max_points` must be positive
    pub fn new(max_points: usize) -> SynchResult<Self> {
        if max_points == 0 {
            return Err(SynchError::InvalidBudget { max_points });
        }
        Ok(Self(max_points))
    }

    /// The maximum number of in-range points per view
    pub fn max_points(&self) -> usize {
        self.0
    }
}

/// Decimating view over one signal
///
/// Holds the full-resolution signal and recomputes a strided view for any
/// requested x range. Idempotent: identical arguments yield identical
/// output, and the underlying signal is never mutated.
#[derive(Debug, Clone)]
pub struct LazyDownsampler {
    signal: Arc<Signal>,
    budget: DownsampleBudget,
}

impl LazyDownsampler {
    pub fn new(signal: Arc<Signal>, budget: DownsampleBudget) -> Self {
        Self { signal, budget }
    }

    /// The wrapped signal
    pub fn signal(&self) -> &Signal {
        &self.signal
    }

    /// Decimated `(x, y)` view of the samples falling in `[view_start, view_end]`
    ///
    /// The request is clamped to the signal domain; a request entirely
    /// outside it yields empty vectors. The emitted set contains every
    /// stride-th in-range sample plus the last in-range sample, padded by
    /// one raw sample on each side (where one exists) so that the rendered
    /// line is not visually cut at the viewport edge.
    pub fn downsample(&self, view_start: f64, view_end: f64) -> SynchResult<(Vec<f64>, Vec<f64>)> {
        if view_start > view_end {
            return Err(SynchError::InvalidRange {
                start: view_start,
                end: view_end,
            });
        }
        let (first, last) = match self.signal.index_range(view_start, view_end) {
            Some(range) => range,
            None => return Ok((Vec::new(), Vec::new())),
        };

        let span = last - first + 1;
        // ceiling division keeps the in-range count at max_points even when
        // the span is not an exact multiple of the budget
        let stride = span.div_ceil(self.budget.max_points()).max(1);

        let mut idxs = Vec::with_capacity(span.div_ceil(stride) + 3);
        if first > 0 {
            idxs.push(first - 1);
        }
        idxs.extend((first..=last).step_by(stride));
        // keep the rightmost in-range sample so the trace reaches the edge
        if *idxs.last().unwrap_or(&first) != last {
            idxs.push(last);
        }
        if last + 1 < self.signal.len() {
            idxs.push(last + 1);
        }

        let x = idxs.iter().map(|&i| self.signal.x()[i]).collect();
        let y = idxs.iter().map(|&i| self.signal.y()[i]).collect();
        Ok((x, y))
    }
}
