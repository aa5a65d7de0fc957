//! Per-panel viewport controller
//!
//! One controller per panel. It holds the panel's downsamplers (one per
//! signal) and its current visible range; applying a range recomputes the
//! decimated line data for every signal in that range. Tied-group
//! propagation lives one level up, in the view: a broadcast calls
//! `set_range` here directly, never the user-event path, so a range change
//! can never re-trigger itself.

use std::sync::Arc;

use synch_core::{DownsampleBudget, LazyDownsampler, Signal, SynchResult};

use crate::panel::{LineData, ViewRange};

/// Recomputes one panel's rendered lines when its visible x range changes
#[derive(Debug)]
pub struct ViewportController {
    downsamplers: Vec<LazyDownsampler>,
    range: ViewRange,
    lines: Vec<LineData>,
}

impl ViewportController {
    /// Build the controller and populate the lines for `initial` range
    pub fn new(
        signals: &[Arc<Signal>],
        budget: DownsampleBudget,
        initial: ViewRange,
    ) -> SynchResult<Self> {
        let downsamplers: Vec<_> = signals
            .iter()
            .map(|s| LazyDownsampler::new(Arc::clone(s), budget))
            .collect();
        let mut controller = Self {
            lines: vec![LineData::default(); downsamplers.len()],
            downsamplers,
            range: initial,
        };
        controller.set_range(initial)?;
        Ok(controller)
    }

    /// Apply a visible range: re-downsample every signal, replace the lines
    ///
    /// This is the direct state path used both for the panel's own event
    /// and for broadcasts from its tied group.
    pub fn set_range(&mut self, range: ViewRange) -> SynchResult<()> {
        for (downsampler, line) in self.downsamplers.iter().zip(&mut self.lines) {
            let (x, y) = downsampler.downsample(range.start(), range.end())?;
            *line = LineData { x, y };
        }
        self.range = range;
        Ok(())
    }

    /// The panel's current visible range
    pub fn range(&self) -> ViewRange {
        self.range
    }

    /// Current decimated data, one entry per signal
    pub fn lines(&self) -> &[LineData] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(lens: &[usize], max_points: usize, range: ViewRange) -> ViewportController {
        let signals: Vec<Arc<Signal>> = lens
            .iter()
            .map(|&n| Arc::new(Signal::from_samples((0..n).map(|i| i as f64).collect()).unwrap()))
            .collect();
        ViewportController::new(&signals, DownsampleBudget::new(max_points).unwrap(), range)
            .unwrap()
    }

    #[test]
    fn test_initial_lines_populated() {
        let c = controller(&[1_000, 50], 100, ViewRange::new(0.0, 1_000.0).unwrap());
        assert_eq!(c.lines().len(), 2);
        assert!(!c.lines()[0].x.is_empty());
        // the 50-sample signal fits entirely in the budget
        assert_eq!(c.lines()[1].x.len(), 50);
    }

    #[test]
    fn test_set_range_recomputes() {
        let mut c = controller(&[100_000], 100, ViewRange::new(0.0, 100_000.0).unwrap());
        let wide = c.lines()[0].clone();
        c.set_range(ViewRange::new(200.0, 260.0).unwrap()).unwrap();
        let narrow = c.lines()[0].clone();
        assert_ne!(wide, narrow);
        // zoomed in below the budget, data is sample-exact
        assert!(narrow.x.windows(2).all(|w| w[1] == w[0] + 1.0));
        assert_eq!(c.range(), ViewRange::new(200.0, 260.0).unwrap());
    }

    #[test]
    fn test_range_outside_domain_clears_lines() {
        let mut c = controller(&[100], 10, ViewRange::new(0.0, 100.0).unwrap());
        c.set_range(ViewRange::new(5_000.0, 6_000.0).unwrap()).unwrap();
        assert!(c.lines()[0].x.is_empty());
    }
}
