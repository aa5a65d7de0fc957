//! Panel specifications and rendered-line state
//!
//! Pure data: what the caller declares per panel (`PanelSpec`) and what a
//! controller keeps per rendered line (`LineData`). Validation is eager so
//! shape mismatches surface at construction, not mid-render.

use std::sync::Arc;

use synch_core::{Signal, SynchError, SynchResult};

use crate::label::LabelFormatter;

/// Half-open visible x interval `[start, end)` in a signal's own units
///
/// `new` is the only constructor, so `start <= end` holds for every value
/// of this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRange {
    start: f64,
    end: f64,
}

impl ViewRange {
    /// `start <= end` is required
    pub fn new(start: f64, end: f64) -> SynchResult<Self> {
        if start > end {
            return Err(SynchError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Declaration of one visual row of the view
///
/// All signals in a panel share one x axis. `samplerate: None` means the
/// axis labels show the raw sample index; with a samplerate the default
/// labels are timestamps. The view builds the default formatter from its
/// `ViewConfig`; `with_formatter` overrides it per panel.
#[derive(Debug, Clone)]
pub struct PanelSpec {
    pub signals: Vec<Arc<Signal>>,
    pub samplerate: Option<f64>,
    /// Tied panels share one numeric x range under user interaction
    pub tied: bool,
    /// Custom formatter; `None` means the view picks raw-index or
    /// timestamp labels from `samplerate`
    pub formatter: Option<LabelFormatter>,
}

impl PanelSpec {
    pub fn new(signals: Vec<Arc<Signal>>, samplerate: Option<f64>, tied: bool) -> SynchResult<Self> {
        if let Some(sr) = samplerate {
            if !(sr > 0.0) {
                return Err(SynchError::InvalidSampleRate { samplerate: sr });
            }
        }
        Ok(Self {
            signals,
            samplerate,
            tied,
            formatter: None,
        })
    }

    /// Replace the default formatter (raw index / timestamp) with another
    pub fn with_formatter(mut self, formatter: LabelFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Union x domain across this panel's signals: (min of mins, max of maxes)
    pub fn domain(&self) -> Option<(f64, f64)> {
        self.signals
            .iter()
            .map(|s| s.domain())
            .reduce(|(lo_a, hi_a), (lo_b, hi_b)| (lo_a.min(lo_b), hi_a.max(hi_b)))
    }
}

/// The decimated `(x, y)` data currently assigned to one rendered line
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineData {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_range_validation() {
        let range = ViewRange::new(0.0, 10.0).unwrap();
        assert_eq!(range.start(), 0.0);
        assert_eq!(range.end(), 10.0);
        assert_eq!(range.width(), 10.0);
        assert!(ViewRange::new(5.0, 5.0).is_ok());
        assert_eq!(
            ViewRange::new(5.0, 1.0).unwrap_err(),
            SynchError::InvalidRange { start: 5.0, end: 1.0 }
        );
    }

    #[test]
    fn test_panel_domain_union() {
        let a = Arc::new(Signal::with_coords(vec![5.0, 100.0], vec![0.0, 0.0]).unwrap());
        let b = Arc::new(Signal::with_coords(vec![-3.0, 40.0], vec![0.0, 0.0]).unwrap());
        let spec = PanelSpec::new(vec![a, b], None, false).unwrap();
        assert_eq!(spec.domain(), Some((-3.0, 100.0)));
        assert!(spec.formatter.is_none());
    }

    #[test]
    fn test_bad_samplerate_rejected() {
        let s = Arc::new(Signal::from_samples(vec![0.0; 4]).unwrap());
        assert!(PanelSpec::new(vec![s], Some(-1.0), false).is_err());
    }
}
