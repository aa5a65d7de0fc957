//! One-dimensional signal model
//!
//! A `Signal` is an ordered `(x, y)` sample sequence. Signals may arrive
//! with an explicit x array (not necessarily sorted) or with none, in which
//! case x defaults to the sample index. Normalization to ascending x
//! happens once at construction so that every later view query can binary
//! search the x array.

use crate::error::{SynchError, SynchResult};

/// An ordered sequence of `(x, y)` pairs with ascending x
///
/// Invariants (enforced at construction):
/// - at least one sample
/// - `x.len() == y.len()`
/// - x ascending (a single stable sort is applied if the input is not)
#[derive(Debug, Clone)]
pub struct Signal {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Signal {
    /// Build a signal from y values only; x defaults to `0..len`
    pub fn from_samples(y: Vec<f64>) -> SynchResult<Self> {
        if y.is_empty() {
            return Err(SynchError::EmptySignal);
        }
        let x = (0..y.len()).map(|i| i as f64).collect();
        Ok(Self { x, y })
    }

    /// Build a signal from explicit `(x, y)` arrays
    ///
    /// The arrays must have equal, nonzero length. If x is not already
    /// ascending, the pairs are co-sorted by x with one stable sort.
    pub fn with_coords(x: Vec<f64>, y: Vec<f64>) -> SynchResult<Self> {
        if x.len() != y.len() {
            return Err(SynchError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.is_empty() {
            return Err(SynchError::EmptySignal);
        }
        if x.windows(2).all(|w| w[0] <= w[1]) {
            return Ok(Self { x, y });
        }
        log::debug!("with_coords: x not ascending, stable-sorting {} pairs", x.len());
        let mut pairs: Vec<(f64, f64)> = x.into_iter().zip(y).collect();
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        let (x, y) = pairs.into_iter().unzip();
        Ok(Self { x, y })
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Always false (construction rejects empty signals)
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// The x coordinates, ascending
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// The y values, co-ordered with `x()`
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Smallest and largest x coordinate
    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    /// Index range `[first, last]` (inclusive) of samples with x in `[lo, hi]`
    ///
    /// Returns `None` when no sample falls inside the interval.
    pub fn index_range(&self, lo: f64, hi: f64) -> Option<(usize, usize)> {
        let first = self.x.partition_point(|&v| v < lo);
        let past = self.x.partition_point(|&v| v <= hi);
        if first >= past {
            None
        } else {
            Some((first, past - 1))
        }
    }
}
