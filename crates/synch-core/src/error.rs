//! Core error types

use thiserror::Error;

/// Errors that can occur during alignment operations
///
/// All of these are construction-time or call-time failures. There are no
/// transient failure modes in the core (no I/O, no races), so none of them
/// is retriable; the failed action is aborted without partial mutation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SynchError {
    /// Both origin anchors coincide, the affine map is underdetermined
    #[error("Degenerate anchors: both origins at {origin}, cannot solve stretch")]
    DegenerateAnchors { origin: f64 },

    /// A view range with start > end was requested
    #[error("Invalid view range: start {start} > end {end}")]
    InvalidRange { start: f64, end: f64 },

    /// The short recording is not an exact contiguous slice of the long one
    #[error("Short signal ({short_len} samples) is not an exact subsequence of long signal ({long_len} samples)")]
    SubsequenceNotFound { short_len: usize, long_len: usize },

    /// Motion-capture frame indices are not 0-based and contiguous
    #[error("Inconsistent frame index at position {position}: expected {expected}, found {found}")]
    InconsistentFrameIndex {
        position: usize,
        expected: u64,
        found: u64,
    },

    /// Explicit x array and y array differ in length
    #[error("Mismatched coordinate arrays: {x_len} x values vs {y_len} y values")]
    LengthMismatch { x_len: usize, y_len: usize },

    /// A signal must hold at least one sample
    #[error("Empty signal")]
    EmptySignal,

    /// A downsample budget must allow at least one point
    #[error("Downsample budget must be positive, got {max_points}")]
    InvalidBudget { max_points: usize },

    /// Samplerates must be strictly positive
    #[error("Samplerate must be positive, got {samplerate}")]
    InvalidSampleRate { samplerate: f64 },
}

/// Result type for alignment operations
pub type SynchResult<T> = Result<T, SynchError>;
