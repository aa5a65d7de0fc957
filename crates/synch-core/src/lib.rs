//! Synch Core - Shared library for audio/motion-capture alignment
//!
//! Provides the signal model, view-only downsampling, the anchor-based
//! affine solver, timestamp decomposition, the motion-capture frame set
//! and the offline synch-and-trim tool. File I/O (audio codecs, MVNX
//! parsing/export) and rendering surfaces live in the applications.

pub mod anchor;
pub mod downsample;
pub mod error;
pub mod mocap;
pub mod signal;
pub mod timestamp;
pub mod trim;

pub use anchor::AffineMap;
pub use downsample::{DownsampleBudget, LazyDownsampler};
pub use error::{SynchError, SynchResult};
pub use mocap::{FrameSet, MotionFrame};
pub use signal::Signal;
pub use timestamp::Timestamp;
pub use trim::{find_subsequence, synch_and_trim, TrimReport};
