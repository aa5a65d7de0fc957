//! Motion-capture frame set
//!
//! The tabular form of an MVNX recording's normal frames, as handed over
//! by the file-format layer. The core only ever reads `index` and
//! reads/writes the derived `audio_sample`; orientation, position and the
//! other per-frame magnitudes stay with the format layer.

use crate::anchor::AffineMap;
use crate::error::{SynchError, SynchResult};

/// One normal motion-capture frame, reduced to the fields the core touches
#[derive(Debug, Clone, PartialEq)]
pub struct MotionFrame {
    /// 0-based frame index, contiguous across the recording
    pub index: u64,
    /// Milliseconds since recording start (hardware-supplied)
    pub time_ms: i64,
    /// Derived audio sample index; set once by a synchronization action,
    /// authoritative afterwards for label lookup and trimming
    pub audio_sample: Option<i64>,
}

impl MotionFrame {
    pub fn new(index: u64, time_ms: i64) -> Self {
        Self {
            index,
            time_ms,
            audio_sample: None,
        }
    }
}

/// An ordered collection of normal frames with contiguous 0-based indices
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSet {
    frames: Vec<MotionFrame>,
    wav_file: Option<String>,
}

impl FrameSet {
    /// Validate and wrap a frame sequence
    ///
    /// Indices must start at 0 and increase by exactly 1; anything else
    /// indicates a malformed or unsupported capture file.
    pub fn new(frames: Vec<MotionFrame>) -> SynchResult<Self> {
        for (position, frame) in frames.iter().enumerate() {
            if frame.index != position as u64 {
                return Err(SynchError::InconsistentFrameIndex {
                    position,
                    expected: position as u64,
                    found: frame.index,
                });
            }
        }
        Ok(Self {
            frames,
            wav_file: None,
        })
    }

    pub fn frames(&self) -> &[MotionFrame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Name of the short recording this frame set is synched to, once set
    pub fn wav_file(&self) -> Option<&str> {
        self.wav_file.as_deref()
    }

    /// Record the short recording's name for the export layer
    pub fn set_wav_file(&mut self, name: impl Into<String>) {
        self.wav_file = Some(name.into());
    }

    /// Populate every frame's `audio_sample` from the solved affine map
    ///
    /// `audio_sample = round(index * stretch + shift)`. Called exactly once
    /// per synchronization action.
    pub fn set_audio_synch(&mut self, map: &AffineMap) {
        for frame in &mut self.frames {
            frame.audio_sample = Some(map.apply_round(frame.index as f64));
        }
        log::debug!(
            "set_audio_synch: mapped {} frames with stretch={} shift={}",
            self.frames.len(),
            map.stretch,
            map.shift
        );
    }

    /// `(frame_index, audio_sample)` for every synchronized frame
    pub fn audio_samples(&self) -> impl Iterator<Item = (u64, i64)> + '_ {
        self.frames
            .iter()
            .filter_map(|f| f.audio_sample.map(|s| (f.index, s)))
    }

    /// Replace the frame sequence wholesale (trim tool only)
    ///
    /// The replacement is NOT re-checked for index contiguity: trimming
    /// removes leading/trailing frames, so the survivors keep their
    /// original (now offset) indices.
    pub(crate) fn replace_frames(&mut self, frames: Vec<MotionFrame>) {
        self.frames = frames;
    }
}
