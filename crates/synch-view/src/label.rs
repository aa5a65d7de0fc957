//! Axis label formatters
//!
//! Each panel formats its x tick values independently, which is what makes
//! the event-level tie workable: two panels can display the identical
//! numeric range as raw indices, timestamps or synched-frame lookups.

use std::sync::Arc;

use synch_core::{FrameSet, SynchError, SynchResult, Timestamp};

/// Per-panel x tick formatter
#[derive(Debug, Clone)]
pub enum LabelFormatter {
    /// Raw sample index
    Identity,
    /// Sample index rendered as a timestamp at a fixed samplerate
    Timestamp { samplerate: f64, num_decimals: usize },
    /// Frame index looked up in the synchronized frame table and rendered
    /// as a timestamp of the corresponding audio sample. Frames without an
    /// `audio_sample` fall back to the raw index.
    SyncedLookup {
        audio_samplerate: f64,
        num_decimals: usize,
        audio_samples: Arc<Vec<Option<i64>>>,
    },
    /// Value scaled by a constant ratio, for labelling one domain in
    /// another's units without resampling anything
    Proportional { ratio: f64, num_decimals: usize },
}

impl LabelFormatter {
    /// Timestamp formatter; samplerate must be positive
    pub fn timestamp(samplerate: f64, num_decimals: usize) -> SynchResult<Self> {
        if !(samplerate > 0.0) {
            return Err(SynchError::InvalidSampleRate { samplerate });
        }
        Ok(Self::Timestamp {
            samplerate,
            num_decimals,
        })
    }

    /// Synced-lookup formatter over a frame set's current audio samples
    ///
    /// The lookup table is snapshotted here; rebuild the formatter after a
    /// new synchronization action.
    pub fn synced_lookup(
        audio_samplerate: f64,
        num_decimals: usize,
        frames: &FrameSet,
    ) -> SynchResult<Self> {
        if !(audio_samplerate > 0.0) {
            return Err(SynchError::InvalidSampleRate {
                samplerate: audio_samplerate,
            });
        }
        let audio_samples = frames.frames().iter().map(|f| f.audio_sample).collect();
        Ok(Self::SyncedLookup {
            audio_samplerate,
            num_decimals,
            audio_samples: Arc::new(audio_samples),
        })
    }

    /// Format one x tick value
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Identity => index_label(value),
            Self::Timestamp {
                samplerate,
                num_decimals,
            } => timestamp_label(value, *samplerate, *num_decimals),
            Self::SyncedLookup {
                audio_samplerate,
                num_decimals,
                audio_samples,
            } => {
                let idx = value.round();
                let sample = if idx >= 0.0 && (idx as usize) < audio_samples.len() {
                    audio_samples[idx as usize]
                } else {
                    None
                };
                match sample {
                    Some(s) => timestamp_label(s as f64, *audio_samplerate, *num_decimals),
                    None => index_label(value),
                }
            }
            Self::Proportional { ratio, num_decimals } => {
                format!("{:.prec$}", value * ratio, prec = *num_decimals)
            }
        }
    }
}

/// Raw index label: integral values lose the fraction
fn index_label(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value}")
    }
}

/// Timestamp label with the seconds fraction cut to `num_decimals` digits
fn timestamp_label(sample_nr: f64, samplerate: f64, num_decimals: usize) -> String {
    let full = match Timestamp::new(sample_nr, samplerate) {
        Ok(ts) => ts.to_string(),
        // samplerate was validated positive at construction
        Err(_) => return index_label(sample_nr),
    };
    match full.rfind('.') {
        Some(dot) if num_decimals == 0 => full[..dot].to_string(),
        Some(dot) => {
            let keep = (dot + 1 + num_decimals).min(full.len());
            full[..keep].to_string()
        }
        None => full,
    }
}
