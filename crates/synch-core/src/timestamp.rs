//! Sample-number to timestamp decomposition
//!
//! Converts a sample number at a given samplerate into a
//! days/hours/minutes/seconds/microseconds breakdown for axis labels.
//! Negative sample numbers (possible left of an anchor before trimming)
//! decompose symmetrically around zero: the breakdown of `-v` is the
//! breakdown of `v` with every field's sign flipped.

use std::fmt;

use crate::error::{SynchError, SynchResult};

const MICROS_PER_SEC: i64 = 1_000_000;
const MICROS_PER_MIN: i64 = 60 * MICROS_PER_SEC;
const MICROS_PER_HOUR: i64 = 60 * MICROS_PER_MIN;
const MICROS_PER_DAY: i64 = 24 * MICROS_PER_HOUR;

/// A sample number decomposed into calendar-time fields
///
/// All five fields carry the sign of the sample number, so the breakdown
/// re-sums to `total_seconds()` for either sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timestamp {
    sample_nr: f64,
    samplerate: f64,
    total_seconds: f64,
    days: i64,
    hours: i64,
    mins: i64,
    secs: i64,
    microsecs: i64,
}

impl Timestamp {
    /// Decompose `sample_nr / samplerate` seconds; samplerate must be positive
    pub fn new(sample_nr: f64, samplerate: f64) -> SynchResult<Self> {
        if !(samplerate > 0.0) {
            return Err(SynchError::InvalidSampleRate { samplerate });
        }
        let total_seconds = sample_nr / samplerate;
        // decompose the absolute value, then flip signs as one unit
        let total_micros = (total_seconds.abs() * 1e6).round() as i64;
        let days = total_micros / MICROS_PER_DAY;
        let hours = (total_micros % MICROS_PER_DAY) / MICROS_PER_HOUR;
        let mins = (total_micros % MICROS_PER_HOUR) / MICROS_PER_MIN;
        let secs = (total_micros % MICROS_PER_MIN) / MICROS_PER_SEC;
        let microsecs = total_micros % MICROS_PER_SEC;
        let sign = if sample_nr < 0.0 { -1 } else { 1 };
        Ok(Self {
            sample_nr,
            samplerate,
            total_seconds,
            days: sign * days,
            hours: sign * hours,
            mins: sign * mins,
            secs: sign * secs,
            microsecs: sign * microsecs,
        })
    }

    pub fn sample_nr(&self) -> f64 {
        self.sample_nr
    }

    pub fn samplerate(&self) -> f64 {
        self.samplerate
    }

    /// The raw quotient `sample_nr / samplerate`
    pub fn total_seconds(&self) -> f64 {
        self.total_seconds
    }

    /// `(days, hours, mins, secs, microsecs)`, all signed
    pub fn as_tuple(&self) -> (i64, i64, i64, i64, i64) {
        (self.days, self.hours, self.mins, self.secs, self.microsecs)
    }
}

impl fmt::Display for Timestamp {
    /// Renders `[Dd ]H:MM:SS.ffffff`, with a single leading `-` if negative
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sample_nr < 0.0 {
            write!(f, "-")?;
        }
        if self.days != 0 {
            write!(f, "{}d ", self.days.abs())?;
        }
        write!(
            f,
            "{}:{:02}:{:02}.{:06}",
            self.hours.abs(),
            self.mins.abs(),
            self.secs.abs(),
            self.microsecs.abs()
        )
    }
}
