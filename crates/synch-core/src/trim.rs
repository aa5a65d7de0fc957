//! Offline synch-and-trim tool
//!
//! Given a long studio recording, a short excerpt of it, two anchors picked
//! against the long recording and the mocap frame set, this module locates
//! the excerpt inside the long recording, bakes the affine map into every
//! frame and trims the frame set to the excerpt's sample range, re-based so
//! that the retained timeline starts at sample 0.

use rayon::prelude::*;

use crate::anchor::AffineMap;
use crate::error::{SynchError, SynchResult};
use crate::mocap::FrameSet;

/// Outcome summary of a completed trim, for the caller and the export layer
#[derive(Debug, Clone, PartialEq)]
pub struct TrimReport {
    /// Start of the excerpt inside the long recording (inclusive)
    pub beg: usize,
    /// End of the excerpt inside the long recording (exclusive slice bound)
    pub end: usize,
    pub stretch: f64,
    pub shift: f64,
    pub kept_frames: usize,
    pub removed_frames: usize,
}

/// Locate `short` as an exact contiguous slice of `long`
///
/// Equality is bit-pattern equality (`f64::to_bits`), never approximate: a
/// re-encoded or resampled excerpt must be rejected, because anything short
/// of a literal slice breaks sample-accurate alignment. Returns the
/// half-open `(beg, end)` of the leftmost match.
pub fn find_subsequence(short: &[f64], long: &[f64]) -> SynchResult<(usize, usize)> {
    let not_found = SynchError::SubsequenceNotFound {
        short_len: short.len(),
        long_len: long.len(),
    };
    if short.is_empty() || short.len() > long.len() {
        return Err(not_found);
    }
    let short_bits: Vec<u64> = short.iter().map(|v| v.to_bits()).collect();
    let long_bits: Vec<u64> = long.iter().map(|v| v.to_bits()).collect();

    // find_first keeps the leftmost-match guarantee under the parallel scan
    let beg = (0..long_bits.len() - short_bits.len() + 1)
        .into_par_iter()
        .find_first(|&i| long_bits[i..i + short_bits.len()] == short_bits[..])
        .ok_or(not_found)?;
    Ok((beg, beg + short.len()))
}

/// Synchronize the frame set against the long recording, then trim it to
/// the short recording's range
///
/// `anchors` is `[origin1, dest1, origin2, dest2]` with destinations in
/// long-recording sample space. Steps:
///
/// 1. locate the short recording inside the long one as `[beg, end)`,
/// 2. solve `(stretch, shift)` and set every frame's `audio_sample`,
/// 3. drop frames with `audio_sample > end`; of the frames at or before
///    `beg`, keep only the latest one and clamp it to `beg`,
/// 4. re-base every retained `audio_sample` by subtracting `beg`.
///
/// A frame landing exactly on `end` is retained (it re-bases to
/// `end - beg`, the excerpt's exclusive length bound). All validation runs
/// before the first mutation: on error the frame set is untouched.
pub fn synch_and_trim(
    short: &[f64],
    long: &[f64],
    anchors: [f64; 4],
    frames: &mut FrameSet,
) -> SynchResult<TrimReport> {
    let (beg, end) = find_subsequence(short, long)?;
    let [origin1, dest1, origin2, dest2] = anchors;
    let map = AffineMap::from_anchors(origin1, dest1, origin2, dest2)?;

    let total = frames.len();
    let mapped: Vec<i64> = frames
        .frames()
        .iter()
        .map(|f| map.apply_round(f.index as f64))
        .collect();

    // the latest frame at or before beg survives as the new sample-0 frame
    let boundary = mapped
        .iter()
        .enumerate()
        .filter(|&(_, &s)| s <= beg as i64)
        .max_by_key(|&(_, &s)| s)
        .map(|(i, _)| i);
    if boundary.is_none() {
        log::warn!(
            "synch_and_trim: no frame maps at or before sample {}, trimmed timeline will not start at 0",
            beg
        );
    }

    let mut kept = Vec::with_capacity(total);
    for (i, frame) in frames.frames().iter().enumerate() {
        let sample = mapped[i];
        if sample > end as i64 {
            continue;
        }
        if sample <= beg as i64 && boundary != Some(i) {
            continue;
        }
        let mut frame = frame.clone();
        let clamped = if boundary == Some(i) { beg as i64 } else { sample };
        frame.audio_sample = Some(clamped - beg as i64);
        kept.push(frame);
    }

    let report = TrimReport {
        beg,
        end,
        stretch: map.stretch,
        shift: map.shift,
        kept_frames: kept.len(),
        removed_frames: total - kept.len(),
    };
    frames.replace_frames(kept);
    log::info!(
        "synch_and_trim: excerpt at [{}, {}), kept {} of {} frames (stretch={}, shift={})",
        report.beg,
        report.end,
        report.kept_frames,
        total,
        report.stretch,
        report.shift
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocap::MotionFrame;

    fn ramp(len: usize, offset: f64) -> Vec<f64> {
        (0..len).map(|i| offset + i as f64 * 0.125).collect()
    }

    fn frame_set(n: u64) -> FrameSet {
        FrameSet::new((0..n).map(|i| MotionFrame::new(i, i as i64)).collect()).unwrap()
    }

    #[test]
    fn test_find_subsequence() {
        let long = ramp(10_000, 0.0);
        let short = long[2_500..7_500].to_vec();
        assert_eq!(find_subsequence(&short, &long).unwrap(), (2_500, 7_500));
    }

    #[test]
    fn test_find_subsequence_leftmost() {
        let long = vec![0.0, 1.0, 0.0, 1.0, 0.0];
        assert_eq!(find_subsequence(&[0.0, 1.0], &long).unwrap(), (0, 2));
    }

    #[test]
    fn test_find_subsequence_bit_exact() {
        // a value differing in the last bit must not match
        let long = vec![1.0, 2.0, 3.0, 4.0];
        let short = vec![2.0, f64::from_bits(3.0f64.to_bits() + 1)];
        assert!(find_subsequence(&short, &long).is_err());
    }

    #[test]
    fn test_find_subsequence_not_found() {
        let long = ramp(100, 0.0);
        let err = find_subsequence(&ramp(10, 500.0), &long).unwrap_err();
        assert_eq!(
            err,
            SynchError::SubsequenceNotFound {
                short_len: 10,
                long_len: 100,
            }
        );
        assert!(find_subsequence(&ramp(200, 0.0), &long).is_err());
        assert!(find_subsequence(&[], &long).is_err());
    }

    #[test]
    fn test_trim_round_trip() {
        let long = ramp(100_000, 0.0);
        let beg = 20_000;
        let end = 60_000;
        let short = long[beg..end].to_vec();
        // stretch 100, shift -10_000: frames map to -10_000 .. 89_900,
        // spanning well before beg and after end
        let mut frames = frame_set(1000);
        let report =
            synch_and_trim(&short, &long, [0.0, -10_000.0, 1000.0, 90_000.0], &mut frames).unwrap();

        assert_eq!((report.beg, report.end), (beg, end));
        assert_eq!(report.stretch, 100.0);
        assert_eq!(report.shift, -10_000.0);
        assert_eq!(report.kept_frames + report.removed_frames, 1000);
        assert_eq!(frames.len(), report.kept_frames);

        let samples: Vec<i64> = frames.frames().iter().map(|f| f.audio_sample.unwrap()).collect();
        assert!(samples.iter().all(|&s| s >= 0));
        assert!(samples.iter().all(|&s| s <= (end - beg) as i64));
        assert_eq!(samples.iter().filter(|&&s| s == 0).count(), 1);
        // survivors stay in frame order
        assert!(samples.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_trim_boundary_frame_at_end_is_kept() {
        let long = ramp(2_000, 0.0);
        let beg = 100;
        let end = 1_100;
        let short = long[beg..end].to_vec();
        // frame 11 maps exactly to end (= 1_100), frame 12 beyond it
        let mut frames = frame_set(20);
        synch_and_trim(&short, &long, [0.0, 0.0, 1.0, 100.0], &mut frames).unwrap();

        let samples: Vec<i64> = frames.frames().iter().map(|f| f.audio_sample.unwrap()).collect();
        assert_eq!(*samples.last().unwrap(), (end - beg) as i64);
        assert!(frames.frames().iter().all(|f| f.index <= 11));
    }

    #[test]
    fn test_trim_untouched_on_error() {
        let long = ramp(1_000, 0.0);
        let short = ramp(10, 9_999.0); // not a slice of long
        let mut frames = frame_set(50);
        let before = frames.clone();
        assert!(synch_and_trim(&short, &long, [0.0, 0.0, 1.0, 100.0], &mut frames).is_err());
        assert_eq!(frames, before);

        // degenerate anchors abort after the (successful) search, frames intact
        let short_ok = long[100..200].to_vec();
        assert!(synch_and_trim(&short_ok, &long, [5.0, 0.0, 5.0, 100.0], &mut frames).is_err());
        assert_eq!(frames, before);
    }

    #[test]
    fn test_trim_scenario_stretch_two() {
        let long = ramp(5_000, 0.0);
        let short = long[0..4_000].to_vec();
        let mut frames = frame_set(600);
        let report = synch_and_trim(&short, &long, [0.0, 0.0, 1000.0, 2000.0], &mut frames).unwrap();
        assert_eq!(report.stretch, 2.0);
        assert_eq!(report.shift, 0.0);
        assert_eq!(frames.frames()[500].audio_sample, Some(1000));
    }
}
