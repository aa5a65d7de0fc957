//! Anchor-capture session
//!
//! Workflow state behind the numeric-entry fields and the "synchronize"
//! action of the editor. The capture widgets themselves are external; they
//! call the setters here, and the action trigger calls `apply` with the
//! frame set as an explicit argument. No live pointers to figures or
//! widgets are held anywhere.

use synch_core::{AffineMap, FrameSet};

use crate::error::{ViewError, ViewResult};

/// The four anchor entries of one synchronization action
///
/// `origin` values are mocap frame indices, `dest` values audio samples.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SynchSession {
    origin1: Option<f64>,
    dest1: Option<f64>,
    origin2: Option<f64>,
    dest2: Option<f64>,
}

impl SynchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_origin1(&mut self, value: f64) {
        self.origin1 = Some(value);
    }

    pub fn set_dest1(&mut self, value: f64) {
        self.dest1 = Some(value);
    }

    pub fn set_origin2(&mut self, value: f64) {
        self.origin2 = Some(value);
    }

    pub fn set_dest2(&mut self, value: f64) {
        self.dest2 = Some(value);
    }

    /// All four entries present?
    pub fn is_complete(&self) -> bool {
        self.origin1.is_some()
            && self.dest1.is_some()
            && self.origin2.is_some()
            && self.dest2.is_some()
    }

    /// Clear all entries for the next action
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Solve the affine map from the captured anchors
    ///
    /// Fails if an entry is missing or the anchors are degenerate. Anchor
    /// ordering is not enforced here (caller policy).
    pub fn solve(&self) -> ViewResult<AffineMap> {
        let origin1 = self.origin1.ok_or(ViewError::IncompleteAnchors { missing: "origin1" })?;
        let dest1 = self.dest1.ok_or(ViewError::IncompleteAnchors { missing: "dest1" })?;
        let origin2 = self.origin2.ok_or(ViewError::IncompleteAnchors { missing: "origin2" })?;
        let dest2 = self.dest2.ok_or(ViewError::IncompleteAnchors { missing: "dest2" })?;
        AffineMap::from_anchors(origin1, dest1, origin2, dest2).map_err(ViewError::from)
    }

    /// Solve and bake the map into the frame set's `audio_sample` column
    ///
    /// On any error the frame set is untouched.
    pub fn apply(&self, frames: &mut FrameSet) -> ViewResult<AffineMap> {
        let map = self.solve()?;
        frames.set_audio_synch(&map);
        log::info!(
            "SynchSession: applied stretch={} shift={} to {} frames",
            map.stretch,
            map.shift,
            frames.len()
        );
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synch_core::{MotionFrame, SynchError};

    fn frames(n: u64) -> FrameSet {
        FrameSet::new((0..n).map(|i| MotionFrame::new(i, 0)).collect()).unwrap()
    }

    #[test]
    fn test_incomplete_anchors() {
        let mut session = SynchSession::new();
        session.set_origin1(0.0);
        session.set_dest1(0.0);
        session.set_origin2(1000.0);
        assert!(!session.is_complete());
        assert_eq!(
            session.solve().unwrap_err(),
            ViewError::IncompleteAnchors { missing: "dest2" }
        );
    }

    #[test]
    fn test_apply_populates_frames() {
        let mut session = SynchSession::new();
        session.set_origin1(0.0);
        session.set_dest1(0.0);
        session.set_origin2(1000.0);
        session.set_dest2(2000.0);
        assert!(session.is_complete());

        let mut set = frames(600);
        let map = session.apply(&mut set).unwrap();
        assert_eq!(map.stretch, 2.0);
        assert_eq!(map.shift, 0.0);
        assert_eq!(set.frames()[500].audio_sample, Some(1000));
    }

    #[test]
    fn test_degenerate_anchors_leave_frames_untouched() {
        let mut session = SynchSession::new();
        session.set_origin1(5.0);
        session.set_dest1(0.0);
        session.set_origin2(5.0);
        session.set_dest2(100.0);

        let mut set = frames(10);
        let err = session.apply(&mut set).unwrap_err();
        assert_eq!(err, ViewError::Core(SynchError::DegenerateAnchors { origin: 5.0 }));
        assert!(set.frames().iter().all(|f| f.audio_sample.is_none()));
    }

    #[test]
    fn test_reset() {
        let mut session = SynchSession::new();
        session.set_origin1(1.0);
        session.reset();
        assert_eq!(session, SynchSession::new());
    }
}
