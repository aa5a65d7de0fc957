//! Anchor-based affine solver
//!
//! Two corresponding point pairs between two sample-index spaces fully
//! determine the affine map `dest = stretch * origin + shift` between them.
//! This is how a mocap frame index is mapped to its audio sample: the
//! operator picks two anchors, the solver does the rest.

use crate::error::{SynchError, SynchResult};

/// One-dimensional affine map between two sample-index spaces
///
/// Immutable once solved. Anchor pairs may be given in either order; the
/// solver does not require monotonic anchors (callers that want a strictly
/// increasing map enforce `origin1 < origin2 && dest1 < dest2` themselves).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMap {
    pub stretch: f64,
    pub shift: f64,
}

impl AffineMap {
    /// Solve the map from two `(origin, dest)` anchor pairs
    ///
    /// Fails with `DegenerateAnchors` when both origins coincide, since no
    /// unique stretch exists then.
    pub fn from_anchors(origin1: f64, dest1: f64, origin2: f64, dest2: f64) -> SynchResult<Self> {
        if origin1 == origin2 {
            return Err(SynchError::DegenerateAnchors { origin: origin1 });
        }
        let stretch = (dest1 - dest2) / (origin1 - origin2);
        let shift = dest1 - stretch * origin1;
        Ok(Self { stretch, shift })
    }

    /// Map an origin-space value into destination space
    pub fn apply(&self, origin: f64) -> f64 {
        self.stretch * origin + self.shift
    }

    /// Map and round to the nearest destination sample index
    pub fn apply_round(&self, origin: f64) -> i64 {
        self.apply(origin).round() as i64
    }
}
