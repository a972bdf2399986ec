use std::fmt;

use crate::{
    foundation::error::AlephResult, foundation::math::Fnv1a64, timeline::director::Timeline,
};

/// Stable content hash of a timeline's steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TimelineFingerprint {
    /// FNV-1a 64 over the canonical JSON encoding.
    pub digest: u64,
    pub steps: usize,
}

impl fmt::Display for TimelineFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.digest)
    }
}

/// Hash the compact JSON encoding of `timeline`, seeded with its step count.
///
/// Equal step lists give equal fingerprints regardless of playback state.
pub fn fingerprint(timeline: &Timeline) -> AlephResult<TimelineFingerprint> {
    let json = serde_json::to_vec(timeline)?;
    let mut h = Fnv1a64::new(timeline.len() as u64);
    h.write_bytes(&json);
    Ok(TimelineFingerprint {
        digest: h.finish(),
        steps: timeline.len(),
    })
}
