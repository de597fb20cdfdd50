//! Stamps for discarding stale enrichment results.
//!
//! There is no cancellation: when the user moves on while an embed fetch is
//! still in flight, the fetch completes anyway. The caller stamps each
//! request and drops any completion whose stamp is no longer current.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one request issued by a [`RequestSequencer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestStamp(u64);

#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new stamp, superseding every earlier one.
    pub fn stamp(&self) -> RequestStamp {
        RequestStamp(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether `stamp` is the most recently issued one.
    pub fn is_current(&self, stamp: RequestStamp) -> bool {
        self.latest.load(Ordering::Acquire) == stamp.0
    }
}
