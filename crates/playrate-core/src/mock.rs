//! In-memory media element for tests and the demo driver.

use std::sync::atomic::{AtomicU64, AtomicU8, AtomicUsize, Ordering};

use crate::media::{MediaElement, ReadyState};

/// A fake video that records every rate applied to it.
///
/// Rate is stored as raw `f64` bits so the element stays lock-free; the
/// application counter lets tests observe rebind traffic directly.
pub struct MockVideo {
    ready: AtomicU8,
    rate_bits: AtomicU64,
    applications: AtomicUsize,
}

impl MockVideo {
    /// Element that has begun loading (the common case).
    pub fn ready() -> Self {
        Self::with_ready_state(ReadyState::HaveCurrentData)
    }

    /// Element that has not started loading yet.
    pub fn unloaded() -> Self {
        Self::with_ready_state(ReadyState::HaveNothing)
    }

    pub fn with_ready_state(state: ReadyState) -> Self {
        Self {
            ready: AtomicU8::new(state as u8),
            rate_bits: AtomicU64::new(1.0f64.to_bits()),
            applications: AtomicUsize::new(0),
        }
    }

    pub fn set_ready_state(&self, state: ReadyState) {
        self.ready.store(state as u8, Ordering::Relaxed);
    }

    /// How many times a rate has been applied to this element.
    pub fn applications(&self) -> usize {
        self.applications.load(Ordering::Relaxed)
    }
}

impl MediaElement for MockVideo {
    fn ready_state(&self) -> ReadyState {
        match self.ready.load(Ordering::Relaxed) {
            0 => ReadyState::HaveNothing,
            1 => ReadyState::HaveMetadata,
            2 => ReadyState::HaveCurrentData,
            3 => ReadyState::HaveFutureData,
            _ => ReadyState::HaveEnoughData,
        }
    }

    fn playback_rate(&self) -> f64 {
        f64::from_bits(self.rate_bits.load(Ordering::Relaxed))
    }

    fn set_playback_rate(&self, rate: f64) {
        self.rate_bits.store(rate.to_bits(), Ordering::Relaxed);
        self.applications.fetch_add(1, Ordering::Relaxed);
    }
}
