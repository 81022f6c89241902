//! Single owner of the playback rate for a page context.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use playrate_core::errors::SpeedError;
use playrate_core::speed::{clamp_speed, DEFAULT_SPEED};

use crate::registry::MediaRegistry;

/// Holds the authoritative rate and applies it to the current media target.
///
/// Every mutation clamps and records the new value before touching the page.
/// A failed application (no media present) therefore still moves the state;
/// callers must not read `NoMediaTarget` as "nothing changed".
pub struct SpeedAuthority {
    speed: Mutex<f64>,
    registry: Arc<MediaRegistry>,
}

impl SpeedAuthority {
    pub fn new(registry: Arc<MediaRegistry>) -> Self {
        Self::with_initial(registry, DEFAULT_SPEED)
    }

    /// Start from a persisted rate. The value is clamped on the way in, so a
    /// stale out-of-range record cannot poison the session.
    pub fn with_initial(registry: Arc<MediaRegistry>, initial: f64) -> Self {
        Self {
            speed: Mutex::new(clamp_speed(initial)),
            registry,
        }
    }

    /// Current authoritative rate. Pure read.
    pub fn speed(&self) -> f64 {
        *self.speed.lock()
    }

    /// Clamp and adopt `requested`, then try to apply it to the current
    /// target. Returns the rate the authority settled on.
    pub fn set(&self, requested: f64) -> Result<f64, SpeedError> {
        let clamped = clamp_speed(requested);
        *self.speed.lock() = clamped;
        debug!(rate = clamped, "speed updated");
        match self.registry.resolve_target() {
            Some(target) => {
                target.set_playback_rate(clamped);
                Ok(clamped)
            }
            None => Err(SpeedError::NoMediaTarget),
        }
    }

    /// Relative form of [`set`](Self::set).
    pub fn adjust(&self, delta: f64) -> Result<f64, SpeedError> {
        let current = *self.speed.lock();
        self.set(current + delta)
    }

    /// Push the current rate at the current target without changing it.
    /// Returns the applied rate when a target existed.
    pub fn reapply(&self) -> Option<f64> {
        let current = self.speed();
        let target = self.registry.resolve_target()?;
        target.set_playback_rate(current);
        Some(current)
    }
}
