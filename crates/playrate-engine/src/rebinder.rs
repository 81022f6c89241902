//! Keeps new media elements at the chosen rate.

use std::sync::Arc;

use tokio::sync::watch;

use crate::authority::SpeedAuthority;

/// Watches the registry's revision channel and re-applies the authoritative
/// rate whenever the document's media set changes, so a page swapping its
/// video element does not silently fall back to the platform default.
///
/// Pure push: reads the authority, writes the element, never mutates state.
/// Re-applying an already-applied rate is harmless, which is what makes the
/// watch channel's coalescing of rapid changes acceptable.
pub struct MediaRebinder {
    authority: Arc<SpeedAuthority>,
}

impl MediaRebinder {
    pub fn new(authority: Arc<SpeedAuthority>) -> Self {
        Self { authority }
    }

    /// Start the watcher. Spawns a task that runs until the revision sender
    /// (the registry) goes away.
    pub fn start(&self, mut revisions: watch::Receiver<u64>) -> tokio::task::JoinHandle<()> {
        let authority = Arc::clone(&self.authority);

        tokio::spawn(async move {
            while revisions.changed().await.is_ok() {
                let revision = *revisions.borrow_and_update();
                match authority.reapply() {
                    Some(rate) => {
                        tracing::trace!(revision, rate, "rate re-applied after media change");
                    }
                    None => {
                        tracing::trace!(revision, "media changed but nothing to rebind");
                    }
                }
            }
            tracing::debug!("media revision channel closed");
        })
    }
}

/// Create a rebinder wired to a revision subscription.
pub fn spawn_rebinder(
    authority: Arc<SpeedAuthority>,
    revisions: watch::Receiver<u64>,
) -> tokio::task::JoinHandle<()> {
    MediaRebinder::new(authority).start(revisions)
}
