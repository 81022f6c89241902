//! The engine's view of the hosting document.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::debug;

use playrate_core::ids::MediaId;
use playrate_core::keys::FocusSurface;
use playrate_core::media::{select_target, MediaElement};

/// Which media elements exist, in document order, and what kind of element
/// holds focus.
///
/// Structural changes (attach, detach, clear) bump a revision counter on a
/// watch channel. Observers only ever need the latest revision, so a burst
/// of changes may coalesce into a single wakeup. Focus changes are not
/// structural and do not bump the counter.
pub struct MediaRegistry {
    elements: RwLock<Vec<(MediaId, Arc<dyn MediaElement>)>>,
    focus: RwLock<FocusSurface>,
    revision: watch::Sender<u64>,
}

impl MediaRegistry {
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            elements: RwLock::new(Vec::new()),
            focus: RwLock::new(FocusSurface::Neutral),
            revision,
        }
    }

    /// Insert an element at the end of document order.
    pub fn attach(&self, element: Arc<dyn MediaElement>) -> MediaId {
        let id = MediaId::new();
        self.elements.write().push((id.clone(), element));
        self.bump();
        debug!(media = %id, "media element attached");
        id
    }

    /// Remove an element. Returns false when the id is already gone.
    pub fn detach(&self, id: &MediaId) -> bool {
        let removed = {
            let mut elements = self.elements.write();
            let before = elements.len();
            elements.retain(|(existing, _)| existing != id);
            elements.len() != before
        };
        if removed {
            self.bump();
            debug!(media = %id, "media element detached");
        }
        removed
    }

    /// Remove every element, as a full page navigation would.
    pub fn clear(&self) {
        let had_any = {
            let mut elements = self.elements.write();
            let had_any = !elements.is_empty();
            elements.clear();
            had_any
        };
        if had_any {
            self.bump();
            debug!("media registry cleared");
        }
    }

    /// Resolve the element that should currently receive the rate: first in
    /// document order that has begun loading, else the first outright.
    pub fn resolve_target(&self) -> Option<Arc<dyn MediaElement>> {
        let elements = self.elements.read();
        select_target(elements.iter().map(|(_, element)| Arc::clone(element)))
    }

    pub fn focus(&self) -> FocusSurface {
        *self.focus.read()
    }

    pub fn set_focus(&self, focus: FocusSurface) {
        *self.focus.write() = focus;
    }

    /// Subscribe to structural-change notifications. The value is a bare
    /// revision counter; only its movement matters.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn len(&self) -> usize {
        self.elements.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.read().is_empty()
    }

    /// Snapshot of (id, element) pairs in document order.
    pub fn snapshot(&self) -> Vec<(MediaId, Arc<dyn MediaElement>)> {
        self.elements.read().clone()
    }

    fn bump(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }
}

impl Default for MediaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playrate_core::mock::MockVideo;

    #[test]
    fn attach_and_detach_track_document_contents() {
        let registry = MediaRegistry::new();
        assert!(registry.is_empty());

        let id = registry.attach(Arc::new(MockVideo::ready()));
        assert_eq!(registry.len(), 1);

        assert!(registry.detach(&id));
        assert!(registry.is_empty());
        assert!(!registry.detach(&id));
    }

    #[test]
    fn structural_changes_bump_the_revision() {
        let registry = MediaRegistry::new();
        let rx = registry.subscribe();
        assert_eq!(*rx.borrow(), 0);

        let id = registry.attach(Arc::new(MockVideo::ready()));
        assert_eq!(*rx.borrow(), 1);

        registry.detach(&id);
        assert_eq!(*rx.borrow(), 2);

        // Already empty: clearing changes nothing and stays quiet.
        registry.clear();
        assert_eq!(*rx.borrow(), 2);

        registry.attach(Arc::new(MockVideo::ready()));
        registry.clear();
        assert_eq!(*rx.borrow(), 4);
    }

    #[test]
    fn focus_changes_do_not_bump_the_revision() {
        let registry = MediaRegistry::new();
        let rx = registry.subscribe();

        registry.set_focus(FocusSurface::TextEntry);
        assert_eq!(registry.focus(), FocusSurface::TextEntry);
        assert_eq!(*rx.borrow(), 0);

        registry.set_focus(FocusSurface::Neutral);
        assert_eq!(registry.focus(), FocusSurface::Neutral);
        assert_eq!(*rx.borrow(), 0);
    }

    #[test]
    fn resolve_target_prefers_loading_elements() {
        let registry = MediaRegistry::new();
        assert!(registry.resolve_target().is_none());

        let stalled: Arc<MockVideo> = Arc::new(MockVideo::unloaded());
        let loaded: Arc<MockVideo> = Arc::new(MockVideo::ready());
        registry.attach(Arc::clone(&stalled) as Arc<dyn MediaElement>);
        registry.attach(Arc::clone(&loaded) as Arc<dyn MediaElement>);

        let picked = registry.resolve_target().unwrap();
        picked.set_playback_rate(3.0);
        assert_eq!(loaded.playback_rate(), 3.0);
        assert_eq!(stalled.playback_rate(), 1.0);
    }

    #[test]
    fn resolve_target_falls_back_to_first_element() {
        let registry = MediaRegistry::new();
        let only: Arc<MockVideo> = Arc::new(MockVideo::unloaded());
        registry.attach(Arc::clone(&only) as Arc<dyn MediaElement>);

        let picked = registry.resolve_target().unwrap();
        picked.set_playback_rate(0.5);
        assert_eq!(only.playback_rate(), 0.5);
    }
}
