//! The media-element model: what a video looks like to the speed engine and
//! how the engine picks which one to drive.

use std::sync::Arc;

/// Loading progress of a media element, mirroring the readiness ladder media
/// hosts report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReadyState {
    #[default]
    HaveNothing,
    HaveMetadata,
    HaveCurrentData,
    HaveFutureData,
    HaveEnoughData,
}

impl ReadyState {
    /// True once the element has started loading at all.
    pub fn has_begun_loading(self) -> bool {
        self > ReadyState::HaveNothing
    }
}

/// A video-like element that can receive a playback rate.
///
/// Implementations are host-provided handles. The trait deliberately exposes
/// no lifecycle: elements come and go with the page, and callers re-resolve
/// the target on every application instead of holding one.
pub trait MediaElement: Send + Sync {
    fn ready_state(&self) -> ReadyState;
    fn playback_rate(&self) -> f64;
    fn set_playback_rate(&self, rate: f64);
}

/// Pick the element that should receive the rate: the first one in document
/// order that has begun loading, falling back to the first element outright.
pub fn select_target<I>(elements: I) -> Option<Arc<dyn MediaElement>>
where
    I: IntoIterator<Item = Arc<dyn MediaElement>>,
{
    let mut first = None;
    for element in elements {
        if element.ready_state().has_begun_loading() {
            return Some(element);
        }
        if first.is_none() {
            first = Some(element);
        }
    }
    first
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockVideo;

    fn element(video: MockVideo) -> Arc<dyn MediaElement> {
        Arc::new(video)
    }

    #[test]
    fn ready_state_ladder() {
        assert!(!ReadyState::HaveNothing.has_begun_loading());
        assert!(ReadyState::HaveMetadata.has_begun_loading());
        assert!(ReadyState::HaveEnoughData.has_begun_loading());
        assert!(ReadyState::HaveMetadata < ReadyState::HaveFutureData);
    }

    #[test]
    fn prefers_first_loading_element() {
        let stalled = element(MockVideo::unloaded());
        let loaded = element(MockVideo::ready());
        let picked = select_target([Arc::clone(&stalled), Arc::clone(&loaded)]);
        assert!(Arc::ptr_eq(&picked.unwrap(), &loaded));
    }

    #[test]
    fn keeps_document_order_among_loading_elements() {
        let a = element(MockVideo::ready());
        let b = element(MockVideo::ready());
        let picked = select_target([Arc::clone(&a), Arc::clone(&b)]);
        assert!(Arc::ptr_eq(&picked.unwrap(), &a));
    }

    #[test]
    fn falls_back_to_first_element_when_none_loading() {
        let a = element(MockVideo::unloaded());
        let b = element(MockVideo::unloaded());
        let picked = select_target([Arc::clone(&a), Arc::clone(&b)]);
        assert!(Arc::ptr_eq(&picked.unwrap(), &a));
    }

    #[test]
    fn empty_document_selects_nothing() {
        assert!(select_target(Vec::new()).is_none());
    }
}
