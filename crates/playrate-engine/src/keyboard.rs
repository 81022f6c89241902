//! Translates page key events into speed mutations.

use std::sync::Arc;

use playrate_core::keys::{binding_for, FocusSurface, KeyCommand, KeyEvent};
use playrate_core::speed::{DEFAULT_SPEED, SPEED_STEP};

use crate::authority::SpeedAuthority;
use crate::registry::MediaRegistry;

/// What the host should do with an event after the handler has seen it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyDisposition {
    /// A binding matched: suppress the default action and propagation.
    Consumed,
    /// Not ours: let the page handle it normally.
    Passthrough,
}

/// Capture-phase key handler for the speed shortcuts.
///
/// Failures to apply are swallowed: a shortcut pressed with no video present
/// still updates the stored rate and still consumes the event.
pub struct KeyboardHandler {
    authority: Arc<SpeedAuthority>,
    registry: Arc<MediaRegistry>,
}

impl KeyboardHandler {
    pub fn new(authority: Arc<SpeedAuthority>, registry: Arc<MediaRegistry>) -> Self {
        Self {
            authority,
            registry,
        }
    }

    /// Handle one key-down. Events arriving while a text-entry surface holds
    /// focus are passed through untouched so typing keeps working.
    pub fn on_key_down(&self, event: &KeyEvent) -> KeyDisposition {
        if self.registry.focus() == FocusSurface::TextEntry {
            return KeyDisposition::Passthrough;
        }
        let Some(command) = binding_for(event) else {
            return KeyDisposition::Passthrough;
        };

        let outcome = match command {
            KeyCommand::SpeedUp => self.authority.adjust(SPEED_STEP),
            KeyCommand::SlowDown => self.authority.adjust(-SPEED_STEP),
            KeyCommand::ResetSpeed => self.authority.set(DEFAULT_SPEED),
        };
        if let Err(error) = outcome {
            tracing::trace!(%error, ?command, "shortcut had no visible effect");
        }

        KeyDisposition::Consumed
    }
}
