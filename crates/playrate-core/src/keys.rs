//! Key events and the shortcut bindings that drive the speed engine.

/// One key-down as the host page reports it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyEvent {
    /// Physical-key code, e.g. `NumpadAdd`.
    pub code: String,
    /// Printable value after modifiers, e.g. `+`.
    pub key: String,
    pub shift: bool,
}

impl KeyEvent {
    /// Event identified by its physical-key code.
    pub fn physical(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    /// Event identified by its printable value.
    pub fn printable(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

/// What kind of element currently holds focus. Shortcuts are suppressed
/// entirely while a text-entry surface (editable field or content-editable
/// node) is focused so typing never fights playback control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusSurface {
    #[default]
    Neutral,
    TextEntry,
}

/// The three speed shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    SpeedUp,
    SlowDown,
    ResetSpeed,
}

/// Match an event against the bindings: numeric-pad plus/minus/star by
/// physical code, `+`/`-`/`*` by printable value, and shift-`=` as a plus.
pub fn binding_for(event: &KeyEvent) -> Option<KeyCommand> {
    if event.code == "NumpadAdd" || event.key == "+" || (event.key == "=" && event.shift) {
        Some(KeyCommand::SpeedUp)
    } else if event.code == "NumpadSubtract" || event.key == "-" {
        Some(KeyCommand::SlowDown)
    } else if event.code == "NumpadMultiply" || event.key == "*" {
        Some(KeyCommand::ResetSpeed)
    } else {
        None
    }
}
