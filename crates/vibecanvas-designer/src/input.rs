//! Keyboard shortcut mapping and dispatch.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s, depending on the
//! canvas interaction mode, and applies them to a [`DesignerState`]. All
//! window-level canvas bindings live here.

use crate::canvas::InteractionMode;
use crate::designer_state::DesignerState;

/// A key press. `key` is the `KeyboardEvent.key` value (e.g. `"z"`, `"Delete"`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyEvent {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn ctrl(key: impl Into<String>) -> Self {
        Self {
            ctrl: true,
            ..Self::new(key)
        }
    }

    pub fn ctrl_shift(key: impl Into<String>) -> Self {
        Self {
            ctrl: true,
            shift: true,
            ..Self::new(key)
        }
    }
}

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    // ── Edit ──
    Undo,
    Redo,
    Delete,
    Paste,

    // ── Structure ──
    Group,
    Ungroup,

    // ── Z-order ──
    SendBackward,
    BringForward,
    SendToBack,
    BringToFront,

    // ── Inline text editor ──
    CommitText,
    CancelText,
}

/// Resolves key events into shortcut actions.
///
/// `meta` (⌘) and `ctrl` are interchangeable.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action for the given mode.
    ///
    /// Returns `None` if the key combo has no binding in that mode.
    pub fn resolve(mode: InteractionMode, event: &KeyEvent) -> Option<ShortcutAction> {
        match mode {
            InteractionMode::Idle => Self::resolve_idle(event),
            InteractionMode::EditingText => match event.key.as_str() {
                "Enter" if !event.shift => Some(ShortcutAction::CommitText),
                "Escape" => Some(ShortcutAction::CancelText),
                _ => None,
            },
            InteractionMode::Drawing => None,
        }
    }

    fn resolve_idle(event: &KeyEvent) -> Option<ShortcutAction> {
        let cmd = event.ctrl || event.meta;
        let key = event.key.as_str();

        // ── Modifier combos first (most specific) ──
        if cmd && event.shift {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Redo),
                "[" | "{" => Some(ShortcutAction::SendToBack),
                "]" | "}" => Some(ShortcutAction::BringToFront),
                "g" | "G" => Some(ShortcutAction::Ungroup),
                _ => None,
            };
        }

        if cmd {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Undo),
                "y" | "Y" => Some(ShortcutAction::Redo),
                "v" | "V" => Some(ShortcutAction::Paste),
                "[" => Some(ShortcutAction::SendBackward),
                "]" => Some(ShortcutAction::BringForward),
                "g" | "G" => Some(ShortcutAction::Group),
                _ => None,
            };
        }

        match key {
            "Delete" | "Backspace" => Some(ShortcutAction::Delete),
            _ => None,
        }
    }
}

/// Result of dispatching a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    /// The key was bound; the caller should suppress the default action.
    Handled,
    /// No binding; let the key through (e.g. typing in the text editor).
    Unhandled,
    /// Ctrl+V. The caller reads the clipboard through its bridge and calls
    /// [`DesignerState::paste_from_clipboard`].
    PasteRequested,
}

impl DesignerState {
    /// Dispatches a key press against the current interaction mode.
    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyResponse {
        let Some(action) = ShortcutMap::resolve(self.canvas.mode(), event) else {
            return KeyResponse::Unhandled;
        };
        tracing::debug!("Shortcut {:?}", action);

        match action {
            ShortcutAction::Undo => {
                self.undo();
            }
            ShortcutAction::Redo => {
                self.redo();
            }
            ShortcutAction::Delete => {
                self.delete_selected();
            }
            ShortcutAction::Paste => return KeyResponse::PasteRequested,
            ShortcutAction::Group => {
                self.group_selected();
            }
            ShortcutAction::Ungroup => {
                self.ungroup_selected();
            }
            ShortcutAction::SendBackward => {
                self.send_backward();
            }
            ShortcutAction::BringForward => {
                self.bring_forward();
            }
            ShortcutAction::SendToBack => {
                self.send_to_back();
            }
            ShortcutAction::BringToFront => {
                self.bring_to_front();
            }
            ShortcutAction::CommitText => {
                self.commit_text();
            }
            ShortcutAction::CancelText => self.cancel_text(),
        }
        KeyResponse::Handled
    }
}
