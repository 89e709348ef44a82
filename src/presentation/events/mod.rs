//! Event handling.

use crossterm::event::{KeyEvent, KeyEventKind};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Nothing changed.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed.
    Consumed,
}

/// Terminal key classification.
pub struct EventHandler;

impl EventHandler {
    /// Some terminals report key releases; only presses and repeats drive
    /// the UI.
    #[must_use]
    pub fn is_actionable(key: &KeyEvent) -> bool {
        matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn make_key_event(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
    }

    #[test]
    fn test_press_and_repeat_are_actionable() {
        assert!(EventHandler::is_actionable(&make_key_event(
            KeyCode::Char('j'),
            KeyEventKind::Press
        )));
        assert!(EventHandler::is_actionable(&make_key_event(
            KeyCode::Down,
            KeyEventKind::Repeat
        )));
    }

    #[test]
    fn test_release_is_ignored() {
        assert!(!EventHandler::is_actionable(&make_key_event(
            KeyCode::Char('j'),
            KeyEventKind::Release
        )));
    }
}
