use crate::application::{Direction, Event, Panel};
use crate::domain::keybinding::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut display_bindings = HashMap::new();
        let mut input_bindings = Vec::new();

        let mut register = |action: Action, key: KeyEvent, is_primary: bool| {
            if is_primary {
                display_bindings.insert(action, key);
            }
            input_bindings.push((key, action));
        };

        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
            true,
        );
        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            false,
        );

        register(
            Action::FocusGuilds,
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::FocusChannels,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::FocusMessages,
            KeyEvent::new(KeyCode::Char('m'), KeyModifiers::NONE),
            true,
        );

        register(
            Action::NavigateUp,
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            true,
        );
        register(
            Action::NavigateUp,
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            false,
        );
        register(
            Action::NavigateDown,
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            true,
        );
        register(
            Action::NavigateDown,
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            false,
        );

        register(
            Action::Select,
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            true,
        );
        register(
            Action::Select,
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            false,
        );
        register(
            Action::ScrollToBottom,
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            true,
        );

        for digit in 0..=9_u8 {
            register(
                Action::JumpTo(digit),
                KeyEvent::new(KeyCode::Char(char::from(b'0' + digit)), KeyModifiers::NONE),
                true,
            );
        }

        Self {
            display_bindings,
            input_bindings,
        }
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    pub fn find_action(&self, key: KeyEvent) -> Option<Action> {
        self.input_bindings
            .iter()
            .find(|(k, _)| k.code == key.code && k.modifiers == key.modifiers)
            .map(|(_, a)| *a)
    }

    /// Character of the primary binding for `action`, if it is a plain key.
    pub fn hotkey(&self, action: Action) -> Option<char> {
        match self.get(action)? {
            KeyEvent {
                code: KeyCode::Char(c),
                modifiers: KeyModifiers::NONE,
                ..
            } => Some(c),
            _ => None,
        }
    }
}

/// Translates an action into a selection event for the focused panel.
///
/// Returns `None` for [`Action::Quit`] and for actions the panel ignores.
#[must_use]
pub fn to_event(action: Action, focus: Panel) -> Option<Event> {
    let event = match (action, focus) {
        (Action::Quit, _) => return None,
        (Action::FocusGuilds, _) => Event::FocusPanel(Panel::Guilds),
        (Action::FocusChannels, _) => Event::FocusPanel(Panel::Channels),
        (Action::FocusMessages, _) => Event::FocusPanel(Panel::Messages),

        (Action::NavigateUp, Panel::Guilds) => Event::MoveGuild(Direction::Up),
        (Action::NavigateDown, Panel::Guilds) => Event::MoveGuild(Direction::Down),
        (Action::JumpTo(digit), Panel::Guilds) => {
            Event::JumpToGuild(Action::jump_position(digit))
        }

        (Action::NavigateUp, Panel::Channels) => Event::MoveChannelCursor(Direction::Up),
        (Action::NavigateDown, Panel::Channels) => Event::MoveChannelCursor(Direction::Down),
        (Action::Select, Panel::Channels) => Event::OpenChannelAtCursor,
        (Action::JumpTo(digit), Panel::Channels) => {
            Event::JumpToChannel(Action::jump_position(digit))
        }

        (Action::NavigateUp, Panel::Messages) => Event::Scroll(Direction::Up),
        (Action::NavigateDown, Panel::Messages) => Event::Scroll(Direction::Down),
        (Action::ScrollToBottom, Panel::Messages) => Event::ScrollToBottom,

        _ => return None,
    };
    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test_case(KeyCode::Char('q'), KeyModifiers::CONTROL, Action::Quit)]
    #[test_case(KeyCode::Char('c'), KeyModifiers::CONTROL, Action::Quit)]
    #[test_case(KeyCode::Char('g'), KeyModifiers::NONE, Action::FocusGuilds)]
    #[test_case(KeyCode::Char('c'), KeyModifiers::NONE, Action::FocusChannels)]
    #[test_case(KeyCode::Char('m'), KeyModifiers::NONE, Action::FocusMessages)]
    #[test_case(KeyCode::Char('k'), KeyModifiers::NONE, Action::NavigateUp)]
    #[test_case(KeyCode::Down, KeyModifiers::NONE, Action::NavigateDown)]
    #[test_case(KeyCode::Char(' '), KeyModifiers::NONE, Action::Select)]
    #[test_case(KeyCode::Esc, KeyModifiers::NONE, Action::ScrollToBottom)]
    #[test_case(KeyCode::Char('0'), KeyModifiers::NONE, Action::JumpTo(0))]
    #[test_case(KeyCode::Char('7'), KeyModifiers::NONE, Action::JumpTo(7))]
    fn test_find_action(code: KeyCode, modifiers: KeyModifiers, expected: Action) {
        let registry = CommandRegistry::new();
        assert_eq!(registry.find_action(key(code, modifiers)), Some(expected));
    }

    #[test]
    fn test_unbound_keys() {
        let registry = CommandRegistry::new();

        assert_eq!(registry.find_action(key(KeyCode::Char('x'), KeyModifiers::NONE)), None);
        assert_eq!(registry.find_action(key(KeyCode::Char('g'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn test_hotkeys() {
        let registry = CommandRegistry::new();

        assert_eq!(registry.hotkey(Action::FocusGuilds), Some('g'));
        assert_eq!(registry.hotkey(Action::FocusMessages), Some('m'));
        assert_eq!(registry.hotkey(Action::Quit), None);
    }

    #[test]
    fn test_navigation_depends_on_focus() {
        assert!(matches!(
            to_event(Action::NavigateDown, Panel::Guilds),
            Some(Event::MoveGuild(Direction::Down))
        ));
        assert!(matches!(
            to_event(Action::NavigateDown, Panel::Channels),
            Some(Event::MoveChannelCursor(Direction::Down))
        ));
        assert!(matches!(
            to_event(Action::NavigateUp, Panel::Messages),
            Some(Event::Scroll(Direction::Up))
        ));
    }

    #[test]
    fn test_number_keys() {
        assert!(matches!(
            to_event(Action::JumpTo(3), Panel::Guilds),
            Some(Event::JumpToGuild(3))
        ));
        assert!(matches!(
            to_event(Action::JumpTo(0), Panel::Channels),
            Some(Event::JumpToChannel(10))
        ));
        assert!(to_event(Action::JumpTo(1), Panel::Messages).is_none());
    }

    #[test]
    fn test_panel_specific_actions() {
        assert!(matches!(
            to_event(Action::Select, Panel::Channels),
            Some(Event::OpenChannelAtCursor)
        ));
        assert!(to_event(Action::Select, Panel::Guilds).is_none());
        assert!(matches!(
            to_event(Action::ScrollToBottom, Panel::Messages),
            Some(Event::ScrollToBottom)
        ));
        assert!(to_event(Action::ScrollToBottom, Panel::Channels).is_none());
        assert!(to_event(Action::Quit, Panel::Messages).is_none());
    }

    #[test]
    fn test_focus_is_global() {
        for panel in [Panel::Guilds, Panel::Channels, Panel::Messages] {
            assert!(matches!(
                to_event(Action::FocusChannels, panel),
                Some(Event::FocusPanel(Panel::Channels))
            ));
        }
    }
}
