/// User intents produced by key presses, before they are turned into
/// selection events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,

    // Focus
    FocusGuilds,
    FocusChannels,
    FocusMessages,

    // Navigation
    NavigateUp,
    NavigateDown,
    Select,
    /// Number row shortcut; `1`..=`9` then `0` for the tenth entry.
    JumpTo(u8),

    // Message list
    ScrollToBottom,
}

impl Action {
    /// Maps a number key to its 1-based list position.
    #[must_use]
    pub const fn jump_position(digit: u8) -> usize {
        match digit {
            0 => 10,
            n => n as usize,
        }
    }
}
