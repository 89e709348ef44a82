use crate::domain::entities::{Channel, Guild, UserId};

/// Panels that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Panel {
    #[default]
    Guilds,
    Channels,
    Messages,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

/// Everything the panels need to draw, apart from message histories.
///
/// Invariants kept by the controller: the channel index, when set, points
/// at a text entry of `channels`, and `channels` is always the display list
/// of the current guild.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    pub(super) guilds: Vec<Guild>,
    pub(super) guild_index: Option<usize>,
    pub(super) channels: Vec<Channel>,
    pub(super) channel_index: Option<usize>,
    pub(super) channel_cursor: Option<usize>,
    pub(super) focus: Panel,
    pub(super) scroll_back: usize,
    pub(super) scroll_limit: Option<usize>,
    pub(super) current_user: Option<UserId>,
}

impl SelectionState {
    #[must_use]
    pub fn guilds(&self) -> &[Guild] {
        &self.guilds
    }

    #[must_use]
    pub const fn guild_index(&self) -> Option<usize> {
        self.guild_index
    }

    #[must_use]
    pub fn current_guild(&self) -> Option<&Guild> {
        self.guild_index.and_then(|i| self.guilds.get(i))
    }

    /// Display list of the current guild.
    #[must_use]
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    #[must_use]
    pub const fn channel_index(&self) -> Option<usize> {
        self.channel_index
    }

    #[must_use]
    pub fn current_channel(&self) -> Option<&Channel> {
        self.channel_index.and_then(|i| self.channels.get(i))
    }

    /// Highlighted row of the channels panel.
    #[must_use]
    pub const fn channel_cursor(&self) -> Option<usize> {
        self.channel_cursor
    }

    #[must_use]
    pub const fn focus(&self) -> Panel {
        self.focus
    }

    /// Lines scrolled up from the newest message; 0 follows new messages.
    #[must_use]
    pub const fn scroll_back(&self) -> usize {
        self.scroll_back
    }

    #[must_use]
    pub const fn current_user(&self) -> Option<UserId> {
        self.current_user
    }
}
