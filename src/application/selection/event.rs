use super::state::{Direction, Panel};
use crate::application::services::FetchTicket;
use crate::domain::entities::{ChannelId, Guild, GuildId, Message, UserId};
use crate::domain::errors::ClientError;

/// Inputs to [`super::SelectionController::reduce`].
#[derive(Debug)]
pub enum Event {
    /// Session ready: orders the guilds, records the account and selects
    /// the first guild.
    Ready {
        guilds: Vec<Guild>,
        guild_positions: Option<Vec<GuildId>>,
        current_user: UserId,
    },
    SetGuilds(Vec<Guild>),
    SelectGuild(usize),
    SelectChannel(usize),
    FocusPanel(Panel),
    IncomingMessage(Message),
    FetchCompleted {
        channel_id: ChannelId,
        ticket: FetchTicket,
        result: Result<Vec<Message>, ClientError>,
    },
    GuildUpdated(Guild),
    GuildRemoved(GuildId),
    MoveGuild(Direction),
    MoveChannelCursor(Direction),
    OpenChannelAtCursor,
    /// 1-based guild number as shown in the guilds panel.
    JumpToGuild(usize),
    /// 1-based text channel number as shown in the channels panel.
    JumpToChannel(usize),
    Scroll(Direction),
    ScrollToBottom,
    Resize,
}

/// Side effects requested by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    FetchMessages {
        channel_id: ChannelId,
        ticket: FetchTicket,
    },
    Redraw,
}
