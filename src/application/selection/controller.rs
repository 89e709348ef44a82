use tracing::{debug, info};

use super::event::{Command, Event};
use super::state::{Direction, Panel, SelectionState};
use crate::application::services::FetchTicket;
use crate::application::services::channel_tree::{self, build_display_list};
use crate::application::services::guild_order::order_guilds;
use crate::application::services::message_cache::{CacheEntry, EnsureOutcome, MessageCache};
use crate::application::services::rendering::MessageBody;
use crate::domain::entities::{Channel, ChannelId, Guild, GuildId, Message};

/// Commands collected while handling one event. However many cascade steps
/// ask for a redraw, only one is emitted.
#[derive(Debug, Default)]
struct Effects {
    commands: Vec<Command>,
    redraw: bool,
}

impl Effects {
    fn redraw(&mut self) {
        self.redraw = true;
    }

    fn fetch(&mut self, channel_id: ChannelId, ticket: FetchTicket) {
        self.commands.push(Command::FetchMessages { channel_id, ticket });
    }

    fn into_commands(mut self) -> Vec<Command> {
        if self.redraw {
            self.commands.push(Command::Redraw);
        }
        self.commands
    }
}

/// Owns the selection state and the message cache, and is the only place
/// either of them changes.
#[derive(Debug, Default)]
pub struct SelectionController {
    state: SelectionState,
    cache: MessageCache,
}

impl SelectionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    #[must_use]
    pub const fn cache(&self) -> &MessageCache {
        &self.cache
    }

    /// What the messages panel shows for the current selection.
    #[must_use]
    pub fn message_body(&self) -> MessageBody<'_> {
        let Some(channel) = self.state.current_channel() else {
            return MessageBody::NoChannel;
        };
        match self.cache.get(channel.id()) {
            CacheEntry::Unfetched | CacheEntry::InFlight(_) => MessageBody::Loading,
            CacheEntry::Forbidden => MessageBody::Forbidden,
            CacheEntry::Loaded(messages) => MessageBody::Messages(messages),
        }
    }

    /// Records how far the current history can be scrolled back, as measured
    /// by the last draw.
    pub fn set_scroll_limit(&mut self, limit: usize) {
        self.state.scroll_limit = Some(limit);
        self.state.scroll_back = self.state.scroll_back.min(limit);
    }

    /// Applies one event and returns the side effects it requires.
    pub fn reduce(&mut self, event: Event) -> Vec<Command> {
        let mut fx = Effects::default();
        match event {
            Event::Ready {
                guilds,
                guild_positions,
                current_user,
            } => {
                info!(user_id = %current_user, guilds = guilds.len(), "Session ready");
                self.state.current_user = Some(current_user);
                let ordered = order_guilds(guilds, guild_positions.as_deref());
                self.set_guilds(ordered, &mut fx);
            }
            Event::SetGuilds(guilds) => self.set_guilds(guilds, &mut fx),
            Event::SelectGuild(index) => self.select_guild(index, &mut fx),
            Event::SelectChannel(index) => self.select_channel(index, &mut fx),
            Event::FocusPanel(panel) => self.focus_panel(panel, &mut fx),
            Event::IncomingMessage(message) => self.incoming_message(message, &mut fx),
            Event::FetchCompleted {
                channel_id,
                ticket,
                result,
            } => {
                if self.cache.complete(channel_id, ticket, result)
                    && self.is_current_channel(channel_id)
                {
                    fx.redraw();
                }
            }
            Event::GuildUpdated(guild) => self.guild_updated(guild, &mut fx),
            Event::GuildRemoved(guild_id) => self.guild_removed(guild_id, &mut fx),
            Event::MoveGuild(direction) => self.move_guild(direction, &mut fx),
            Event::MoveChannelCursor(direction) => self.move_channel_cursor(direction, &mut fx),
            Event::OpenChannelAtCursor => {
                if let Some(cursor) = self.state.channel_cursor {
                    self.select_channel(cursor, &mut fx);
                }
            }
            Event::JumpToGuild(number) => {
                if let Some(index) = number.checked_sub(1) {
                    self.select_guild(index, &mut fx);
                }
            }
            Event::JumpToChannel(number) => {
                let index = number
                    .checked_sub(1)
                    .and_then(|n| channel_tree::nth_selectable(&self.state.channels, n));
                if let Some(index) = index {
                    self.select_channel(index, &mut fx);
                }
            }
            Event::Scroll(direction) => self.scroll(direction, &mut fx),
            Event::ScrollToBottom => {
                if self.state.scroll_back != 0 {
                    self.state.scroll_back = 0;
                    fx.redraw();
                }
            }
            Event::Resize => fx.redraw(),
        }
        fx.into_commands()
    }

    fn is_current_channel(&self, channel_id: ChannelId) -> bool {
        self.state
            .current_channel()
            .is_some_and(|c| c.id() == channel_id)
    }

    fn clear_guild(&mut self) {
        self.state.guild_index = None;
        self.state.channels.clear();
        self.clear_channel();
    }

    fn clear_channel(&mut self) {
        self.state.channel_index = None;
        self.state.channel_cursor = None;
        self.state.scroll_back = 0;
    }

    fn set_guilds(&mut self, guilds: Vec<Guild>, fx: &mut Effects) {
        debug!(count = guilds.len(), "Replacing guild list");
        self.state.guilds = guilds;
        if self.state.guilds.is_empty() {
            self.clear_guild();
        } else {
            self.select_guild(0, fx);
        }
        fx.redraw();
    }

    fn select_guild(&mut self, index: usize, fx: &mut Effects) {
        let Some(guild) = self.state.guilds.get(index) else {
            debug!(index, "Guild index out of range");
            return;
        };
        debug!(guild_id = %guild.id(), index, "Selecting guild");

        self.state.channels = build_display_list(guild.channels());
        self.state.guild_index = Some(index);
        self.clear_channel();
        fx.redraw();

        if let Some(first) = channel_tree::first_selectable(&self.state.channels) {
            self.select_channel(first, fx);
        }
    }

    fn select_channel(&mut self, index: usize, fx: &mut Effects) {
        let Some(channel) = self
            .state
            .channels
            .get(index)
            .filter(|c| c.kind().is_text())
        else {
            debug!(index, "Channel index is not a text channel");
            return;
        };
        let channel_id = channel.id();
        debug!(channel_id = %channel_id, index, "Selecting channel");

        self.state.channel_index = Some(index);
        self.state.channel_cursor = Some(index);
        self.state.scroll_back = 0;

        match self.cache.ensure_loaded(channel_id) {
            EnsureOutcome::StartFetch(ticket) => fx.fetch(channel_id, ticket),
            EnsureOutcome::AlreadyInFlight(ticket) => {
                debug!(channel_id = %channel_id, ticket = %ticket, "Fetch already in flight");
            }
            EnsureOutcome::Ready => {}
        }
        fx.redraw();
    }

    fn focus_panel(&mut self, panel: Panel, fx: &mut Effects) {
        if self.state.focus != panel {
            self.state.focus = panel;
            fx.redraw();
        }
    }

    fn incoming_message(&mut self, message: Message, fx: &mut Effects) {
        let channel_id = message.channel_id();
        if self.cache.push_live(message) && self.is_current_channel(channel_id) {
            fx.redraw();
        }
    }

    fn guild_updated(&mut self, guild: Guild, fx: &mut Effects) {
        let guild_id = guild.id();
        fx.redraw();

        let Some(index) = self.state.guilds.iter().position(|g| g.id() == guild_id) else {
            debug!(guild_id = %guild_id, "Guild joined");
            self.state.guilds.push(guild);
            if self.state.guild_index.is_none() {
                self.select_guild(self.state.guilds.len() - 1, fx);
            }
            return;
        };

        debug!(guild_id = %guild_id, "Guild updated");
        self.state.guilds[index] = guild;
        if self.state.guild_index != Some(index) {
            return;
        }

        let previous_channel = self.state.current_channel().map(Channel::id);
        let previous_cursor = self
            .state
            .channel_cursor
            .and_then(|i| self.state.channels.get(i))
            .map(Channel::id);
        self.state.channels = build_display_list(self.state.guilds[index].channels());

        let find_text = |id: Option<ChannelId>, channels: &[Channel]| {
            id.and_then(|id| {
                channels
                    .iter()
                    .position(|c| c.id() == id && c.kind().is_text())
            })
        };

        if let Some(position) = find_text(previous_channel, &self.state.channels) {
            self.state.channel_index = Some(position);
            self.state.channel_cursor =
                find_text(previous_cursor, &self.state.channels).or(Some(position));
        } else {
            self.clear_channel();
            if let Some(first) = channel_tree::first_selectable(&self.state.channels) {
                self.select_channel(first, fx);
            }
        }
    }

    fn guild_removed(&mut self, guild_id: GuildId, fx: &mut Effects) {
        let Some(index) = self.state.guilds.iter().position(|g| g.id() == guild_id) else {
            return;
        };
        debug!(guild_id = %guild_id, "Guild removed");
        self.state.guilds.remove(index);
        fx.redraw();

        match self.state.guild_index {
            Some(current) if current == index => {
                if self.state.guilds.is_empty() {
                    self.clear_guild();
                } else {
                    self.select_guild(index.min(self.state.guilds.len() - 1), fx);
                }
            }
            Some(current) if current > index => self.state.guild_index = Some(current - 1),
            _ => {}
        }
    }

    fn move_guild(&mut self, direction: Direction, fx: &mut Effects) {
        let target = match (self.state.guild_index, direction) {
            (None, _) => Some(0),
            (Some(current), Direction::Up) => current.checked_sub(1),
            (Some(current), Direction::Down) => Some(current + 1),
        };
        if let Some(target) = target {
            self.select_guild(target, fx);
        }
    }

    fn move_channel_cursor(&mut self, direction: Direction, fx: &mut Effects) {
        let channels = &self.state.channels;
        let target = match (self.state.channel_cursor, direction) {
            (None, _) => channel_tree::first_selectable(channels),
            (Some(cursor), Direction::Down) => channel_tree::next_selectable(channels, cursor),
            (Some(cursor), Direction::Up) => channel_tree::previous_selectable(channels, cursor),
        };
        if target.is_some() && target != self.state.channel_cursor {
            self.state.channel_cursor = target;
            fx.redraw();
        }
    }

    fn scroll(&mut self, direction: Direction, fx: &mut Effects) {
        let current = self.state.scroll_back;
        let next = match direction {
            Direction::Up => current
                .saturating_add(1)
                .min(self.state.scroll_limit.unwrap_or(usize::MAX)),
            Direction::Down => current.saturating_sub(1),
        };
        if next != current {
            self.state.scroll_back = next;
            fx.redraw();
        }
    }
}
