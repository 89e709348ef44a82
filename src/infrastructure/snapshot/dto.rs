//! On-disk shape of a snapshot file.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::entities::{Channel, ChannelId, Guild, GuildId, Member, Message, Role, User};

#[derive(Debug, Deserialize)]
pub struct SnapshotFile {
    /// The account the snapshot was taken with.
    pub user: User,
    #[serde(default)]
    pub bot: bool,
    #[serde(default)]
    pub guild_positions: Vec<GuildId>,
    #[serde(default)]
    pub guilds: Vec<GuildRecord>,
    /// Channel history keyed by channel id, in any order.
    #[serde(default)]
    pub messages: HashMap<ChannelId, Vec<Message>>,
    /// Messages replayed as live events after connecting.
    #[serde(default)]
    pub live: Vec<LiveMessage>,
    /// Artificial latency added to every history fetch.
    #[serde(default)]
    pub fetch_delay_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct GuildRecord {
    pub id: GuildId,
    pub name: String,
    #[serde(default)]
    pub channels: Vec<ChannelRecord>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

#[derive(Debug, Deserialize)]
pub struct ChannelRecord {
    #[serde(flatten)]
    pub channel: Channel,
    /// The account cannot read this channel's history.
    #[serde(default)]
    pub forbidden: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LiveMessage {
    /// Wait before delivery, counted from the previous live message.
    #[serde(default)]
    pub delay_ms: u64,
    pub message: Message,
}

impl GuildRecord {
    /// Ids of channels flagged as forbidden.
    pub fn forbidden_channels(&self) -> impl Iterator<Item = ChannelId> + '_ {
        self.channels
            .iter()
            .filter(|record| record.forbidden)
            .map(|record| record.channel.id())
    }
}

impl From<GuildRecord> for Guild {
    fn from(record: GuildRecord) -> Self {
        let channels = record.channels.into_iter().map(|r| r.channel).collect();
        let guild = Self::new(record.id, record.name).with_channels(channels);
        let guild = record
            .members
            .into_iter()
            .fold(guild, Self::with_member);
        record.roles.into_iter().fold(guild, Self::with_role)
    }
}
