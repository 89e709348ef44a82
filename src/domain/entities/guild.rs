//! Guild entity and its read-only lookups.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Channel, ChannelId, Member, Role, RoleId, UserId};

/// Unique identifier for a guild (server).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuildId(#[serde(with = "crate::domain::serde_utils::string_to_u64")] pub u64);

impl std::fmt::Display for GuildId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for GuildId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Snapshot of a guild: its channels, members and roles.
///
/// The chat client owns the lifetime of guilds; the browser only keeps the
/// latest snapshot it was handed and replaces it wholesale on updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guild {
    id: GuildId,
    name: String,
    channels: Vec<Channel>,
    members: HashMap<UserId, Member>,
    roles: HashMap<RoleId, Role>,
}

impl Guild {
    /// Creates an empty guild with the given ID and name.
    #[must_use]
    pub fn new(id: impl Into<GuildId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            channels: Vec::new(),
            members: HashMap::new(),
            roles: HashMap::new(),
        }
    }

    /// Sets the guild's channel set.
    #[must_use]
    pub fn with_channels(mut self, channels: Vec<Channel>) -> Self {
        self.channels = channels;
        self
    }

    /// Adds a member to the member lookup.
    #[must_use]
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.insert(member.user_id(), member);
        self
    }

    /// Adds a role to the role lookup.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.insert(role.id(), role);
        self
    }

    /// Returns the guild ID.
    #[must_use]
    pub const fn id(&self) -> GuildId {
        self.id
    }

    /// Returns the guild name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the flat, unordered channel set.
    #[must_use]
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Looks up a channel by ID.
    #[must_use]
    pub fn channel(&self, id: ChannelId) -> Option<&Channel> {
        self.channels.iter().find(|c| c.id() == id)
    }

    /// Looks up a member by user ID.
    #[must_use]
    pub fn member(&self, id: UserId) -> Option<&Member> {
        self.members.get(&id)
    }

    /// Looks up a role by ID.
    #[must_use]
    pub fn role(&self, id: RoleId) -> Option<&Role> {
        self.roles.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ChannelKind, User};

    #[test]
    fn test_guild_creation() {
        let guild = Guild::new(123_u64, "Test Server");

        assert_eq!(guild.id(), GuildId(123));
        assert_eq!(guild.name(), "Test Server");
        assert!(guild.channels().is_empty());
    }

    #[test]
    fn test_guild_lookups() {
        let guild = Guild::new(1_u64, "Lookups")
            .with_channels(vec![Channel::new(10_u64, "general", ChannelKind::Text)])
            .with_member(Member::new(User::new(7_u64, "alice", "0")).with_nick("Al"))
            .with_role(Role::new(99_u64, "mods"));

        assert_eq!(guild.channel(ChannelId(10)).map(Channel::name), Some("general"));
        assert!(guild.channel(ChannelId(11)).is_none());
        assert_eq!(guild.member(UserId(7)).and_then(Member::nick), Some("Al"));
        assert_eq!(guild.role(RoleId(99)).map(Role::name), Some("mods"));
    }

    #[test]
    fn test_guild_id_display() {
        let id = GuildId(123_456_789);
        assert_eq!(format!("{id}"), "123456789");
    }
}
