//! Message entity.

use serde::{Deserialize, Serialize};

use super::{ChannelId, UserId};

/// Unique, time-ordered identifier for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(#[serde(with = "crate::domain::serde_utils::string_to_u64")] pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MessageId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Author information carried on a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageAuthor {
    id: UserId,
    username: String,
    #[serde(default)]
    nick: Option<String>,
}

#[allow(missing_docs)]
impl MessageAuthor {
    #[must_use]
    pub fn new(id: impl Into<UserId>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            nick: None,
        }
    }

    /// Nickname as seen in the message's guild.
    #[must_use]
    pub fn with_nick(mut self, nick: impl Into<String>) -> Self {
        self.nick = Some(nick.into());
        self
    }

    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn nick(&self) -> Option<&str> {
        self.nick.as_deref().filter(|nick| !nick.is_empty())
    }
}

/// A chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    channel_id: ChannelId,
    author: MessageAuthor,
    #[serde(default)]
    content: String,
}

#[allow(missing_docs)]
impl Message {
    #[must_use]
    pub fn new(
        id: impl Into<MessageId>,
        channel_id: impl Into<ChannelId>,
        author: MessageAuthor,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            channel_id: channel_id.into(),
            author,
            content: content.into(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    #[must_use]
    pub const fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    #[must_use]
    pub const fn author(&self) -> &MessageAuthor {
        &self.author
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_ids_order_numerically() {
        let nine: MessageId = serde_json::from_str(r#""9""#).unwrap();
        let ten: MessageId = serde_json::from_str(r#""10""#).unwrap();

        assert!(nine < ten);
    }

    #[test]
    fn test_message_deserializes_string_ids() {
        let json = r#"{
            "id": "1000",
            "channel_id": "10",
            "author": { "id": "7", "username": "alice" },
            "content": "hi"
        }"#;
        let message: Message = serde_json::from_str(json).unwrap();

        assert_eq!(message.id(), MessageId(1000));
        assert_eq!(message.channel_id(), ChannelId(10));
        assert_eq!(message.author().id(), UserId(7));
        assert_eq!(message.author().nick(), None);
        assert_eq!(message.content(), "hi");
    }
}
