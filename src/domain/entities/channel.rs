//! Channel entity.

use serde::{Deserialize, Serialize};

/// Unique identifier for a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(#[serde(with = "crate::domain::serde_utils::string_to_u64")] pub u64);

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ChannelId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Channel type as far as the browser cares.
///
/// On the wire this is the numeric `type` code: `0` is a text channel, `4` a
/// category, and every other code collapses into [`ChannelKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum ChannelKind {
    /// Text channel holding messages.
    #[default]
    Text,
    /// Category grouping other channels.
    Category,
    /// Voice, stage, forum and anything else the browser cannot show.
    Other,
}

impl ChannelKind {
    const TEXT_CODE: u8 = 0;
    const CATEGORY_CODE: u8 = 4;
    const OTHER_CODE: u8 = 2;

    /// Returns true for channels whose history can be opened.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Text)
    }
}

impl From<u8> for ChannelKind {
    fn from(code: u8) -> Self {
        match code {
            Self::TEXT_CODE => Self::Text,
            Self::CATEGORY_CODE => Self::Category,
            _ => Self::Other,
        }
    }
}

impl From<ChannelKind> for u8 {
    fn from(kind: ChannelKind) -> Self {
        match kind {
            ChannelKind::Text => ChannelKind::TEXT_CODE,
            ChannelKind::Category => ChannelKind::CATEGORY_CODE,
            ChannelKind::Other => ChannelKind::OTHER_CODE,
        }
    }
}

/// A channel inside a guild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    id: ChannelId,
    name: String,
    #[serde(rename = "type", default)]
    kind: ChannelKind,
    #[serde(default)]
    parent_id: Option<ChannelId>,
    #[serde(default)]
    position: i32,
}

impl Channel {
    /// Creates a channel without parent at position 0.
    #[must_use]
    pub fn new(id: impl Into<ChannelId>, name: impl Into<String>, kind: ChannelKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            parent_id: None,
            position: 0,
        }
    }

    /// Sets the parent category.
    #[must_use]
    pub fn with_parent(mut self, parent_id: impl Into<ChannelId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Sets the sort position.
    #[must_use]
    pub const fn with_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub const fn id(&self) -> ChannelId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn kind(&self) -> ChannelKind {
        self.kind
    }

    /// Returns the parent category ID. Categories never have one.
    #[must_use]
    pub const fn parent_id(&self) -> Option<ChannelId> {
        match self.kind {
            ChannelKind::Category => None,
            _ => self.parent_id,
        }
    }

    #[must_use]
    pub const fn position(&self) -> i32 {
        self.position
    }

    /// Name as shown in lists and titles: `#name` for text channels.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.kind {
            ChannelKind::Text => format!("#{}", self.name),
            _ => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, ChannelKind::Text ; "text")]
    #[test_case(4, ChannelKind::Category ; "category")]
    #[test_case(2, ChannelKind::Other ; "voice")]
    #[test_case(15, ChannelKind::Other ; "forum")]
    fn test_kind_from_wire_code(code: u8, expected: ChannelKind) {
        assert_eq!(ChannelKind::from(code), expected);
    }

    #[test]
    fn test_channel_deserializes_from_wire_shape() {
        let json = r#"{"id":"10","name":"general","type":0,"parent_id":"3","position":2}"#;
        let channel: Channel = serde_json::from_str(json).unwrap();

        assert_eq!(channel.id(), ChannelId(10));
        assert_eq!(channel.kind(), ChannelKind::Text);
        assert_eq!(channel.parent_id(), Some(ChannelId(3)));
        assert_eq!(channel.position(), 2);
    }

    #[test]
    fn test_channel_defaults_for_missing_fields() {
        let channel: Channel = serde_json::from_str(r#"{"id":5,"name":"misc"}"#).unwrap();

        assert_eq!(channel.kind(), ChannelKind::Text);
        assert_eq!(channel.parent_id(), None);
        assert_eq!(channel.position(), 0);
    }

    #[test]
    fn test_category_never_reports_parent() {
        let category = Channel::new(1_u64, "Info", ChannelKind::Category).with_parent(2_u64);
        assert_eq!(category.parent_id(), None);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            Channel::new(1_u64, "general", ChannelKind::Text).display_name(),
            "#general"
        );
        assert_eq!(
            Channel::new(2_u64, "Info", ChannelKind::Category).display_name(),
            "Info"
        );
    }
}
