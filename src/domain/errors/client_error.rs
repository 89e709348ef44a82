//! Chat client error types.

use thiserror::Error;

use crate::domain::entities::ChannelId;

/// Errors surfaced by a chat client adapter.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ClientError {
    #[error("missing access to channel {channel_id}")]
    Forbidden { channel_id: ChannelId },

    #[error("unknown channel {channel_id}")]
    NotFound { channel_id: ChannelId },

    #[error("failed to load snapshot: {message}")]
    Snapshot { message: String },

    #[error("client disconnected: {reason}")]
    Disconnected { reason: String },

    #[error("unexpected client error: {message}")]
    Unexpected { message: String },
}

impl ClientError {
    /// Creates forbidden error.
    #[must_use]
    pub const fn forbidden(channel_id: ChannelId) -> Self {
        Self::Forbidden { channel_id }
    }

    /// Creates not found error.
    #[must_use]
    pub const fn not_found(channel_id: ChannelId) -> Self {
        Self::NotFound { channel_id }
    }

    /// Creates snapshot error.
    #[must_use]
    pub fn snapshot(message: impl Into<String>) -> Self {
        Self::Snapshot {
            message: message.into(),
        }
    }

    /// Creates disconnected error.
    #[must_use]
    pub fn disconnected(reason: impl Into<String>) -> Self {
        Self::Disconnected {
            reason: reason.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns true when the account lacks access to the resource.
    #[must_use]
    pub const fn is_permission_error(&self) -> bool {
        matches!(self, Self::Forbidden { .. })
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::snapshot(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::snapshot(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ClientError::forbidden(ChannelId(5)).to_string(),
            "missing access to channel 5"
        );
        assert_eq!(
            ClientError::snapshot("bad json").to_string(),
            "failed to load snapshot: bad json"
        );
    }

    #[test]
    fn test_permission_error_detection() {
        assert!(ClientError::forbidden(ChannelId(1)).is_permission_error());
        assert!(!ClientError::not_found(ChannelId(1)).is_permission_error());
    }
}
