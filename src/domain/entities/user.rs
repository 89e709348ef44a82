//! User entity.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(#[serde(with = "crate::domain::serde_utils::string_to_u64")] pub u64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

fn default_discriminator() -> String {
    "0".to_string()
}

/// An account on the chat service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: String,
    #[serde(default = "default_discriminator")]
    discriminator: String,
}

impl User {
    #[must_use]
    pub fn new(
        id: impl Into<UserId>,
        username: impl Into<String>,
        discriminator: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            discriminator: discriminator.into(),
        }
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
    pub fn discriminator(&self) -> &str {
        &self.discriminator
    }

    /// `username#1234`, or just the username for accounts on the new
    /// naming scheme (discriminator `0`).
    #[must_use]
    pub fn tag(&self) -> String {
        if self.discriminator == "0" || self.discriminator.is_empty() {
            self.username.clone()
        } else {
            format!("{}#{}", self.username, self.discriminator)
        }
    }
}
