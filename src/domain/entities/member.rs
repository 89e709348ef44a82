use serde::{Deserialize, Serialize};

use super::{User, UserId};

/// A user's membership in one guild.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    user: User,
    #[serde(default)]
    nick: Option<String>,
}

impl Member {
    #[must_use]
    pub const fn new(user: User) -> Self {
        Self { user, nick: None }
    }

    #[must_use]
    pub fn with_nick(mut self, nick: impl Into<String>) -> Self {
        self.nick = Some(nick.into());
        self
    }

    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user.id()
    }

    /// Guild nickname, ignoring empty strings.
    #[must_use]
    pub fn nick(&self) -> Option<&str> {
        self.nick.as_deref().filter(|nick| !nick.is_empty())
    }

    /// Nickname if set, username otherwise.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.nick().unwrap_or_else(|| self.user.username())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_nick() {
        let user = User::new(1_u64, "alice", "0001");

        assert_eq!(Member::new(user.clone()).display_name(), "alice");
        assert_eq!(Member::new(user.clone()).with_nick("Al").display_name(), "Al");
        assert_eq!(Member::new(user).with_nick("").display_name(), "alice");
    }
}
