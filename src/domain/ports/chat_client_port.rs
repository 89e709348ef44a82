//! Chat client port definition.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::domain::entities::{ChannelId, Guild, GuildId, Message, User};
use crate::domain::errors::ClientError;

/// Events pushed by the chat client after connecting.
#[derive(Debug, Clone)]
pub enum ClientEvent {
    /// Session is ready and the guild snapshot is available.
    Ready {
        guilds: Vec<Guild>,
        /// The account's own guild ordering; bot accounts have none.
        guild_positions: Option<Vec<GuildId>>,
        current_user: User,
    },
    /// A message was posted in some channel.
    MessageCreate(Message),
    /// A guild was created or changed; carries the full new snapshot.
    GuildUpdate(Guild),
    /// The account left or lost access to a guild.
    GuildDelete(GuildId),
}

/// Port for the chat service session.
#[async_trait]
pub trait ChatClientPort: Send + Sync {
    /// Starts the session and returns the event stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be established.
    fn connect(&self) -> Result<mpsc::UnboundedReceiver<ClientEvent>, ClientError>;

    /// Fetches the recent message history of a channel, in no particular order.
    async fn fetch_messages(&self, channel_id: ChannelId) -> Result<Vec<Message>, ClientError>;
}
