//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Port definitions.
pub mod ports;
/// Serde utilities.
pub mod serde_utils;

pub use entities::{Channel, ChannelId, ChannelKind, Guild, GuildId, Message, User, UserId};
pub use errors::ClientError;
pub use ports::{ChatClientPort, ClientEvent};
