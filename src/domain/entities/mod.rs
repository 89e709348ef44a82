//! Domain entity definitions.

mod channel;
mod guild;
mod member;
mod message;
mod role;
mod user;

pub use channel::{Channel, ChannelId, ChannelKind};
pub use guild::{Guild, GuildId};
pub use member::Member;
pub use message::{Message, MessageAuthor, MessageId};
pub use role::{Role, RoleId};
pub use user::{User, UserId};
