pub mod channel_tree;
pub mod guild_order;
pub mod message_cache;
pub mod rendering;

pub use channel_tree::build_display_list;
pub use guild_order::order_guilds;
pub use message_cache::{CacheEntry, EnsureOutcome, FetchTicket, MessageCache};
