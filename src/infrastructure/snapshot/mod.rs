//! Offline chat client replaying a recorded snapshot.

mod client;
mod dto;

pub use client::SnapshotChatClient;
