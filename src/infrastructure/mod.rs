//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Snapshot-backed chat client.
pub mod snapshot;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use snapshot::SnapshotChatClient;
