//! Chat client serving a recorded snapshot.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::dto::{LiveMessage, SnapshotFile};
use crate::domain::entities::{ChannelId, Guild, GuildId, Message, User};
use crate::domain::errors::ClientError;
use crate::domain::ports::{ChatClientPort, ClientEvent};

#[derive(Debug)]
struct Snapshot {
    user: User,
    bot: bool,
    guild_positions: Vec<GuildId>,
    guilds: Vec<Guild>,
    histories: HashMap<ChannelId, Vec<Message>>,
    known_channels: HashSet<ChannelId>,
    forbidden: HashSet<ChannelId>,
    live: Vec<LiveMessage>,
    fetch_delay: Duration,
}

impl From<SnapshotFile> for Snapshot {
    fn from(file: SnapshotFile) -> Self {
        let mut forbidden = HashSet::new();
        let mut known_channels = HashSet::new();
        let mut guilds = Vec::with_capacity(file.guilds.len());

        for record in file.guilds {
            forbidden.extend(record.forbidden_channels());
            known_channels.extend(record.channels.iter().map(|r| r.channel.id()));
            guilds.push(Guild::from(record));
        }

        Self {
            user: file.user,
            bot: file.bot,
            guild_positions: file.guild_positions,
            guilds,
            histories: file.messages,
            known_channels,
            forbidden,
            live: file.live,
            fetch_delay: Duration::from_millis(file.fetch_delay_ms),
        }
    }
}

/// Offline [`ChatClientPort`] backed by a JSON snapshot.
///
/// Connecting emits `Ready` with the recorded guilds, then replays the
/// snapshot's live messages with their delays. History fetches answer from
/// the recording after the configured latency.
#[derive(Debug, Clone)]
pub struct SnapshotChatClient {
    snapshot: Arc<Snapshot>,
}

impl SnapshotChatClient {
    /// # Errors
    ///
    /// Returns `ClientError::Snapshot` if the JSON does not describe a
    /// snapshot.
    pub fn from_json(json: &str) -> Result<Self, ClientError> {
        let file: SnapshotFile = serde_json::from_str(json)?;
        Ok(Self {
            snapshot: Arc::new(Snapshot::from(file)),
        })
    }

    /// # Errors
    ///
    /// Returns `ClientError::Snapshot` if the file cannot be read or parsed.
    pub async fn load(path: &Path) -> Result<Self, ClientError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ClientError::snapshot(format!("{}: {e}", path.display())))?;
        let client = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            guilds = client.snapshot.guilds.len(),
            "Snapshot loaded"
        );
        Ok(client)
    }

    #[must_use]
    pub fn user(&self) -> &User {
        &self.snapshot.user
    }
}

#[async_trait]
impl ChatClientPort for SnapshotChatClient {
    fn connect(&self) -> Result<mpsc::UnboundedReceiver<ClientEvent>, ClientError> {
        let (tx, rx) = mpsc::unbounded_channel();
        let snapshot = &self.snapshot;

        let guild_positions = (!snapshot.bot).then(|| snapshot.guild_positions.clone());
        tx.send(ClientEvent::Ready {
            guilds: snapshot.guilds.clone(),
            guild_positions,
            current_user: snapshot.user.clone(),
        })
        .map_err(|_| ClientError::disconnected("event receiver dropped"))?;

        if !snapshot.live.is_empty() {
            let live = snapshot.live.clone();
            tokio::spawn(async move {
                for entry in live {
                    tokio::time::sleep(Duration::from_millis(entry.delay_ms)).await;
                    if tx.send(ClientEvent::MessageCreate(entry.message)).is_err() {
                        debug!("Event receiver dropped, stopping live replay");
                        break;
                    }
                }
            });
        }

        Ok(rx)
    }

    async fn fetch_messages(&self, channel_id: ChannelId) -> Result<Vec<Message>, ClientError> {
        let snapshot = &self.snapshot;
        if !snapshot.fetch_delay.is_zero() {
            tokio::time::sleep(snapshot.fetch_delay).await;
        }

        if snapshot.forbidden.contains(&channel_id) {
            return Err(ClientError::forbidden(channel_id));
        }
        if !snapshot.known_channels.contains(&channel_id) {
            return Err(ClientError::not_found(channel_id));
        }

        let messages = snapshot
            .histories
            .get(&channel_id)
            .cloned()
            .unwrap_or_default();
        debug!(channel_id = %channel_id, count = messages.len(), "Served channel history");
        Ok(messages)
    }
}
