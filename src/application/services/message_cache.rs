//! Per-channel message history with at most one fetch in flight.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::entities::{ChannelId, Message};
use crate::domain::errors::ClientError;

/// Token identifying one fetch request.
///
/// A completion is only accepted when it carries the ticket the entry is
/// waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket(u64);

impl std::fmt::Display for FetchTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Cache state of one channel. Transitions only move forward:
/// `Unfetched -> InFlight -> Loaded | Forbidden`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CacheEntry {
    #[default]
    Unfetched,
    InFlight(FetchTicket),
    /// Sorted ascending by message id after the initial load.
    Loaded(Vec<Message>),
    Forbidden,
}

impl CacheEntry {
    /// Returns the cached messages when loaded.
    #[must_use]
    pub fn messages(&self) -> Option<&[Message]> {
        match self {
            Self::Loaded(messages) => Some(messages),
            _ => None,
        }
    }
}

/// Result of asking the cache to make a channel available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// Loaded or forbidden already; nothing to do.
    Ready,
    /// A fetch for the channel is already running.
    AlreadyInFlight(FetchTicket),
    /// The caller must start a fetch tagged with this ticket.
    StartFetch(FetchTicket),
}

static UNFETCHED: CacheEntry = CacheEntry::Unfetched;

#[derive(Debug, Default)]
pub struct MessageCache {
    entries: HashMap<ChannelId, CacheEntry>,
    next_ticket: u64,
}

impl MessageCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the channel in flight if it has never been fetched.
    pub fn ensure_loaded(&mut self, channel_id: ChannelId) -> EnsureOutcome {
        match self.entries.get(&channel_id) {
            Some(CacheEntry::Loaded(_) | CacheEntry::Forbidden) => EnsureOutcome::Ready,
            Some(CacheEntry::InFlight(ticket)) => EnsureOutcome::AlreadyInFlight(*ticket),
            Some(CacheEntry::Unfetched) | None => {
                self.next_ticket += 1;
                let ticket = FetchTicket(self.next_ticket);
                self.entries.insert(channel_id, CacheEntry::InFlight(ticket));
                debug!(channel_id = %channel_id, ticket = %ticket, "Starting message fetch");
                EnsureOutcome::StartFetch(ticket)
            }
        }
    }

    /// Resolves an in-flight fetch. Returns true if the entry changed.
    ///
    /// Any error makes the channel permanently forbidden. Completions for a
    /// ticket the entry is not waiting on are ignored.
    pub fn complete(
        &mut self,
        channel_id: ChannelId,
        ticket: FetchTicket,
        result: Result<Vec<Message>, ClientError>,
    ) -> bool {
        let Some(entry) = self.entries.get_mut(&channel_id) else {
            debug!(channel_id = %channel_id, ticket = %ticket, "Ignoring completion for unknown channel");
            return false;
        };
        if *entry != CacheEntry::InFlight(ticket) {
            debug!(channel_id = %channel_id, ticket = %ticket, "Ignoring stale fetch completion");
            return false;
        }

        *entry = match result {
            Ok(mut messages) => {
                messages.sort_by_key(Message::id);
                debug!(channel_id = %channel_id, count = messages.len(), "Channel history loaded");
                CacheEntry::Loaded(messages)
            }
            Err(err) if err.is_permission_error() => {
                debug!(channel_id = %channel_id, "Channel history is forbidden");
                CacheEntry::Forbidden
            }
            Err(err) => {
                warn!(channel_id = %channel_id, error = %err, "Channel history unavailable");
                CacheEntry::Forbidden
            }
        };
        true
    }

    /// Appends a live message to its channel if the history is loaded.
    /// Returns false when the message was dropped.
    ///
    /// Live messages are assumed newer than everything cached and are not
    /// re-sorted.
    pub fn push_live(&mut self, message: Message) -> bool {
        match self.entries.get_mut(&message.channel_id()) {
            Some(CacheEntry::Loaded(messages)) => {
                messages.push(message);
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn get(&self, channel_id: ChannelId) -> &CacheEntry {
        self.entries.get(&channel_id).unwrap_or(&UNFETCHED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MessageAuthor;

    fn message(id: u64, channel: u64) -> Message {
        Message::new(id, channel, MessageAuthor::new(1_u64, "alice"), format!("m{id}"))
    }

    fn ids(entry: &CacheEntry) -> Vec<u64> {
        entry
            .messages()
            .unwrap_or_default()
            .iter()
            .map(|m| m.id().0)
            .collect()
    }

    fn start(cache: &mut MessageCache, channel: ChannelId) -> FetchTicket {
        match cache.ensure_loaded(channel) {
            EnsureOutcome::StartFetch(ticket) => ticket,
            other => panic!("expected a fetch to start, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_channel_reads_as_unfetched() {
        let cache = MessageCache::new();
        assert_eq!(cache.get(ChannelId(1)), &CacheEntry::Unfetched);
    }

    #[test]
    fn test_second_ensure_does_not_start_another_fetch() {
        let mut cache = MessageCache::new();
        let ticket = start(&mut cache, ChannelId(1));

        assert_eq!(
            cache.ensure_loaded(ChannelId(1)),
            EnsureOutcome::AlreadyInFlight(ticket)
        );
        assert!(matches!(cache.get(ChannelId(1)), CacheEntry::InFlight(_)));
    }

    #[test]
    fn test_completion_sorts_by_id() {
        let mut cache = MessageCache::new();
        let ticket = start(&mut cache, ChannelId(1));

        let changed = cache.complete(
            ChannelId(1),
            ticket,
            Ok(vec![message(30, 1), message(10, 1), message(20, 1)]),
        );

        assert!(changed);
        assert_eq!(ids(cache.get(ChannelId(1))), vec![10, 20, 30]);
        assert_eq!(cache.ensure_loaded(ChannelId(1)), EnsureOutcome::Ready);
    }

    #[test]
    fn test_failed_fetch_is_permanently_forbidden() {
        let mut cache = MessageCache::new();
        let ticket = start(&mut cache, ChannelId(1));

        cache.complete(ChannelId(1), ticket, Err(ClientError::forbidden(ChannelId(1))));

        assert_eq!(cache.get(ChannelId(1)), &CacheEntry::Forbidden);
        assert_eq!(cache.ensure_loaded(ChannelId(1)), EnsureOutcome::Ready);
        assert!(!cache.push_live(message(5, 1)));
    }

    #[test]
    fn test_mismatched_ticket_is_ignored() {
        let mut cache = MessageCache::new();
        let ticket = start(&mut cache, ChannelId(1));
        let other = start(&mut cache, ChannelId(2));

        assert!(!cache.complete(ChannelId(1), other, Ok(vec![])));
        assert_eq!(cache.get(ChannelId(1)), &CacheEntry::InFlight(ticket));
    }

    #[test]
    fn test_completion_after_settled_is_ignored() {
        let mut cache = MessageCache::new();
        let ticket = start(&mut cache, ChannelId(1));
        cache.complete(ChannelId(1), ticket, Ok(vec![message(1, 1)]));

        assert!(!cache.complete(ChannelId(1), ticket, Err(ClientError::unexpected("late"))));
        assert_eq!(ids(cache.get(ChannelId(1))), vec![1]);
    }

    #[test]
    fn test_completion_for_unfetched_channel_is_ignored() {
        let mut cache = MessageCache::new();
        let ticket = start(&mut cache, ChannelId(1));

        assert!(!cache.complete(ChannelId(9), ticket, Ok(vec![])));
        assert_eq!(cache.get(ChannelId(9)), &CacheEntry::Unfetched);
    }

    #[test]
    fn test_live_push_dropped_unless_loaded() {
        let mut cache = MessageCache::new();

        assert!(!cache.push_live(message(1, 1)));
        assert_eq!(cache.get(ChannelId(1)), &CacheEntry::Unfetched);

        let ticket = start(&mut cache, ChannelId(1));
        assert!(!cache.push_live(message(2, 1)));

        cache.complete(ChannelId(1), ticket, Ok(vec![message(1, 1)]));
        assert!(cache.push_live(message(3, 1)));
        assert_eq!(ids(cache.get(ChannelId(1))), vec![1, 3]);
    }

    #[test]
    fn test_live_push_appends_without_resort() {
        let mut cache = MessageCache::new();
        let ticket = start(&mut cache, ChannelId(1));
        cache.complete(ChannelId(1), ticket, Ok(vec![message(5, 1)]));

        cache.push_live(message(3, 1));

        assert_eq!(ids(cache.get(ChannelId(1))), vec![5, 3]);
    }
}
