//! Ordering of the guild list handed over by the chat client.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::entities::{Guild, GuildId};

/// Orders guilds for the guilds panel.
///
/// Without a position list (bot accounts) the client's order is kept. With
/// one, guilds follow the list; ids the client does not know are skipped and
/// guilds missing from the list are appended in the client's order.
#[must_use]
pub fn order_guilds(guilds: Vec<Guild>, positions: Option<&[GuildId]>) -> Vec<Guild> {
    let Some(positions) = positions else {
        return guilds;
    };

    let mut by_id: HashMap<GuildId, Guild> = HashMap::with_capacity(guilds.len());
    let mut arrival: Vec<GuildId> = Vec::with_capacity(guilds.len());
    for guild in guilds {
        arrival.push(guild.id());
        by_id.insert(guild.id(), guild);
    }

    let mut ordered = Vec::with_capacity(by_id.len());
    for id in positions {
        match by_id.remove(id) {
            Some(guild) => ordered.push(guild),
            None => debug!(guild_id = %id, "Skipping unknown guild in position list"),
        }
    }
    ordered.extend(arrival.iter().filter_map(|id| by_id.remove(id)));
    ordered
}
