//! Substitution of mention and emote tokens in escaped message content.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::markup::escape;
use crate::domain::entities::{ChannelId, Guild, RoleId, UserId};

const DELETED_CHANNEL: &str = "#deleted-channel";
const DELETED_ROLE: &str = "@deleted-role";

/// One regex for every token class, tried left to right. Replacement text is
/// never rescanned, so a resolved name that happens to look like a token
/// stays literal.
fn entity_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"<@(?P<nick>!?)(?P<user>[0-9]+)>",
            r"|<#(?P<channel>[0-9]+)>",
            r"|<@&(?P<role>[0-9]+)>",
            r"|(?P<broadcast>@everyone|@here)",
            r"|<a?:(?P<emote>[A-Za-z0-9_]+):[0-9]+>",
        ))
        .expect("Invalid entity regex")
    })
}

fn highlight(text: &str) -> String {
    format!("{{bold}}{{cyan-fg}}{text}{{/}}")
}

fn parse_id<T: From<u64>>(digits: &str) -> Option<T> {
    digits.parse::<u64>().ok().map(T::from)
}

fn user_mention(caps: &Captures<'_>, guild: &Guild) -> String {
    let member = caps
        .name("user")
        .and_then(|m| parse_id::<UserId>(m.as_str()))
        .and_then(|id| guild.member(id));

    let Some(member) = member else {
        return highlight(&caps[0]);
    };

    let prefers_nick = caps.name("nick").is_some_and(|m| !m.as_str().is_empty());
    let name = if prefers_nick {
        member.display_name()
    } else {
        member.user().username()
    };
    highlight(&format!("@{}", escape(name)))
}

fn channel_mention(digits: &str, guild: &Guild) -> String {
    let name = parse_id::<ChannelId>(digits)
        .and_then(|id| guild.channel(id))
        .filter(|channel| channel.kind().is_text())
        .map_or_else(|| DELETED_CHANNEL.to_string(), |c| format!("#{}", escape(c.name())));
    highlight(&name)
}

fn role_mention(digits: &str, guild: &Guild) -> String {
    let name = parse_id::<RoleId>(digits)
        .and_then(|id| guild.role(id))
        .map_or_else(|| DELETED_ROLE.to_string(), |r| format!("@{}", escape(r.name())));
    highlight(&name)
}

/// Replaces entity tokens in already-escaped content.
///
/// - `<@id>` becomes `@username`, `<@!id>` the member's nickname when set;
///   mentions of unknown users keep their raw form.
/// - `<#id>` becomes `#name` for text channels, else `#deleted-channel`.
/// - `<@&id>` becomes `@name`, else `@deleted-role`.
/// - `@everyone` and `@here` are kept.
///
/// All of the above are highlighted bold cyan. Custom emotes `<:name:id>`
/// and `<a:name:id>` become a green `:name:`.
#[must_use]
pub fn substitute_entities(content: &str, guild: &Guild) -> String {
    entity_regex()
        .replace_all(content, |caps: &Captures<'_>| {
            if caps.name("user").is_some() {
                user_mention(caps, guild)
            } else if let Some(channel) = caps.name("channel") {
                channel_mention(channel.as_str(), guild)
            } else if let Some(role) = caps.name("role") {
                role_mention(role.as_str(), guild)
            } else if let Some(emote) = caps.name("emote") {
                format!("{{green-fg}}:{}:{{/}}", emote.as_str())
            } else {
                highlight(&caps[0])
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Channel, ChannelKind, Member, Role, User};
    use test_case::test_case;

    fn guild() -> Guild {
        Guild::new(1_u64, "Test")
            .with_channels(vec![
                Channel::new(10_u64, "general", ChannelKind::Text),
                Channel::new(11_u64, "Voice", ChannelKind::Other),
                Channel::new(12_u64, "braces{}", ChannelKind::Text),
            ])
            .with_member(Member::new(User::new(7_u64, "alice", "0")).with_nick("Al"))
            .with_member(Member::new(User::new(8_u64, "bob", "0")))
            .with_role(Role::new(5_u64, "mods"))
    }

    #[test_case("<@7>", "{bold}{cyan-fg}@alice{/}" ; "user by username")]
    #[test_case("<@!7>", "{bold}{cyan-fg}@Al{/}" ; "user by nickname")]
    #[test_case("<@!8>", "{bold}{cyan-fg}@bob{/}" ; "nickname falls back to username")]
    #[test_case("<@404>", "{bold}{cyan-fg}<@404>{/}" ; "unknown user left as is")]
    #[test_case("<#10>", "{bold}{cyan-fg}#general{/}" ; "text channel")]
    #[test_case("<#11>", "{bold}{cyan-fg}#deleted-channel{/}" ; "non text channel")]
    #[test_case("<#404>", "{bold}{cyan-fg}#deleted-channel{/}" ; "unknown channel")]
    #[test_case("<@&5>", "{bold}{cyan-fg}@mods{/}" ; "role")]
    #[test_case("<@&99>", "{bold}{cyan-fg}@deleted-role{/}" ; "unknown role")]
    #[test_case("@everyone", "{bold}{cyan-fg}@everyone{/}" ; "everyone")]
    #[test_case("@here", "{bold}{cyan-fg}@here{/}" ; "here")]
    #[test_case("<:pog:123>", "{green-fg}:pog:{/}" ; "emote")]
    #[test_case("<a:Dance_2:456>", "{green-fg}:Dance_2:{/}" ; "animated emote")]
    fn test_single_token(input: &str, expected: &str) {
        assert_eq!(substitute_entities(input, &guild()), expected);
    }

    #[test]
    fn test_resolved_names_are_escaped() {
        assert_eq!(
            substitute_entities("<#12>", &guild()),
            "{bold}{cyan-fg}#braces{open}{close}{/}"
        );
    }

    #[test]
    fn test_mixed_content() {
        assert_eq!(
            substitute_entities("hey <@7>, see <#10> <:wave:1>", &guild()),
            "hey {bold}{cyan-fg}@alice{/}, see {bold}{cyan-fg}#general{/} {green-fg}:wave:{/}"
        );
    }

    #[test]
    fn test_replacement_is_not_rescanned() {
        let guild = Guild::new(1_u64, "Tricky")
            .with_member(Member::new(User::new(7_u64, "<#10>", "0")))
            .with_channels(vec![Channel::new(10_u64, "general", ChannelKind::Text)]);

        assert_eq!(
            substitute_entities("<@7>", &guild),
            "{bold}{cyan-fg}@<#10>{/}"
        );
    }

    #[test_case("just some words" ; "plain")]
    #[test_case("email me at a@b.c or <not a token>" ; "near misses")]
    #[test_case("" ; "empty")]
    fn test_token_free_content_is_unchanged(content: &str) {
        assert_eq!(substitute_entities(content, &guild()), content);
    }
}
