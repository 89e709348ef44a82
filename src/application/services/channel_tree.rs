//! Ordering of a guild's flat channel set into the list shown in the
//! channels panel.

use std::collections::HashMap;

use crate::domain::entities::{Channel, ChannelId, ChannelKind};

/// Builds the display list for a guild's channels.
///
/// Text channels without a category come first, sorted by position. Each
/// category follows, sorted by position, directly followed by its own text
/// channels sorted by position. Channels of any other kind are left out, as
/// are text channels whose parent is not a category of this guild. All sorts
/// are stable so equal positions keep their input order.
#[must_use]
pub fn build_display_list(channels: &[Channel]) -> Vec<Channel> {
    let mut categories: Vec<&Channel> = Vec::new();
    let mut orphans: Vec<&Channel> = Vec::new();
    let mut children: HashMap<ChannelId, Vec<&Channel>> = HashMap::new();

    for channel in channels {
        match (channel.kind(), channel.parent_id()) {
            (ChannelKind::Category, _) => categories.push(channel),
            (ChannelKind::Text, Some(parent)) => children.entry(parent).or_default().push(channel),
            (ChannelKind::Text, None) => orphans.push(channel),
            (ChannelKind::Other, _) => {}
        }
    }

    orphans.sort_by_key(|c| c.position());
    categories.sort_by_key(|c| c.position());
    for group in children.values_mut() {
        group.sort_by_key(|c| c.position());
    }

    let mut list: Vec<Channel> = orphans.into_iter().cloned().collect();
    for category in categories {
        list.push(category.clone());
        if let Some(group) = children.get(&category.id()) {
            list.extend(group.iter().map(|c| (*c).clone()));
        }
    }
    list
}

/// Index of the first text entry, if any.
#[must_use]
pub fn first_selectable(list: &[Channel]) -> Option<usize> {
    list.iter().position(|c| c.kind().is_text())
}

/// Index of the nearest text entry strictly after `from`.
#[must_use]
pub fn next_selectable(list: &[Channel], from: usize) -> Option<usize> {
    list.iter()
        .enumerate()
        .skip(from + 1)
        .find(|(_, c)| c.kind().is_text())
        .map(|(i, _)| i)
}

/// Index of the nearest text entry strictly before `from`.
#[must_use]
pub fn previous_selectable(list: &[Channel], from: usize) -> Option<usize> {
    list[..from.min(list.len())]
        .iter()
        .rposition(|c| c.kind().is_text())
}

/// Index of the `n`-th text entry (0-based), skipping categories.
#[must_use]
pub fn nth_selectable(list: &[Channel], n: usize) -> Option<usize> {
    list.iter()
        .enumerate()
        .filter(|(_, c)| c.kind().is_text())
        .nth(n)
        .map(|(i, _)| i)
}

/// 1-based number shown next to each text row; categories get none.
#[must_use]
pub fn row_numbers(list: &[Channel]) -> Vec<Option<usize>> {
    let mut counter = 0;
    list.iter()
        .map(|c| {
            c.kind().is_text().then(|| {
                counter += 1;
                counter
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn text(id: u64, name: &str, position: i32) -> Channel {
        Channel::new(id, name, ChannelKind::Text).with_position(position)
    }

    fn category(id: u64, name: &str, position: i32) -> Channel {
        Channel::new(id, name, ChannelKind::Category).with_position(position)
    }

    fn names(list: &[Channel]) -> Vec<&str> {
        list.iter().map(Channel::name).collect()
    }

    #[test]
    fn test_orphans_lead_and_children_follow_their_category() {
        let channels = vec![
            text(10, "chat", 2).with_parent(1_u64),
            category(1, "General", 0),
            text(11, "welcome", 0),
        ];

        let list = build_display_list(&channels);

        assert_eq!(names(&list), vec!["welcome", "General", "chat"]);
        assert_eq!(first_selectable(&list), Some(0));
    }

    #[test]
    fn test_categories_and_children_sorted_by_position() {
        let channels = vec![
            category(2, "Second", 5),
            text(20, "b", 3).with_parent(2_u64),
            category(1, "First", 1),
            text(21, "a", 1).with_parent(2_u64),
            text(10, "z", 9).with_parent(1_u64),
            text(30, "lonely-2", 4),
            text(31, "lonely-1", 2),
        ];

        let list = build_display_list(&channels);

        assert_eq!(
            names(&list),
            vec!["lonely-1", "lonely-2", "First", "z", "Second", "a", "b"]
        );
    }

    #[test]
    fn test_dangling_parent_and_other_kinds_are_dropped() {
        let channels = vec![
            text(10, "ghost", 0).with_parent(99_u64),
            Channel::new(11_u64, "voice", ChannelKind::Other),
            category(1, "Empty", 0),
        ];

        let list = build_display_list(&channels);

        assert_eq!(names(&list), vec!["Empty"]);
        assert_eq!(first_selectable(&list), None);
    }

    #[test]
    fn test_equal_positions_keep_input_order() {
        let channels = vec![text(1, "first", 0), text(2, "second", 0), text(3, "third", 0)];

        assert_eq!(
            names(&build_display_list(&channels)),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn test_empty_channel_set() {
        assert!(build_display_list(&[]).is_empty());
    }

    fn sample() -> Vec<Channel> {
        // welcome, [Info], rules, news, [Empty]
        vec![
            text(1, "welcome", 0),
            category(2, "Info", 0),
            text(3, "rules", 0).with_parent(2_u64),
            text(4, "news", 1).with_parent(2_u64),
            category(5, "Empty", 1),
        ]
    }

    #[test_case(0, Some(2) ; "skips category going down")]
    #[test_case(2, Some(3) ; "adjacent text")]
    #[test_case(3, None ; "only categories below")]
    fn test_next_selectable(from: usize, expected: Option<usize>) {
        let list = build_display_list(&sample());
        assert_eq!(next_selectable(&list, from), expected);
    }

    #[test_case(2, Some(0) ; "skips category going up")]
    #[test_case(0, None ; "top of list")]
    #[test_case(4, Some(3) ; "from category row")]
    fn test_previous_selectable(from: usize, expected: Option<usize>) {
        let list = build_display_list(&sample());
        assert_eq!(previous_selectable(&list, from), expected);
    }

    #[test_case(0, Some(0))]
    #[test_case(1, Some(2))]
    #[test_case(2, Some(3))]
    #[test_case(3, None)]
    fn test_nth_selectable(n: usize, expected: Option<usize>) {
        let list = build_display_list(&sample());
        assert_eq!(nth_selectable(&list, n), expected);
    }

    #[test]
    fn test_row_numbers_skip_categories() {
        let list = build_display_list(&sample());
        assert_eq!(
            row_numbers(&list),
            vec![Some(1), None, Some(2), Some(3), None]
        );
    }
}
