//! Markup-aware word wrapping.

use super::markup::{Glyph, Glyphs};

/// Lazily splits one line of markup into visual lines of at most `width`
/// columns.
///
/// A line that fits is yielded whole. Otherwise the break point is the
/// first space found walking back from the column boundary (never the very
/// first glyph); that space is consumed. With no such space the line is
/// hard-broken at the boundary and nothing is lost. Tags are never split.
///
/// The iterator is `Clone`, so a wrap can be restarted from any point.
#[derive(Debug, Clone)]
pub struct WrappedLines<'a> {
    rest: Option<&'a str>,
    width: usize,
}

impl<'a> WrappedLines<'a> {
    #[must_use]
    pub const fn new(line: &'a str, width: usize) -> Self {
        Self {
            rest: Some(line),
            width,
        }
    }
}

impl<'a> Iterator for WrappedLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest.take()?;

        let mut window: Vec<Glyph> = Vec::new();
        let mut used = 0;
        let mut overflow = None;
        for glyph in Glyphs::new(rest) {
            if used + glyph.width > self.width {
                overflow = Some(glyph);
                break;
            }
            used += glyph.width;
            window.push(glyph);
        }

        let Some(boundary) = overflow else {
            return Some(rest);
        };

        let space = std::iter::once(&boundary)
            .filter(|_| !window.is_empty())
            .chain(window.iter().skip(1).rev())
            .find(|g| g.ch == ' ');

        let (line, remainder) = match (space, window.is_empty()) {
            (Some(space), _) => (&rest[..space.start], &rest[space.end..]),
            // A single glyph wider than the whole line still has to go somewhere.
            (None, true) => (&rest[..boundary.end], &rest[boundary.end..]),
            (None, false) => (&rest[..boundary.start], &rest[boundary.start..]),
        };
        if space.is_some() || !remainder.is_empty() {
            self.rest = Some(remainder);
        }
        Some(line)
    }
}

/// Wraps `line` to `width` columns.
#[must_use]
pub fn wrap(line: &str, width: usize) -> WrappedLines<'_> {
    WrappedLines::new(line, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::rendering::markup::strip_tags;

    fn lines(line: &str, width: usize) -> Vec<&str> {
        wrap(line, width).collect()
    }

    #[test]
    fn test_short_line_is_untouched() {
        assert_eq!(lines("hello", 10), vec!["hello"]);
        assert_eq!(lines("", 10), vec![""]);
    }

    #[test]
    fn test_exact_width_fits() {
        assert_eq!(lines("abcdefghij", 10), vec!["abcdefghij"]);
    }

    #[test]
    fn test_breaks_at_last_space_before_boundary() {
        assert_eq!(
            lines("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_space_exactly_at_boundary_is_consumed() {
        assert_eq!(lines("abcde fgh", 5), vec!["abcde", "fgh"]);
    }

    #[test]
    fn test_hard_break_loses_nothing() {
        let wrapped = lines("abcdefghijklmnopqrstuvwxyz", 10);

        assert_eq!(wrapped, vec!["abcdefghij", "klmnopqrst", "uvwxyz"]);
        assert_eq!(wrapped.concat(), "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn test_leading_space_is_not_a_break_point() {
        assert_eq!(lines(" abcdefgh", 4), vec![" abc", "defg", "h"]);
    }

    #[test]
    fn test_rejoined_lines_reconstruct_input() {
        let input = "lorem ipsum dolor sit amet, consectetur adipiscing elit";
        for width in 1..=input.len() {
            let wrapped = lines(input, width);
            let mut rest = input;
            let mut rebuilt = String::new();
            for (i, line) in wrapped.iter().enumerate() {
                assert!(line.chars().count() <= width, "width {width}: {line:?}");
                assert!(rest.starts_with(line), "width {width}: {line:?} out of place");
                rebuilt.push_str(line);
                rest = &rest[line.len()..];
                // A break consumes at most the one space it happened at.
                if i + 1 < wrapped.len() {
                    if let Some(after) = rest.strip_prefix(' ') {
                        rebuilt.push(' ');
                        rest = after;
                    }
                }
            }
            assert_eq!(rebuilt, input, "width {width}");
        }
    }

    #[test]
    fn test_tags_take_no_room_and_are_never_split() {
        let markup = "{bold}{cyan-fg}@alice{/} says hello";
        let wrapped = lines(markup, 12);

        assert_eq!(wrapped, vec!["{bold}{cyan-fg}@alice{/} says", "hello"]);
        assert_eq!(strip_tags(wrapped[0]), "@alice says");
    }

    #[test]
    fn test_escapes_count_as_one_column() {
        assert_eq!(lines("{open}{open}{open}{open}", 2), vec!["{open}{open}", "{open}{open}"]);
    }

    #[test]
    fn test_zero_width_still_makes_progress() {
        assert_eq!(lines("abc", 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_restartable_via_clone() {
        let mut iter = wrap("aaa bbb ccc", 3);
        iter.next();
        let replay: Vec<_> = iter.clone().collect();

        assert_eq!(replay, vec!["bbb", "ccc"]);
        assert_eq!(iter.collect::<Vec<_>>(), replay);
    }
}
