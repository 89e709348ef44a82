//! Inline style markup: `{bold}`, `{cyan-fg}`, `{/}` and friends.
//!
//! Any `{` in user text is escaped to `{open}` and any `}` to `{close}`, so
//! every remaining brace pair in a rendered string is a tag produced by the
//! pipeline itself. Tags occupy no columns; escapes occupy one.

use std::str::CharIndices;

use unicode_width::UnicodeWidthChar;

/// Piece of a markup string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Plain text with no braces.
    Text(&'a str),
    /// An escaped brace or a stray `{` without a closing tag.
    Literal(char),
    /// A style tag, without its braces (`bold`, `/`, `cyan-fg`, ...).
    Tag(&'a str),
}

/// Tokenizer over a markup string, yielding byte offsets like
/// [`str::char_indices`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    #[must_use]
    pub const fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }
}

fn is_tag_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '/')
}

impl<'a> Iterator for Tokens<'a> {
    type Item = (usize, Token<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos;
        let rest = self.src.get(start..).filter(|r| !r.is_empty())?;

        if let Some(inner) = rest.strip_prefix('{') {
            if let Some(close) = inner.find('}') {
                let name = &inner[..close];
                if is_tag_name(name) {
                    self.pos += close + 2;
                    let token = match name {
                        "open" => Token::Literal('{'),
                        "close" => Token::Literal('}'),
                        _ => Token::Tag(name),
                    };
                    return Some((start, token));
                }
            }
            self.pos += 1;
            return Some((start, Token::Literal('{')));
        }

        let end = rest.find('{').unwrap_or(rest.len());
        self.pos += end;
        Some((start, Token::Text(&rest[..end])))
    }
}

/// One visible character of a markup string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Byte offset where the glyph's source starts.
    pub start: usize,
    /// Byte offset one past the glyph's source (covers a whole `{open}`).
    pub end: usize,
    pub ch: char,
    pub width: usize,
}

/// Visible characters of a markup string, skipping tags.
#[derive(Debug, Clone)]
pub struct Glyphs<'a> {
    tokens: Tokens<'a>,
    run: Option<(usize, CharIndices<'a>)>,
}

impl<'a> Glyphs<'a> {
    #[must_use]
    pub const fn new(src: &'a str) -> Self {
        Self {
            tokens: Tokens::new(src),
            run: None,
        }
    }
}

fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

impl Iterator for Glyphs<'_> {
    type Item = Glyph;

    fn next(&mut self) -> Option<Glyph> {
        loop {
            if let Some((base, chars)) = &mut self.run {
                if let Some((offset, ch)) = chars.next() {
                    let start = *base + offset;
                    return Some(Glyph {
                        start,
                        end: start + ch.len_utf8(),
                        ch,
                        width: char_width(ch),
                    });
                }
                self.run = None;
            }

            let (offset, token) = self.tokens.next()?;
            match token {
                Token::Text(text) => self.run = Some((offset, text.char_indices())),
                Token::Literal(ch) => {
                    return Some(Glyph {
                        start: offset,
                        end: self.tokens.pos,
                        ch,
                        width: 1,
                    });
                }
                Token::Tag(_) => {}
            }
        }
    }
}

/// Escapes braces so user text cannot inject tags.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '{' => out.push_str("{open}"),
            '}' => out.push_str("{close}"),
            _ => out.push(ch),
        }
    }
    out
}

/// Visible text of a markup string: tags removed, escapes resolved.
#[must_use]
pub fn strip_tags(markup: &str) -> String {
    Glyphs::new(markup).map(|g| g.ch).collect()
}

/// Number of terminal columns a markup string occupies.
#[must_use]
pub fn visible_width(markup: &str) -> usize {
    Glyphs::new(markup).map(|g| g.width).sum()
}

/// Horizontal placement for [`force_length`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

/// Longest prefix of plain `text` that fits in `width` columns.
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (offset, ch) in text.char_indices() {
        used += char_width(ch);
        if used > width {
            return &text[..offset];
        }
    }
    text
}

/// Fits plain `text` into exactly `width` columns.
///
/// Short text is padded according to `align`; long text is cut and ends
/// with `…`.
#[must_use]
pub fn force_length(text: &str, width: usize, align: Align) -> String {
    let used: usize = text.chars().map(char_width).sum();
    if used > width {
        if width == 0 {
            return String::new();
        }
        let kept = truncate_to_width(text, width - 1);
        let pad = width - 1 - kept.chars().map(char_width).sum::<usize>();
        return format!("{kept}…{}", " ".repeat(pad));
    }

    let pad = width - used;
    match align {
        Align::Left => format!("{text}{}", " ".repeat(pad)),
        Align::Right => format!("{}{text}", " ".repeat(pad)),
        Align::Center => {
            let left = pad / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(pad - left))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_tokens_split_text_tags_and_escapes() {
        let tokens: Vec<_> = Tokens::new("a{bold}b{open}{/}").map(|(_, t)| t).collect();

        assert_eq!(
            tokens,
            vec![
                Token::Text("a"),
                Token::Tag("bold"),
                Token::Text("b"),
                Token::Literal('{'),
                Token::Tag("/"),
            ]
        );
    }

    #[test]
    fn test_stray_brace_is_literal() {
        let tokens: Vec<_> = Tokens::new("{not a tag}x").map(|(_, t)| t).collect();

        assert_eq!(tokens[0], Token::Literal('{'));
        assert_eq!(tokens[1], Token::Text("not a tag}x"));
    }

    #[test]
    fn test_escape_round_trips_through_strip() {
        let raw = "fn main() { println!(\"}\"); }";
        let escaped = escape(raw);

        assert!(!escaped.contains("{ "));
        assert_eq!(strip_tags(&escaped), raw);
    }

    #[test]
    fn test_escape_output_is_not_reescaped() {
        assert_eq!(escape("{}"), "{open}{close}");
    }

    #[test_case("{bold}hello{/}", 5 ; "tags are zero width")]
    #[test_case("{open}x{close}", 3 ; "escapes are one column")]
    #[test_case("日本", 4 ; "wide characters")]
    #[test_case("", 0 ; "empty")]
    fn test_visible_width(markup: &str, expected: usize) {
        assert_eq!(visible_width(markup), expected);
    }

    #[test]
    fn test_glyph_offsets_cover_escapes() {
        let glyphs: Vec<_> = Glyphs::new("a{open}b").collect();

        assert_eq!(glyphs.len(), 3);
        assert_eq!((glyphs[1].start, glyphs[1].end, glyphs[1].ch), (1, 7, '{'));
        assert_eq!(glyphs[2].start, 7);
    }

    #[test_case("abc", 5, Align::Left, "abc  ")]
    #[test_case("abc", 5, Align::Right, "  abc")]
    #[test_case("abc", 6, Align::Center, " abc  ")]
    #[test_case("abcdef", 4, Align::Left, "abc…")]
    #[test_case("abcd", 4, Align::Right, "abcd")]
    #[test_case("abc", 0, Align::Left, "")]
    fn test_force_length(text: &str, width: usize, align: Align, expected: &str) {
        assert_eq!(force_length(text, width, align), expected);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("alexander", 4), "alex");
        assert_eq!(truncate_to_width("bob", 4), "bob");
        assert_eq!(truncate_to_width("日本語", 3), "日");
    }
}
