//! Turns style markup into ratatui text.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use tracing::trace;

use crate::application::services::rendering::markup::{Token, Tokens};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineAlign {
    Left,
    Center,
    Right,
}

fn color_from_name(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        "dark-gray" | "dark-grey" => Color::DarkGray,
        "light-red" => Color::LightRed,
        "light-green" => Color::LightGreen,
        "light-yellow" => Color::LightYellow,
        "light-blue" => Color::LightBlue,
        "light-magenta" => Color::LightMagenta,
        "light-cyan" => Color::LightCyan,
        _ => return None,
    };
    Some(color)
}

fn style_for_tag(name: &str) -> Option<Style> {
    match name {
        "bold" => Some(Style::new().add_modifier(Modifier::BOLD)),
        "underline" => Some(Style::new().add_modifier(Modifier::UNDERLINED)),
        "italic" => Some(Style::new().add_modifier(Modifier::ITALIC)),
        "inverse" => Some(Style::new().add_modifier(Modifier::REVERSED)),
        _ => {
            if let Some(color) = name.strip_suffix("-fg") {
                color_from_name(color).map(|c| Style::new().fg(c))
            } else if let Some(color) = name.strip_suffix("-bg") {
                color_from_name(color).map(|c| Style::new().bg(c))
            } else {
                None
            }
        }
    }
}

struct Builder {
    base: Style,
    stack: Vec<(String, Style)>,
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    align: LineAlign,
}

impl Builder {
    fn new(base: Style) -> Self {
        Self {
            base,
            stack: Vec::new(),
            lines: Vec::new(),
            spans: Vec::new(),
            align: LineAlign::Left,
        }
    }

    fn style(&self) -> Style {
        self.stack
            .iter()
            .fold(self.base, |acc, (_, style)| acc.patch(*style))
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let style = self.style();
        match self.spans.last_mut() {
            Some(last) if last.style == style => last.content.to_mut().push_str(text),
            _ => self.spans.push(Span::styled(text.to_string(), style)),
        }
    }

    fn finish_line(&mut self) {
        let line = Line::from(std::mem::take(&mut self.spans));
        let line = match self.align {
            LineAlign::Left => line,
            LineAlign::Center => line.centered(),
            LineAlign::Right => line.right_aligned(),
        };
        self.lines.push(line);
        self.align = LineAlign::Left;
    }

    fn apply_tag(&mut self, name: &str) {
        match name {
            "/" => self.stack.clear(),
            "center" => self.align = LineAlign::Center,
            "right" => self.align = LineAlign::Right,
            "left" => self.align = LineAlign::Left,
            _ => {
                if let Some(closed) = name.strip_prefix('/') {
                    if let Some(pos) = self.stack.iter().rposition(|(n, _)| n == closed) {
                        self.stack.remove(pos);
                    }
                } else if let Some(style) = style_for_tag(name) {
                    self.stack.push((name.to_string(), style));
                } else {
                    trace!(tag = name, "Ignoring unknown markup tag");
                }
            }
        }
    }

    fn build(mut self) -> Text<'static> {
        self.finish_line();
        Text::from(self.lines)
    }
}

/// Converts markup to styled text. Newlines start a new line without
/// resetting the active styles; alignment tags apply to the line they
/// appear on.
#[must_use]
pub fn markup_to_text(markup: &str) -> Text<'static> {
    markup_to_text_with_base(markup, Style::default())
}

/// Like [`markup_to_text`], layering all tags over `base`.
#[must_use]
pub fn markup_to_text_with_base(markup: &str, base: Style) -> Text<'static> {
    let mut builder = Builder::new(base);
    for (_, token) in Tokens::new(markup) {
        match token {
            Token::Text(text) => {
                let mut parts = text.split('\n');
                if let Some(first) = parts.next() {
                    builder.push_text(first);
                }
                for part in parts {
                    builder.finish_line();
                    builder.push_text(part);
                }
            }
            Token::Literal(ch) => builder.push_text(ch.encode_utf8(&mut [0; 4])),
            Token::Tag(name) => builder.apply_tag(name),
        }
    }
    builder.build()
}

/// Single-line variant for list rows and titles. Anything after the first
/// newline is dropped.
#[must_use]
pub fn markup_to_line(markup: &str, base: Style) -> Line<'static> {
    markup_to_text_with_base(markup, base)
        .lines
        .into_iter()
        .next()
        .unwrap_or_default()
}
