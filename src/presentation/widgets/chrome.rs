//! Shared panel chrome: titles, borders and number shortcuts.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders},
};

use crate::presentation::services::markup_renderer::markup_to_line;

pub struct PanelChromeStyle {
    pub border: Style,
    pub title: Style,
    pub selected_row: Style,
}

impl Default for PanelChromeStyle {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Gray),
            title: Style::default().add_modifier(Modifier::BOLD),
            selected_row: Style::default().fg(Color::Black).bg(Color::White),
        }
    }
}

/// `[G]uilds` when the label starts with the hotkey, `[M] Label` otherwise.
#[must_use]
pub fn hotkey_label(hotkey: Option<char>, label: &str) -> String {
    let Some(key) = hotkey else {
        return label.to_string();
    };
    let mut chars = label.chars();
    match chars.next() {
        Some(first) if first.eq_ignore_ascii_case(&key) => {
            format!("[{}]{}", first.to_ascii_uppercase(), chars.as_str())
        }
        Some(_) => format!("[{}] {label}", key.to_ascii_uppercase()),
        None => format!("[{}]", key.to_ascii_uppercase()),
    }
}

/// Title line from markup; a focused panel's title is green and underlined.
#[must_use]
pub fn panel_title(markup: &str, focused: bool, style: &PanelChromeStyle) -> Line<'static> {
    let markup = if focused {
        format!(" {{green-fg}}{{underline}}{markup}{{/}} ")
    } else {
        format!(" {markup} ")
    };
    markup_to_line(&markup, style.title)
}

#[must_use]
pub fn panel_block(
    title: Line<'static>,
    borders: Borders,
    style: &PanelChromeStyle,
) -> Block<'static> {
    Block::default()
        .borders(borders)
        .border_style(style.border)
        .title(title)
}

/// Number key shown before the `position`-th (1-based) row: `1`..`9`, then
/// `0` for the tenth, blank after that.
#[must_use]
pub const fn shortcut_digit(position: usize) -> char {
    match position {
        1..=9 => (b'0' + position as u8) as char,
        10 => '0',
        _ => ' ',
    }
}
