//! Channel list of the selected guild, with category separators.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

use super::chrome::{PanelChromeStyle, hotkey_label, panel_block, panel_title, shortcut_digit};
use crate::application::services::channel_tree::row_numbers;
use crate::application::services::rendering::{Align, escape, force_length, visible_width};
use crate::domain::entities::Channel;
use crate::presentation::services::markup_renderer::markup_to_line;

#[derive(Default)]
pub struct ChannelsPanelState {
    list_state: ListState,
}

impl ChannelsPanelState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Category name followed by a rule filling the rest of the row.
fn category_name(name: &str, width: usize) -> String {
    let used = visible_width(&escape(name));
    if used + 2 < width {
        format!("{name} {}", "─".repeat(width - used - 1))
    } else {
        force_length(name, width, Align::Left)
    }
}

/// Row markup for one display list entry. `number` is the 1-based text
/// channel number, `None` for categories.
#[must_use]
pub fn channel_row(channel: &Channel, number: Option<usize>, width: usize) -> String {
    let name_width = width.saturating_sub(3);
    match number {
        Some(number) => format!(
            "{{bold}}{}{{/}} #{}",
            shortcut_digit(number),
            escape(&force_length(channel.name(), name_width, Align::Left))
        ),
        None => format!("── {}", escape(&category_name(channel.name(), name_width))),
    }
}

pub struct ChannelsPanelStyle {
    pub chrome: PanelChromeStyle,
    pub active_row: Style,
}

impl Default for ChannelsPanelStyle {
    fn default() -> Self {
        Self {
            chrome: PanelChromeStyle::default(),
            active_row: Style::default().fg(Color::Green),
        }
    }
}

pub struct ChannelsPanel<'a> {
    channels: &'a [Channel],
    active: Option<usize>,
    cursor: Option<usize>,
    focused: bool,
    hotkey: Option<char>,
    style: ChannelsPanelStyle,
}

impl<'a> ChannelsPanel<'a> {
    #[must_use]
    pub fn new(channels: &'a [Channel]) -> Self {
        Self {
            channels,
            active: None,
            cursor: None,
            focused: false,
            hotkey: None,
            style: ChannelsPanelStyle::default(),
        }
    }

    /// Row of the channel whose messages are shown.
    #[must_use]
    pub const fn active(mut self, active: Option<usize>) -> Self {
        self.active = active;
        self
    }

    /// Highlighted row.
    #[must_use]
    pub const fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    #[must_use]
    pub const fn hotkey(mut self, hotkey: Option<char>) -> Self {
        self.hotkey = hotkey;
        self
    }

    #[must_use]
    pub fn style(mut self, style: ChannelsPanelStyle) -> Self {
        self.style = style;
        self
    }
}

impl StatefulWidget for ChannelsPanel<'_> {
    type State = ChannelsPanelState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let title = format!(
            "{} ({})",
            hotkey_label(self.hotkey, "Channels"),
            self.channels.len()
        );
        let block = panel_block(
            panel_title(&title, self.focused, &self.style.chrome),
            Borders::TOP | Borders::RIGHT,
            &self.style.chrome,
        );
        let inner = block.inner(area);
        block.render(area, buf);

        let width = usize::from(inner.width);
        let items: Vec<ListItem> = self
            .channels
            .iter()
            .zip(row_numbers(self.channels))
            .enumerate()
            .map(|(index, (channel, number))| {
                let row_style = if self.active == Some(index) {
                    self.style.active_row
                } else {
                    Style::default()
                };
                ListItem::new(markup_to_line(&channel_row(channel, number, width), row_style))
            })
            .collect();

        state.list_state.select(self.cursor);
        let list = List::new(items).highlight_style(self.style.chrome.selected_row);
        StatefulWidget::render(list, inner, buf, &mut state.list_state);
    }
}
