//! Numbered guild list.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

use super::chrome::{PanelChromeStyle, hotkey_label, panel_block, panel_title, shortcut_digit};
use crate::application::services::rendering::{Align, escape, force_length};
use crate::domain::entities::Guild;
use crate::presentation::services::markup_renderer::markup_to_line;

/// Scroll position of the guild list between frames.
#[derive(Default)]
pub struct GuildsPanelState {
    list_state: ListState,
}

impl GuildsPanelState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Row markup: bold shortcut digit, then the name fitted to `width` columns.
#[must_use]
pub fn guild_row(index: usize, name: &str, width: usize) -> String {
    let name_width = width.saturating_sub(2);
    format!(
        "{{bold}}{}{{/}} {}",
        shortcut_digit(index + 1),
        escape(&force_length(name, name_width, Align::Left))
    )
}

pub struct GuildsPanel<'a> {
    guilds: &'a [Guild],
    selected: Option<usize>,
    focused: bool,
    hotkey: Option<char>,
    style: PanelChromeStyle,
}

impl<'a> GuildsPanel<'a> {
    #[must_use]
    pub fn new(guilds: &'a [Guild]) -> Self {
        Self {
            guilds,
            selected: None,
            focused: false,
            hotkey: None,
            style: PanelChromeStyle::default(),
        }
    }

    #[must_use]
    pub const fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
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
    pub fn style(mut self, style: PanelChromeStyle) -> Self {
        self.style = style;
        self
    }
}

impl StatefulWidget for GuildsPanel<'_> {
    type State = GuildsPanelState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let title = format!(
            "{} ({})",
            hotkey_label(self.hotkey, "Guilds"),
            self.guilds.len()
        );
        let block = panel_block(
            panel_title(&title, self.focused, &self.style),
            Borders::TOP | Borders::RIGHT,
            &self.style,
        );
        let inner = block.inner(area);
        block.render(area, buf);

        let width = usize::from(inner.width);
        let items: Vec<ListItem> = self
            .guilds
            .iter()
            .enumerate()
            .map(|(index, guild)| {
                ListItem::new(markup_to_line(
                    &guild_row(index, guild.name(), width),
                    Style::default(),
                ))
            })
            .collect();

        state.list_state.select(self.selected);
        let list = List::new(items).highlight_style(self.style.selected_row);
        StatefulWidget::render(list, inner, buf, &mut state.list_state);
    }
}
