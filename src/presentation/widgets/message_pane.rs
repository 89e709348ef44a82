//! Message history of the selected channel.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{
        Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget,
        Widget,
    },
};

use super::chrome::{PanelChromeStyle, hotkey_label, panel_block, panel_title};
use crate::application::services::rendering::{MessageBody, RenderContext, escape, render_body};
use crate::domain::entities::{Channel, Guild, UserId};
use crate::presentation::services::markup_renderer::markup_to_text;

/// Scroll bookkeeping shared between frames.
#[derive(Debug, Default)]
pub struct MessagePaneState {
    max_scroll_back: Option<usize>,
}

impl MessagePaneState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// How many lines the last frame could scroll back, if it was drawn.
    #[must_use]
    pub const fn max_scroll_back(&self) -> Option<usize> {
        self.max_scroll_back
    }
}

pub struct MessagePaneStyle {
    pub chrome: PanelChromeStyle,
    pub scrollbar_thumb: Style,
    pub scrollbar_track: Style,
}

impl Default for MessagePaneStyle {
    fn default() -> Self {
        Self {
            chrome: PanelChromeStyle::default(),
            scrollbar_thumb: Style::default().bg(Color::Gray),
            scrollbar_track: Style::default().bg(Color::White),
        }
    }
}

pub struct MessagePane<'a> {
    body: MessageBody<'a>,
    guild: Option<&'a Guild>,
    channel: Option<&'a Channel>,
    current_user: Option<UserId>,
    name_width: usize,
    scroll_back: usize,
    focused: bool,
    hotkey: Option<char>,
    style: MessagePaneStyle,
}

impl<'a> MessagePane<'a> {
    #[must_use]
    pub fn new(body: MessageBody<'a>) -> Self {
        Self {
            body,
            guild: None,
            channel: None,
            current_user: None,
            name_width: 10,
            scroll_back: 0,
            focused: false,
            hotkey: None,
            style: MessagePaneStyle::default(),
        }
    }

    #[must_use]
    pub const fn guild(mut self, guild: Option<&'a Guild>) -> Self {
        self.guild = guild;
        self
    }

    #[must_use]
    pub const fn channel(mut self, channel: Option<&'a Channel>) -> Self {
        self.channel = channel;
        self
    }

    #[must_use]
    pub const fn current_user(mut self, user: Option<UserId>) -> Self {
        self.current_user = user;
        self
    }

    #[must_use]
    pub const fn name_width(mut self, width: usize) -> Self {
        self.name_width = width;
        self
    }

    /// Lines scrolled up from the bottom.
    #[must_use]
    pub const fn scroll_back(mut self, lines: usize) -> Self {
        self.scroll_back = lines;
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
    pub fn style(mut self, style: MessagePaneStyle) -> Self {
        self.style = style;
        self
    }

    fn title(&self) -> String {
        let guild = self.guild.map_or_else(|| "No guild".to_string(), |g| escape(g.name()));
        let channel = self
            .channel
            .map_or_else(|| "No channel".to_string(), |c| escape(c.name()));
        format!("{} {guild} > {channel}", hotkey_label(self.hotkey, ""))
    }
}

impl StatefulWidget for MessagePane<'_> {
    type State = MessagePaneState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = panel_block(
            panel_title(&self.title(), self.focused, &self.style.chrome),
            Borders::TOP,
            &self.style.chrome,
        );
        let inner = block.inner(area);
        block.render(area, buf);

        let fallback = Guild::new(0_u64, "");
        let ctx = RenderContext {
            guild: self.guild.unwrap_or(&fallback),
            current_user: self.current_user,
            name_width: self.name_width,
            panel_width: usize::from(inner.width),
        };
        let text = markup_to_text(&render_body(self.body, &ctx));

        let total = text.lines.len();
        let viewport = usize::from(inner.height);
        let max_back = total.saturating_sub(viewport);
        let offset = max_back - self.scroll_back.min(max_back);
        state.max_scroll_back = Some(max_back);

        let visible: Vec<Line> = text.lines.into_iter().skip(offset).take(viewport).collect();
        Paragraph::new(visible).render(inner, buf);

        if max_back > 0 {
            let mut scrollbar_state = ScrollbarState::new(max_back)
                .position(offset)
                .viewport_content_length(viewport);
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .thumb_symbol(" ")
                .track_symbol(Some(" "))
                .thumb_style(self.style.scrollbar_thumb)
                .track_style(self.style.scrollbar_track)
                .render(inner, buf, &mut scrollbar_state);
        }
    }
}
