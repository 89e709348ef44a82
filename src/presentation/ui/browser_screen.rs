use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::StatefulWidget,
};

use crate::application::{Panel, SelectionState};
use crate::application::services::rendering::MessageBody;
use crate::domain::keybinding::Action;
use crate::infrastructure::config::UiConfig;
use crate::presentation::commands::CommandRegistry;
use crate::presentation::widgets::{
    ChannelsPanel, ChannelsPanelState, GuildsPanel, GuildsPanelState, MessagePane,
    MessagePaneState,
};

/// Per-panel state kept between frames.
#[derive(Default)]
pub struct BrowserScreenState {
    guilds: GuildsPanelState,
    channels: ChannelsPanelState,
    messages: MessagePaneState,
}

impl BrowserScreenState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll limit measured by the last drawn frame.
    #[must_use]
    pub const fn max_scroll_back(&self) -> Option<usize> {
        self.messages.max_scroll_back()
    }
}

/// Sidebar with guilds above channels, messages on the right.
pub struct BrowserScreen<'a> {
    selection: &'a SelectionState,
    body: MessageBody<'a>,
    registry: &'a CommandRegistry,
    ui: &'a UiConfig,
}

impl<'a> BrowserScreen<'a> {
    #[must_use]
    pub const fn new(
        selection: &'a SelectionState,
        body: MessageBody<'a>,
        registry: &'a CommandRegistry,
        ui: &'a UiConfig,
    ) -> Self {
        Self {
            selection,
            body,
            registry,
            ui,
        }
    }
}

impl StatefulWidget for BrowserScreen<'_> {
    type State = BrowserScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [sidebar, messages_area] =
            Layout::horizontal([Constraint::Length(self.ui.sidebar_width), Constraint::Min(0)])
                .areas(area);
        let [guilds_area, channels_area] =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(sidebar);

        let selection = self.selection;
        let focus = selection.focus();

        GuildsPanel::new(selection.guilds())
            .selected(selection.guild_index())
            .focused(focus == Panel::Guilds)
            .hotkey(self.registry.hotkey(Action::FocusGuilds))
            .render(guilds_area, buf, &mut state.guilds);

        ChannelsPanel::new(selection.channels())
            .active(selection.channel_index())
            .cursor(selection.channel_cursor())
            .focused(focus == Panel::Channels)
            .hotkey(self.registry.hotkey(Action::FocusChannels))
            .render(channels_area, buf, &mut state.channels);

        MessagePane::new(self.body)
            .guild(selection.current_guild())
            .channel(selection.current_channel())
            .current_user(selection.current_user())
            .name_width(self.ui.name_length)
            .scroll_back(selection.scroll_back())
            .focused(focus == Panel::Messages)
            .hotkey(self.registry.hotkey(Action::FocusMessages))
            .render(messages_area, buf, &mut state.messages);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{Event, SelectionController};
    use crate::domain::entities::{Channel, ChannelKind, Guild};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (area.y..area.bottom())
            .map(|y| {
                (area.x..area.right())
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_all_three_panels() {
        let mut controller = SelectionController::new();
        controller.reduce(Event::SetGuilds(vec![
            Guild::new(1_u64, "Rustaceans").with_channels(vec![
                Channel::new(10_u64, "general", ChannelKind::Text),
            ]),
        ]));
        let registry = CommandRegistry::new();
        let ui = UiConfig::default();
        let mut state = BrowserScreenState::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

        terminal
            .draw(|frame| {
                let screen = BrowserScreen::new(
                    controller.state(),
                    controller.message_body(),
                    &registry,
                    &ui,
                );
                frame.render_stateful_widget(screen, frame.area(), &mut state);
            })
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("[G]uilds (1)"));
        assert!(text.contains("1 Rustaceans"));
        assert!(text.contains("[C]hannels (1)"));
        assert!(text.contains("1 #general"));
        assert!(text.contains("[M] Rustaceans > general"));
        assert!(text.contains("Loading..."));
        assert_eq!(state.max_scroll_back(), Some(0));
    }
}
