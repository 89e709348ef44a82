//! Main application orchestrator.

use std::sync::Arc;

use crossterm::event::{Event as TerminalEvent, EventStream, KeyEvent};
use crossterm::terminal::SetTitle;
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::NAME;
use crate::application::services::FetchTicket;
use crate::application::{Command, Event, SelectionController};
use crate::domain::entities::{ChannelId, User};
use crate::domain::keybinding::Action;
use crate::domain::ports::{ChatClientPort, ClientEvent};
use crate::infrastructure::config::UiConfig;
use crate::presentation::commands::{CommandRegistry, to_event};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::ui::{BrowserScreen, BrowserScreenState};

/// `cordview - user#1234 - 12 guilds`
#[must_use]
pub fn terminal_title(user: &User, guild_count: usize) -> String {
    format!("{NAME} - {} - {guild_count} guilds", user.tag())
}

pub struct App {
    controller: SelectionController,
    client: Arc<dyn ChatClientPort>,
    registry: CommandRegistry,
    ui: UiConfig,
    screen_state: BrowserScreenState,
    event_tx: mpsc::UnboundedSender<Event>,
    event_rx: mpsc::UnboundedReceiver<Event>,
    running: bool,
}

impl App {
    #[must_use]
    pub fn new(client: Arc<dyn ChatClientPort>, ui: UiConfig) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Self {
            controller: SelectionController::new(),
            client,
            registry: CommandRegistry::new(),
            ui,
            screen_state: BrowserScreenState::new(),
            event_tx,
            event_rx,
            running: true,
        }
    }

    /// # Errors
    /// Returns error if the client cannot connect or the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut client_events = self.client.connect()?;
        info!("Client connected");

        self.run_event_loop(terminal, &mut client_events).await?;

        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        client_events: &mut mpsc::UnboundedReceiver<ClientEvent>,
    ) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut client_open = true;

        self.draw(terminal)?;

        while self.running {
            let client_future = if client_open {
                futures_util::future::Either::Left(client_events.recv())
            } else {
                futures_util::future::Either::Right(std::future::pending())
            };

            let redraw = tokio::select! {
                biased;

                event = client_future => match event {
                    Some(event) => self.handle_client_event(event),
                    None => {
                        warn!("Client event stream closed");
                        client_open = false;
                        false
                    }
                },

                Some(event) = self.event_rx.recv() => self.apply(event),

                Some(Ok(event)) = terminal_events.next() => {
                    match self.handle_terminal_event(event) {
                        EventResult::Exit => {
                            self.running = false;
                            false
                        }
                        EventResult::Consumed => true,
                        EventResult::Continue => false,
                    }
                }
            };

            if redraw && self.running {
                self.draw(terminal)?;
            }
        }

        Ok(())
    }

    fn draw(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        terminal.draw(|frame| self.render(frame))?;
        if let Some(limit) = self.screen_state.max_scroll_back() {
            self.controller.set_scroll_limit(limit);
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let screen = BrowserScreen::new(
            self.controller.state(),
            self.controller.message_body(),
            &self.registry,
            &self.ui,
        );
        frame.render_stateful_widget(screen, frame.area(), &mut self.screen_state);
    }

    /// Feeds one event to the controller and carries out its commands.
    /// Returns whether a redraw was requested.
    fn apply(&mut self, event: Event) -> bool {
        let mut redraw = false;
        for command in self.controller.reduce(event) {
            match command {
                Command::FetchMessages { channel_id, ticket } => {
                    self.spawn_fetch(channel_id, ticket);
                }
                Command::Redraw => redraw = true,
            }
        }
        redraw
    }

    fn spawn_fetch(&self, channel_id: ChannelId, ticket: FetchTicket) {
        debug!(channel_id = %channel_id, ticket = %ticket, "Spawning message fetch");
        let client = Arc::clone(&self.client);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let result = client.fetch_messages(channel_id).await;
            let _ = tx.send(Event::FetchCompleted {
                channel_id,
                ticket,
                result,
            });
        });
    }

    fn handle_client_event(&mut self, event: ClientEvent) -> bool {
        let event = match event {
            ClientEvent::Ready {
                guilds,
                guild_positions,
                current_user,
            } => {
                info!(user = %current_user.tag(), guilds = guilds.len(), "Client ready");
                if self.ui.set_terminal_title {
                    self.set_terminal_title(&current_user, guilds.len());
                }
                Event::Ready {
                    guilds,
                    guild_positions,
                    current_user: current_user.id(),
                }
            }
            ClientEvent::MessageCreate(message) => Event::IncomingMessage(message),
            ClientEvent::GuildUpdate(guild) => Event::GuildUpdated(guild),
            ClientEvent::GuildDelete(guild_id) => Event::GuildRemoved(guild_id),
        };
        self.apply(event)
    }

    fn set_terminal_title(&self, user: &User, guild_count: usize) {
        let title = terminal_title(user, guild_count);
        if let Err(e) = crossterm::execute!(std::io::stdout(), SetTitle(&title)) {
            warn!(error = %e, "Failed to set terminal title");
        }
    }

    fn handle_terminal_event(&mut self, event: TerminalEvent) -> EventResult {
        match event {
            TerminalEvent::Key(key) if EventHandler::is_actionable(&key) => self.handle_key(key),
            TerminalEvent::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                if self.apply(Event::Resize) {
                    EventResult::Consumed
                } else {
                    EventResult::Continue
                }
            }
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        let Some(action) = self.registry.find_action(key) else {
            return EventResult::Continue;
        };
        if action == Action::Quit {
            info!("Quit requested");
            return EventResult::Exit;
        }

        let Some(event) = to_event(action, self.controller.state().focus()) else {
            return EventResult::Continue;
        };
        debug!(?action, "Key action");
        if self.apply(event) {
            EventResult::Consumed
        } else {
            EventResult::Continue
        }
    }
}
