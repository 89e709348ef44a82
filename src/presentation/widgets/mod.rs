mod channels_panel;
mod chrome;
mod guilds_panel;
mod message_pane;

pub use channels_panel::{ChannelsPanel, ChannelsPanelState, ChannelsPanelStyle};
pub use chrome::PanelChromeStyle;
pub use guilds_panel::{GuildsPanel, GuildsPanelState};
pub use message_pane::{MessagePane, MessagePaneState, MessagePaneStyle};
