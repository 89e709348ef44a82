//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::args::CliArgs;

const APP_NAME: &str = "cordview";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// Configuration read from `config.toml`, overridable from the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    #[serde(default)]
    pub log_level: LogLevel,

    /// Snapshot file served by the offline chat client.
    #[serde(default)]
    pub snapshot: Option<PathBuf>,

    #[serde(default)]
    pub ui: UiConfig,
}

/// Layout of the browser panels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Width of the author column in the messages panel.
    #[serde(default = "default_name_length")]
    pub name_length: usize,

    /// Width of the guilds and channels column.
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,

    /// Show account and guild count in the terminal title.
    #[serde(default = "default_true")]
    pub set_terminal_title: bool,
}

const fn default_name_length() -> usize {
    10
}

const fn default_sidebar_width() -> u16 {
    26
}

const fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            name_length: default_name_length(),
            sidebar_width: default_sidebar_width(),
            set_terminal_title: true,
        }
    }
}

impl AppConfig {
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(snapshot) = args.snapshot {
            self.snapshot = Some(snapshot);
        }
        if let Some(name_length) = args.name_length {
            self.ui.name_length = name_length;
        }
        if let Some(sidebar_width) = args.sidebar_width {
            self.ui.sidebar_width = sidebar_width;
        }
    }

    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("cordview.log"))
    }

    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            snapshot: None,
            ui: UiConfig::default(),
        }
    }
}
