use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "cordview",
    version,
    about = "Browse chat guilds, channels and message history in the terminal",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Snapshot file to browse.
    #[arg(short, long, value_name = "PATH", env = "CORDVIEW_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    /// Width of the author column.
    #[arg(long, env = "CORDVIEW_NAME_LENGTH")]
    pub name_length: Option<usize>,

    /// Width of the guilds and channels column.
    #[arg(long)]
    pub sidebar_width: Option<u16>,
}
