//! Cordview - a terminal browser for chat guilds, channels and messages.
//!
//! Guilds and their channels are listed in a sidebar; selecting a text
//! channel loads its history into the messages panel, where live messages
//! are appended as they arrive.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the selection controller and pure services.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and client adapters.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "cordview";
