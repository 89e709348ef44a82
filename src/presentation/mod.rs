//! Presentation layer with UI components and event handling.

/// Key bindings and their translation into selection events.
pub mod commands;
/// Event handling.
pub mod events;
/// Rendering services.
pub mod services;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
