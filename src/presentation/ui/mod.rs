//! UI screens.

mod app;
mod browser_screen;

pub use app::{App, terminal_title};
pub use browser_screen::{BrowserScreen, BrowserScreenState};
