//! Cascading guild → channel → messages selection.

mod controller;
mod event;
mod state;

pub use controller::SelectionController;
pub use event::{Command, Event};
pub use state::{Direction, Panel, SelectionState};
