//! Application layer: pure services and the selection state machine.

/// Selection controller.
pub mod selection;
/// Channel ordering, message cache and rendering.
pub mod services;

pub use selection::{Command, Direction, Event, Panel, SelectionController, SelectionState};
