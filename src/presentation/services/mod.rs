/// Markup to ratatui text conversion.
pub mod markup_renderer;
