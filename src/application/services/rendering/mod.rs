//! Text rendering pipeline: message content to styled, wrapped markup.
//!
//! Output is markup (see [`markup`]); turning it into terminal cells is the
//! presentation layer's job.

pub mod markup;
mod mentions;
mod message_block;
mod wrap;

pub use markup::{Align, escape, force_length, strip_tags, visible_width};
pub use mentions::substitute_entities;
pub use message_block::{RenderContext, author_label, render_content, render_message};
pub use wrap::{WrappedLines, wrap};

use crate::domain::entities::Message;

pub const LOADING_PLACEHOLDER: &str = "\n{center}{bold}Loading...{/}";
pub const FORBIDDEN_PLACEHOLDER: &str =
    "\n{center}{bold}{red-fg}You don't have permission to view this channel.{/}";
pub const EMPTY_PLACEHOLDER: &str = "\n{center}{bold}{red-fg}There are no messages here.{/}";

/// What the messages panel has to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageBody<'a> {
    /// No channel selected, or the selection is not a text channel.
    NoChannel,
    Loading,
    Forbidden,
    Messages(&'a [Message]),
}

/// Renders the messages panel content, one message block per line group.
#[must_use]
pub fn render_body(body: MessageBody<'_>, ctx: &RenderContext<'_>) -> String {
    match body {
        MessageBody::NoChannel => EMPTY_PLACEHOLDER.to_string(),
        MessageBody::Loading => LOADING_PLACEHOLDER.to_string(),
        MessageBody::Forbidden => FORBIDDEN_PLACEHOLDER.to_string(),
        MessageBody::Messages(messages) => messages
            .iter()
            .map(|message| render_message(message, ctx))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
