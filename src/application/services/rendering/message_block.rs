//! Assembly of one message into a display block.

use super::markup::{escape, truncate_to_width, visible_width};
use super::mentions::substitute_entities;
use super::wrap::wrap;
use crate::domain::entities::{Guild, Message, UserId};

/// Columns reserved to the right of the content (borders and scrollbar).
const GUTTER: usize = 2;

/// Inputs for rendering messages of one channel.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub guild: &'a Guild,
    /// Messages by this user get a bold author label.
    pub current_user: Option<UserId>,
    /// Fixed author label width.
    pub name_width: usize,
    /// Full width of the messages panel.
    pub panel_width: usize,
}

impl RenderContext<'_> {
    /// Columns available to message content on every visual line.
    #[must_use]
    pub const fn content_width(&self) -> usize {
        let width = self
            .panel_width
            .saturating_sub(self.name_width + 1 + GUTTER);
        if width == 0 { 1 } else { width }
    }
}

/// Name shown for the author: guild nickname, then the nickname carried on
/// the message, then the username.
fn author_name<'m>(message: &'m Message, guild: &'m Guild) -> &'m str {
    let author = message.author();
    guild
        .member(author.id())
        .and_then(|member| member.nick())
        .or_else(|| author.nick())
        .unwrap_or_else(|| author.username())
}

/// Right-aligned, fixed-width author label in markup.
#[must_use]
pub fn author_label(message: &Message, ctx: &RenderContext<'_>) -> String {
    let name = truncate_to_width(author_name(message, ctx.guild), ctx.name_width);
    let escaped = escape(name);
    let padding = " ".repeat(ctx.name_width.saturating_sub(visible_width(&escaped)));
    let bold = if ctx.current_user == Some(message.author().id()) {
        "{bold}"
    } else {
        ""
    };
    format!("{{yellow-fg}}{bold}{padding}{escaped}{{/}}")
}

/// Substituted, wrapped and indented content of a message.
///
/// The first visual line carries no indent since it follows the label; all
/// others are indented past the label column.
#[must_use]
pub fn render_content(message: &Message, ctx: &RenderContext<'_>) -> String {
    let substituted = substitute_entities(&escape(message.content()), ctx.guild);
    let width = ctx.content_width();
    let indent = " ".repeat(ctx.name_width + 1);

    let mut out = String::with_capacity(substituted.len());
    for (line_no, literal) in substituted.split('\n').enumerate() {
        for (visual_no, visual) in wrap(literal, width).enumerate() {
            if line_no > 0 || visual_no > 0 {
                out.push('\n');
                out.push_str(&indent);
            }
            out.push_str(visual);
        }
    }
    out
}

/// `<label> <content>` for one message.
#[must_use]
pub fn render_message(message: &Message, ctx: &RenderContext<'_>) -> String {
    format!("{} {}", author_label(message, ctx), render_content(message, ctx))
}
