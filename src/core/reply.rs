//! Reply shaping for chat callers: length limits and fallback notices.
//!
//! The engine never truncates; these helpers are what a bot wraps around
//! it before sending a message.

use crate::core::engine::OldeEngine;
use crate::schema::request::{Style, TransformOptions};

/// Platform message limit, in characters.
pub const MESSAGE_CHAR_LIMIT: usize = 2000;

pub const EMPTY_MESSAGE_NOTICE: &str = "That message hath no plain text to transform.";

pub const FAILURE_NOTICE: &str = "Anon, an error hath occur’d 😅";

/// A message to send back, and who may see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Visible to the whole channel.
    Public(String),
    /// Visible only to the invoking user.
    Private(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Self::Public(text) | Self::Private(text) => text,
        }
    }

    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private(_))
    }
}

/// Cut `text` to at most `limit` characters, on a char boundary.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Reply to an explicit "transform this text" command.
pub fn slash_reply(engine: &mut OldeEngine, text: &str, style: Option<&str>, limit: usize) -> Reply {
    let style = style.map(Style::parse).unwrap_or(engine.default_style());
    let out = engine.transform(text, &TransformOptions::with_style(style));
    Reply::Public(truncate_chars(&out, limit).to_string())
}

/// Reply to "transform that message". Messages without text content get
/// a private notice; everything else is rendered in plain style.
pub fn message_reply(engine: &mut OldeEngine, content: Option<&str>, limit: usize) -> Reply {
    match content {
        None | Some("") => Reply::Private(EMPTY_MESSAGE_NOTICE.to_string()),
        Some(text) => {
            let out = engine.transform(text, &TransformOptions::with_style(Style::Plain));
            Reply::Public(truncate_chars(&out, limit).to_string())
        }
    }
}

/// What to send when handling a command failed outside the engine.
pub fn failure_reply() -> Reply {
    Reply::Private(FAILURE_NOTICE.to_string())
}
