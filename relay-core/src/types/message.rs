//! Message type for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// Message type for text messages; anything else (photo, sticker, ...) carries another label.
pub const TEXT_MESSAGE_TYPE: &str = "text";

/// A single incoming message with sender, chat, content, and optional reply context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Transport message id (Telegram: numeric, unique per chat).
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Text of the message; empty for non-text messages.
    pub content: String,
    pub message_type: String,
    pub created_at: DateTime<Utc>,
    /// Id of the message this one replies to, if any.
    pub reply_to_message_id: Option<String>,
}

impl Message {
    pub fn is_text(&self) -> bool {
        self.message_type == TEXT_MESSAGE_TYPE
    }

    /// True if the text starts with `/` (a bot command invocation).
    pub fn is_command(&self) -> bool {
        self.is_text() && self.content.starts_with('/')
    }
}
