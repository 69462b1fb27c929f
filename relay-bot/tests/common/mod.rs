#![allow(dead_code)]

pub mod mock_bot;

use chrono::Utc;
use relay_core::{Chat, Message, User, TEXT_MESSAGE_TYPE};

pub const ADMIN_ID: i64 = 500;

pub fn user(id: i64) -> User {
    User {
        id,
        username: Some(format!("user{}", id)),
        first_name: Some("Test".to_string()),
        last_name: Some("User".to_string()),
    }
}

/// Text message sent in the sender's private chat.
pub fn text_message(id: &str, from: i64, content: &str) -> Message {
    Message {
        id: id.to_string(),
        user: user(from),
        chat: Chat {
            id: from,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: TEXT_MESSAGE_TYPE.to_string(),
        created_at: Utc::now(),
        reply_to_message_id: None,
    }
}

pub fn reply_message(id: &str, from: i64, content: &str, reply_to: &str) -> Message {
    Message {
        reply_to_message_id: Some(reply_to.to_string()),
        ..text_message(id, from, content)
    }
}
