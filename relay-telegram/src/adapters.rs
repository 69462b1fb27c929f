//! Adapters from Telegram (teloxide) types to relay_core types.

use relay_core::{Chat, Message, ToCoreMessage, ToCoreUser, User, TEXT_MESSAGE_TYPE};

/// Message type label for everything that is not plain text.
const NON_TEXT_MESSAGE_TYPE: &str = "other";

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let text = self.0.text();
        Message {
            id: self.0.id.to_string(),
            user: self.sender(),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: if self.0.chat.is_private() {
                    "private".to_string()
                } else {
                    format!("{:?}", self.0.chat.kind)
                },
            },
            content: text.unwrap_or("").to_string(),
            message_type: match text {
                Some(_) => TEXT_MESSAGE_TYPE.to_string(),
                None => NON_TEXT_MESSAGE_TYPE.to_string(),
            },
            created_at: self.0.date,
            reply_to_message_id: self.0.reply_to_message().map(|m| m.id.to_string()),
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    /// Sender of the message; channel posts have none and map to user id 0.
    fn sender(&self) -> User {
        self.0
            .from
            .as_ref()
            .map(|u| TelegramUserWrapper(u).to_core())
            .unwrap_or_else(|| User {
                id: 0,
                username: None,
                first_name: None,
                last_name: None,
            })
    }
}
