//! Bot abstraction for sending messages.
//!
//! [`Bot`] is transport-agnostic; relay-telegram implements it via teloxide and tests substitute a recording mock.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Reply keyboard layout: rows of button labels.
pub type Keyboard = Vec<Vec<String>>;

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a text message and returns the id the transport assigned to it.
    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String>;
    /// Sends a reply into the chat the message came from.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Sends a reply into the message's chat with a persistent reply keyboard.
    async fn reply_with_keyboard(
        &self,
        message: &Message,
        text: &str,
        keyboard: &Keyboard,
    ) -> Result<()>;
}

/// Private chat with a user. In Telegram a user's private chat id equals the user id.
pub fn private_chat(user_id: i64) -> Chat {
    Chat {
        id: user_id,
        chat_type: "private".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_chat_uses_user_id() {
        let chat = private_chat(42);
        assert_eq!(chat.id, 42);
        assert_eq!(chat.chat_type, "private");
    }
}
