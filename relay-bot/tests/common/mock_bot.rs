//! Mock implementation of [`relay_core::Bot`] for integration tests.
//!
//! Records every outgoing message and hands out increasing message ids, so tests can assert on who
//! received what without hitting Telegram. Sends to chats marked with `fail_chat` return an error.

use async_trait::async_trait;
use relay_core::{Bot, Chat, Keyboard, Message, RelayError, Result};
use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

/// One recorded outgoing message.
#[derive(Debug, Clone, PartialEq)]
pub struct SentRecord {
    pub chat_id: i64,
    pub text: String,
    pub keyboard: Option<Keyboard>,
    /// Id handed out for this message.
    pub message_id: String,
}

pub struct MockBot {
    next_id: AtomicI64,
    sent: Mutex<Vec<SentRecord>>,
    failing_chats: Mutex<HashSet<i64>>,
}

impl MockBot {
    /// Message ids start at 100.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            next_id: AtomicI64::new(100),
            sent: Mutex::new(Vec::new()),
            failing_chats: Mutex::new(HashSet::new()),
        })
    }

    /// Makes every later send to `chat_id` fail (e.g. user blocked the bot).
    pub fn fail_chat(&self, chat_id: i64) {
        self.failing_chats.lock().unwrap().insert(chat_id);
    }

    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self, chat_id: i64) -> Vec<SentRecord> {
        self.sent()
            .into_iter()
            .filter(|r| r.chat_id == chat_id)
            .collect()
    }

    fn push(&self, chat_id: i64, text: &str, keyboard: Option<Keyboard>) -> Result<String> {
        if self.failing_chats.lock().unwrap().contains(&chat_id) {
            return Err(RelayError::Bot(
                "Forbidden: bot was blocked by the user".to_string(),
            ));
        }
        let message_id = self.next_id.fetch_add(1, Ordering::SeqCst).to_string();
        self.sent.lock().unwrap().push(SentRecord {
            chat_id,
            text: text.to_string(),
            keyboard,
            message_id: message_id.clone(),
        });
        Ok(message_id)
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.push(chat.id, text, None).map(|_| ())
    }

    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String> {
        self.push(chat.id, text, None)
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.push(message.chat.id, text, None).map(|_| ())
    }

    async fn reply_with_keyboard(
        &self,
        message: &Message,
        text: &str,
        keyboard: &Keyboard,
    ) -> Result<()> {
        self.push(message.chat.id, text, Some(keyboard.clone()))
            .map(|_| ())
    }
}
