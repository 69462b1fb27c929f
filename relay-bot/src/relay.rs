//! Relay handler: forwards user text to the admin and routes the admin's replies back to the sender.
//!
//! | Sender | Replying to            | Result                                        |
//! |--------|------------------------|-----------------------------------------------|
//! | user   | anything               | annotated copy to admin, record, confirmation |
//! | admin  | a recorded copy        | admin's text to that user, confirmation       |
//! | admin  | an unrecorded message  | warning to admin, nothing relayed             |
//! | admin  | nothing                | how-to-reply hint, nothing relayed            |

use async_trait::async_trait;
use relay_core::{private_chat, Bot, Chat, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use crate::store::RelayStore;
use crate::texts;

pub struct RelayHandler {
    admin_id: i64,
    bot: Arc<dyn Bot>,
    store: Arc<dyn RelayStore>,
}

impl RelayHandler {
    pub fn new(admin_id: i64, bot: Arc<dyn Bot>, store: Arc<dyn RelayStore>) -> Self {
        Self {
            admin_id,
            bot,
            store,
        }
    }

    fn admin_chat(&self) -> Chat {
        private_chat(self.admin_id)
    }

    async fn reply(&self, message: &Message, text: &str) -> Result<HandlerResponse> {
        self.bot.reply_to(message, text).await?;
        Ok(HandlerResponse::Reply(text.to_string()))
    }

    /// Sends the annotated copy to the admin and records which user it came from.
    /// The user is told to retry if either the send or the record fails.
    async fn forward_to_admin(&self, message: &Message) -> Result<HandlerResponse> {
        let user_id = message.user.id;
        let copy = texts::forwarded(&message.user, &message.content);

        let forwarded = match self
            .bot
            .send_message_and_return_id(&self.admin_chat(), &copy)
            .await
        {
            Ok(forwarded_id) => self
                .store
                .record(&forwarded_id, user_id)
                .await
                .map(|()| forwarded_id),
            Err(e) => Err(e),
        };

        let forwarded_id = match forwarded {
            Ok(forwarded_id) => forwarded_id,
            Err(e) => {
                error!(error = %e, user_id = user_id, "Failed to forward message to admin");
                return self.reply(message, texts::FORWARD_FAILED).await;
            }
        };

        match self.store.len().await {
            Ok(relay_records) => info!(
                user_id = user_id,
                forwarded_message_id = %forwarded_id,
                relay_records = relay_records,
                "Forwarded user message to admin"
            ),
            Err(e) => warn!(
                error = %e,
                user_id = user_id,
                forwarded_message_id = %forwarded_id,
                "Forwarded user message to admin; relay record count unavailable"
            ),
        }
        self.reply(message, texts::FORWARD_OK).await
    }

    /// Sends the admin's text to the user the replied-to copy came from.
    async fn relay_admin_reply(
        &self,
        message: &Message,
        replied_to_id: &str,
    ) -> Result<HandlerResponse> {
        let Some(user_id) = self.store.resolve(replied_to_id).await? else {
            warn!(
                replied_to_message_id = %replied_to_id,
                "Admin replied to a message with no relay record"
            );
            return self.reply(message, texts::REPLY_UNMAPPED).await;
        };

        match self
            .bot
            .send_message(&private_chat(user_id), &message.content)
            .await
        {
            Ok(()) => {
                info!(user_id = user_id, replied_to_message_id = %replied_to_id, "Relayed admin reply");
                self.reply(message, &texts::reply_sent(user_id)).await
            }
            Err(e) => {
                error!(error = %e, user_id = user_id, "Failed to relay admin reply");
                self.reply(message, texts::REPLY_FAILED).await
            }
        }
    }
}

#[async_trait]
impl Handler for RelayHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_text() {
            debug!(
                user_id = message.user.id,
                message_type = %message.message_type,
                "Skipping non-text message"
            );
            return Ok(HandlerResponse::Ignore);
        }

        if message.user.id != self.admin_id {
            return self.forward_to_admin(message).await;
        }

        match message.reply_to_message_id.as_deref() {
            Some(replied_to_id) => self.relay_admin_reply(message, replied_to_id).await,
            None => self.reply(message, texts::ADMIN_REPLY_HINT).await,
        }
    }
}
