//! Bot commands: `/start` greets the admin and users differently, `/me` shows the sender's chat id.

use async_trait::async_trait;
use relay_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use teloxide::utils::command::BotCommands;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::texts;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "start talking to the admin.")]
    Start,
    #[command(description = "show your chat ID.")]
    Me,
}

impl Command {
    /// Parses the first word of `text` (`/start`, `/START`, `/start@botname`); arguments such as deep-link
    /// payloads are ignored. The command name is matched case-insensitively, the bot name as given.
    pub fn parse_first_word(text: &str, bot_username: &str) -> Option<Self> {
        let first = text.split_whitespace().next()?;
        let normalized = match first.split_once('@') {
            Some((command, bot)) => format!("{}@{}", command.to_lowercase(), bot),
            None => first.to_lowercase(),
        };
        Self::parse(&normalized, bot_username).ok()
    }
}

/// Answers recognized commands and swallows unrecognized ones so they are never relayed.
pub struct CommandHandler {
    admin_id: i64,
    bot: Arc<dyn Bot>,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl CommandHandler {
    pub fn new(admin_id: i64, bot: Arc<dyn Bot>, bot_username: Arc<RwLock<Option<String>>>) -> Self {
        Self {
            admin_id,
            bot,
            bot_username,
        }
    }

    async fn start(&self, message: &Message) -> Result<HandlerResponse> {
        if message.user.id == self.admin_id {
            self.bot.reply_to(message, texts::ADMIN_GREETING).await?;
            return Ok(HandlerResponse::Reply(texts::ADMIN_GREETING.to_string()));
        }

        let keyboard = vec![vec![texts::ORDER_BUTTON.to_string()]];
        self.bot
            .reply_with_keyboard(message, texts::USER_GREETING, &keyboard)
            .await?;
        Ok(HandlerResponse::Reply(texts::USER_GREETING.to_string()))
    }

    async fn me(&self, message: &Message) -> Result<HandlerResponse> {
        let text = texts::chat_id(message.user.id);
        self.bot.reply_to(message, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_command() {
            return Ok(HandlerResponse::Continue);
        }

        let bot_username = self.bot_username.read().await.clone().unwrap_or_default();
        match Command::parse_first_word(&message.content, &bot_username) {
            Some(Command::Start) => {
                info!(user_id = message.user.id, "step: /start");
                self.start(message).await
            }
            Some(Command::Me) => {
                info!(user_id = message.user.id, "step: /me");
                self.me(message).await
            }
            None => {
                info!(
                    user_id = message.user.id,
                    command = %message.content,
                    "Ignoring unrecognized command"
                );
                Ok(HandlerResponse::Stop)
            }
        }
    }
}
