//! Assembly and startup: builds the Telegram bot, relay store and handler chain, then runs the REPL.

use anyhow::Result;
use handler_chain::HandlerChain;
use relay_core::{init_tracing, Bot};
use relay_telegram::{run_repl, TelegramBotAdapter};
use std::sync::Arc;
use teloxide::{requests::Requester, utils::command::BotCommands};
use tokio::sync::RwLock;
use tracing::{error, info, instrument};

use crate::commands::{Command, CommandHandler};
use crate::config::RelayConfig;
use crate::logging::LoggingHandler;
use crate::relay::RelayHandler;
use crate::store::{InMemoryRelayStore, RelayStore};

/// Everything the handler chain needs, built from config.
#[derive(Clone)]
pub struct RelayComponents {
    pub admin_id: i64,
    pub teloxide_bot: teloxide::Bot,
    pub bot: Arc<dyn Bot>,
    pub store: Arc<dyn RelayStore>,
    pub bot_username: Arc<RwLock<Option<String>>>,
}

/// Builds components around the given store.
pub fn build_components(config: &RelayConfig, store: Arc<dyn RelayStore>) -> Result<RelayComponents> {
    let teloxide_bot = config.telegram.build_bot()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    Ok(RelayComponents {
        admin_id: config.admin_id,
        teloxide_bot,
        bot,
        store,
        bot_username: Arc::new(RwLock::new(None)),
    })
}

/// Builds the handler chain (logging → commands → relay).
pub fn build_handler_chain(
    admin_id: i64,
    bot: Arc<dyn Bot>,
    store: Arc<dyn RelayStore>,
    bot_username: Arc<RwLock<Option<String>>>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CommandHandler::new(
            admin_id,
            bot.clone(),
            bot_username,
        )))
        .add_handler(Arc::new(RelayHandler::new(admin_id, bot, store)))
}

/// Publishes the command list shown in Telegram's command menu. Failure only costs the menu.
async fn register_commands(bot: &teloxide::Bot) {
    match bot.set_my_commands(Command::bot_commands()).await {
        Ok(_) => info!("Bot commands registered"),
        Err(e) => error!(error = %e, "Failed to register bot commands"),
    }
}

/// Main entry: validate config, init logging, build components and chain, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: RelayConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    let components = build_components(&config, Arc::new(InMemoryRelayStore::new()))?;
    info!(
        admin_id = components.admin_id,
        telegram_api_url = ?config.telegram_api_url(),
        "Initializing relay bot"
    );

    register_commands(&components.teloxide_bot).await;

    let chain = build_handler_chain(
        components.admin_id,
        components.bot.clone(),
        components.store.clone(),
        components.bot_username.clone(),
    );

    info!("Bot started successfully");
    run_repl(components.teloxide_bot, chain, components.bot_username).await
}
