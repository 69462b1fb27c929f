//! # relay-telegram
//!
//! Telegram layer: teloxide → core adapters, [`relay_core::Bot`] implementation, connection config, REPL runner.
//! Knows nothing about relaying; it only moves messages between Telegram and a [`handler_chain::HandlerChain`].

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::run_repl;
