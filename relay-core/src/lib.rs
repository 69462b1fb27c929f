//! # relay-core
//!
//! Transport-agnostic core of the relay bot: [`Bot`] and [`Handler`] traits, message/user/chat types,
//! [`RelayError`], and tracing initialization. Used by handler-chain, relay-telegram and relay-bot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{private_chat, Bot, Keyboard};
pub use error::{RelayError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User, TEXT_MESSAGE_TYPE,
};
