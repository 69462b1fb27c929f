//! # Relay bot
//!
//! Anonymous users write to the bot; each message is forwarded to a single admin annotated with who sent
//! it. The admin answers by replying to the forwarded copy and the bot routes the answer back.
//!
//! Wires relay-core, handler-chain and relay-telegram. The only state is the [`RelayStore`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod relay;
pub mod runner;
pub mod store;
pub mod texts;

pub use cli::{load_config, Cli, Commands};
pub use commands::{Command, CommandHandler};
pub use config::RelayConfig;
pub use logging::LoggingHandler;
pub use relay::RelayHandler;
pub use runner::{build_components, build_handler_chain, run_bot, RelayComponents};
pub use store::{InMemoryRelayStore, RelayRecord, RelayStore};
