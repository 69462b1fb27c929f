//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::RelayConfig;

#[derive(Parser)]
#[command(name = "relay-bot")]
#[command(about = "Telegram bot relaying user messages to a single admin", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the relay bot (config from env; flags override BOT_TOKEN and ADMIN_ID).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        #[arg(short, long)]
        admin_id: Option<i64>,
    },
}

/// Load RelayConfig from environment, applying command-line overrides.
pub fn load_config(token: Option<String>, admin_id: Option<i64>) -> Result<RelayConfig> {
    RelayConfig::load(token, admin_id)
}
