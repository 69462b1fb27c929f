//! relay-bot binary. Loads `.env`, parses the CLI and runs the bot; exits with an error when BOT_TOKEN or ADMIN_ID is missing.

use anyhow::Result;
use clap::Parser;
use relay_bot::{load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token, admin_id } => {
            let config = load_config(token, admin_id)?;
            run_bot(config).await
        }
    }
}
