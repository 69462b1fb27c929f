//! Relay bot config: Telegram connection, the admin's id, and the log file. Loaded from env.

use anyhow::{Context, Result};
use relay_telegram::TelegramConfig;
use std::env;

const DEFAULT_LOG_FILE: &str = "logs/relay-bot.log";

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub telegram: TelegramConfig,
    /// ADMIN_ID: the only user whose replies are relayed.
    pub admin_id: i64,
    /// LOG_FILE
    pub log_file: String,
}

impl RelayConfig {
    /// Loads from environment variables. `token` and `admin_id` (e.g. from the command line) override
    /// BOT_TOKEN and ADMIN_ID. Fails if either ends up missing or ADMIN_ID is not an integer.
    pub fn load(token: Option<String>, admin_id: Option<i64>) -> Result<Self> {
        let telegram = TelegramConfig::load(token)?;
        let admin_id = match admin_id {
            Some(id) => id,
            None => parse_admin_id(
                &env::var("ADMIN_ID").map_err(|_| anyhow::anyhow!("ADMIN_ID not set"))?,
            )?,
        };
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            telegram,
            admin_id,
            log_file,
        })
    }

    /// Validate config. Call after load() to fail fast before connecting.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if self.log_file.trim().is_empty() {
            anyhow::bail!("LOG_FILE is empty");
        }
        Ok(())
    }

    pub fn bot_token(&self) -> &str {
        &self.telegram.bot_token
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.telegram.telegram_api_url.as_deref()
    }
}

fn parse_admin_id(raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .with_context(|| format!("ADMIN_ID must be a numeric Telegram user id, got {:?}", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "BOT_TOKEN",
            "ADMIN_ID",
            "LOG_FILE",
            "TELEGRAM_API_URL",
            "TELOXIDE_API_URL",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");
        env::set_var("ADMIN_ID", "500");

        let config = RelayConfig::load(None, None).unwrap();

        assert_eq!(config.bot_token(), "test_token");
        assert_eq!(config.admin_id, 500);
        assert_eq!(config.log_file, "logs/relay-bot.log");
        assert!(config.telegram_api_url().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        clear_env();
        env::set_var("BOT_TOKEN", "custom_token");
        env::set_var("ADMIN_ID", " 123456789 ");
        env::set_var("LOG_FILE", "/tmp/relay.log");
        env::set_var("TELEGRAM_API_URL", "http://localhost:8081");

        let config = RelayConfig::load(None, None).unwrap();

        assert_eq!(config.bot_token(), "custom_token");
        assert_eq!(config.admin_id, 123456789);
        assert_eq!(config.log_file, "/tmp/relay.log");
        assert_eq!(config.telegram_api_url(), Some("http://localhost:8081"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_config_with_overrides() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");
        env::set_var("ADMIN_ID", "1");

        let config = RelayConfig::load(Some("cli_token".to_string()), Some(2)).unwrap();

        assert_eq!(config.bot_token(), "cli_token");
        assert_eq!(config.admin_id, 2);
    }

    #[test]
    #[serial]
    fn test_missing_token_fails() {
        clear_env();
        env::set_var("ADMIN_ID", "500");
        assert!(RelayConfig::load(None, None).is_err());
    }

    #[test]
    #[serial]
    fn test_missing_admin_id_fails() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");
        let err = RelayConfig::load(None, None).unwrap_err();
        assert!(err.to_string().contains("ADMIN_ID"));
    }

    #[test]
    #[serial]
    fn test_non_numeric_admin_id_fails() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");
        env::set_var("ADMIN_ID", "@admin");
        assert!(RelayConfig::load(None, None).is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_validate_telegram_api_url_invalid() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");
        env::set_var("ADMIN_ID", "500");
        env::set_var("TELEGRAM_API_URL", "not-a-valid-url");

        let config = RelayConfig::load(None, None).unwrap();
        assert!(config.validate().is_err());

        clear_env();
    }
}
