//! Error type for the relay core.

use thiserror::Error;

/// Top-level error for transport and storage failures.
#[derive(Error, Debug)]
pub enum RelayError {
    /// The messaging transport rejected or failed a request (e.g. the user blocked the bot).
    #[error("Bot error: {0}")]
    Bot(String),

    /// A relay store backend failed.
    #[error("Store error: {0}")]
    Store(String),
}

/// Result type for core operations; uses [`RelayError`].
pub type Result<T> = std::result::Result<T, RelayError>;
