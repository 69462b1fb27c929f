//! # Relay store
//!
//! Maps the id of each admin-facing copy of a user message to the user who sent it. Written when a
//! user message is forwarded, read when the admin replies to that copy.
//!
//! [`RelayStore`] is injected into the relay handler so a persistent or bounded backend can replace
//! [`InMemoryRelayStore`] without touching call sites.
//!
//! Forwarded ids are unique because every copy lands in the same (admin) chat.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use relay_core::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// One forwarded message and the user it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayRecord {
    pub forwarded_message_id: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Storage for relay records.
#[async_trait]
pub trait RelayStore: Send + Sync {
    /// Associates `forwarded_message_id` with `user_id`, replacing any previous association.
    async fn record(&self, forwarded_message_id: &str, user_id: i64) -> Result<()>;

    /// Returns the user the forwarded message came from, if known. Does not remove the record.
    async fn resolve(&self, forwarded_message_id: &str) -> Result<Option<i64>>;

    /// Number of records held.
    async fn len(&self) -> Result<usize>;

    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}

/// Process-memory store. Unbounded and lost on restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRelayStore {
    records: Arc<RwLock<HashMap<String, RelayRecord>>>,
}

impl InMemoryRelayStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full record for a forwarded message, including when it was created.
    pub async fn get(&self, forwarded_message_id: &str) -> Option<RelayRecord> {
        self.records.read().await.get(forwarded_message_id).cloned()
    }
}

#[async_trait]
impl RelayStore for InMemoryRelayStore {
    async fn record(&self, forwarded_message_id: &str, user_id: i64) -> Result<()> {
        let record = RelayRecord {
            forwarded_message_id: forwarded_message_id.to_string(),
            user_id,
            created_at: Utc::now(),
        };
        self.records
            .write()
            .await
            .insert(record.forwarded_message_id.clone(), record);
        Ok(())
    }

    async fn resolve(&self, forwarded_message_id: &str) -> Result<Option<i64>> {
        Ok(self
            .records
            .read()
            .await
            .get(forwarded_message_id)
            .map(|r| r.user_id))
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.records.read().await.len())
    }
}
