//! Redis cache backend shared across processes.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::errors::domain::{DependencyKind, DomainError};
use crate::repos::cache::{CacheBackend, CacheEntry};

const KEY_PREFIX: &str = "profile:";

/// Entries are stored as JSON under `profile:{username}` and written with
/// `SET .. EX` so Redis drops them on its own once stale.
#[derive(Clone)]
pub struct RedisCacheBackend {
    conn: ConnectionManager,
}

impl RedisCacheBackend {
    pub async fn connect(redis_url: &str) -> Result<Self, DomainError> {
        let client = Client::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;
        info!("connected profile cache to redis");
        Ok(Self { conn })
    }

    fn key(username: &str) -> String {
        format!("{KEY_PREFIX}{username}")
    }
}

/// Whole seconds left before `expires_at`, never below one so `EX` stays valid.
fn remaining_seconds(expires_at: OffsetDateTime, now: OffsetDateTime) -> u64 {
    let remaining = (expires_at - now).whole_seconds();
    u64::try_from(remaining).unwrap_or(0).max(1)
}

#[async_trait]
impl CacheBackend for RedisCacheBackend {
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>, DomainError> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn.get(Self::key(key)).await?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        match serde_json::from_str::<CacheEntry>(&raw) {
            Ok(entry) => Ok(Some(entry)),
            Err(e) => {
                // Unreadable payloads (older format, manual edits) are misses.
                warn!(error = %e, "discarding undecodable cache entry");
                Ok(None)
            }
        }
    }

    async fn put(&self, key: &str, entry: CacheEntry) -> Result<(), DomainError> {
        let payload = serde_json::to_string(&entry)
            .map_err(|e| DomainError::dependency(DependencyKind::Cache, e.to_string()))?;
        let seconds = remaining_seconds(entry.expires_at, OffsetDateTime::now_utc());

        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(Self::key(key), payload, seconds)
            .await?;
        debug!(seconds, "cached profile in redis");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), DomainError> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(Self::key(key)).await?;
        Ok(())
    }
}
