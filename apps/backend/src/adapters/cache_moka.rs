//! In-process cache backend.

use async_trait::async_trait;
use moka::future::Cache;

use crate::config::cache::CacheConfig;
use crate::errors::domain::DomainError;
use crate::repos::cache::{CacheBackend, CacheEntry};

/// Bounded moka cache. Moka's own time-to-live reclaims memory in the
/// background; freshness is still decided by the caller on read.
#[derive(Clone)]
pub struct MokaCacheBackend {
    entries: Cache<String, CacheEntry>,
}

impl MokaCacheBackend {
    pub fn new(config: &CacheConfig) -> Self {
        let entries = Cache::builder()
            .max_capacity(config.max_entries)
            .time_to_live(config.ttl.unsigned_abs())
            .build();
        Self { entries }
    }

    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }
}

#[async_trait]
impl CacheBackend for MokaCacheBackend {
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>, DomainError> {
        Ok(self.entries.get(key).await)
    }

    async fn put(&self, key: &str, entry: CacheEntry) -> Result<(), DomainError> {
        self.entries.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), DomainError> {
        self.entries.invalidate(key).await;
        Ok(())
    }
}
