//! Key/value seam behind the profile cache.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::errors::domain::DomainError;
use crate::repos::users::Profile;

/// A cached profile and the instant it stops being served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub value: Profile,
    #[serde(with = "time::serde::timestamp")]
    pub expires_at: OffsetDateTime,
}

impl CacheEntry {
    pub fn is_live_at(&self, now: OffsetDateTime) -> bool {
        now < self.expires_at
    }
}

/// Shared map of username to cache entry. Backends do not judge expiry;
/// the profile cache does that against its own clock.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>, DomainError>;
    /// Unconditional overwrite.
    async fn put(&self, key: &str, entry: CacheEntry) -> Result<(), DomainError>;
    async fn remove(&self, key: &str) -> Result<(), DomainError>;
}
