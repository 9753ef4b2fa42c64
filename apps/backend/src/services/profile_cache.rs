//! Cache-aside profile reads.
//!
//! Entries are keyed by username and live for one fixed TTL. A miss reads
//! the store and writes the result back; absent users are not cached.
//! Concurrent misses for the same key each read the store and each write an
//! equivalent entry.

use std::sync::Arc;

use time::Duration;
use tracing::debug;

use crate::auth::claims::Claims;
use crate::errors::DomainError;
use crate::logging::redact::Redacted;
use crate::repos::cache::{CacheBackend, CacheEntry};
use crate::repos::users::{Profile, UserStore};
use crate::utils::clock::Clock;

pub struct ProfileCache {
    store: Arc<dyn UserStore>,
    backend: Arc<dyn CacheBackend>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl ProfileCache {
    pub fn new(
        store: Arc<dyn UserStore>,
        backend: Arc<dyn CacheBackend>,
        clock: Arc<dyn Clock>,
        ttl: Duration,
    ) -> Self {
        Self {
            store,
            backend,
            clock,
            ttl,
        }
    }

    pub async fn get_profile(&self, identity: &Claims) -> Result<Profile, DomainError> {
        let key = identity.username.as_str();

        if let Some(entry) = self.backend.get(key).await? {
            if entry.is_live_at(self.clock.now()) {
                debug!(username = %Redacted(key), "profile cache hit");
                return Ok(entry.value);
            }
            debug!(username = %Redacted(key), "profile cache entry expired");
            self.backend.remove(key).await?;
        }

        let profile = self
            .store
            .find_profile(identity)
            .await?
            .ok_or(DomainError::ProfileNotFound)?;

        let entry = CacheEntry {
            value: profile.clone(),
            expires_at: self.clock.now() + self.ttl,
        };
        self.backend.put(key, entry).await?;
        debug!(username = %Redacted(key), "profile cache filled");

        Ok(profile)
    }
}
