//! Profile cache settings.

use time::Duration;

use super::env::{optional, require_positive, ConfigError, Lookup};

pub const CACHE_TTL_VAR: &str = "PROFILE_CACHE_TTL_SECONDS";
pub const REDIS_URL_VAR: &str = "REDIS_URL";
pub const MAX_ENTRIES_VAR: &str = "PROFILE_CACHE_MAX_ENTRIES";

const DEFAULT_MAX_ENTRIES: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Lifetime of a cached profile. One value for the whole deployment.
    pub ttl: Duration,
    /// Shared Redis instance; `None` selects the in-process cache.
    pub redis_url: Option<String>,
    /// Capacity bound for the in-process cache.
    pub max_entries: u64,
}

impl CacheConfig {
    pub fn new(ttl_seconds: u32) -> Self {
        Self {
            ttl: Duration::seconds(i64::from(ttl_seconds)),
            redis_url: None,
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }

    pub fn with_redis_url(mut self, url: impl Into<String>) -> Self {
        self.redis_url = Some(url.into());
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&super::env::process_env())
    }

    pub fn from_lookup(lookup: &impl Lookup) -> Result<Self, ConfigError> {
        let ttl_seconds = require_positive(lookup, CACHE_TTL_VAR)?;

        let max_entries = match optional(lookup, MAX_ENTRIES_VAR) {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    key: MAX_ENTRIES_VAR,
                    reason: "must be a positive integer".to_string(),
                })?,
            None => DEFAULT_MAX_ENTRIES,
        };

        Ok(Self {
            ttl: Duration::seconds(i64::from(ttl_seconds)),
            redis_url: optional(lookup, REDIS_URL_VAR),
            max_entries,
        })
    }
}
