use std::fmt;

use jsonwebtoken::Algorithm;
use time::Duration;

use crate::auth::claims::TokenKind;
use crate::config::env::{self, require, require_bounded, ConfigError, Lookup};

pub const ACCESS_SECRET_VAR: &str = "ACCESS_TOKEN_SECRET";
pub const ACCESS_TTL_MINUTES_VAR: &str = "ACCESS_TOKEN_AGE_MINUTES";
pub const REFRESH_SECRET_VAR: &str = "REFRESH_TOKEN_SECRET";
pub const REFRESH_TTL_DAYS_VAR: &str = "REFRESH_TOKEN_AGE_DAYS";

/// One year of minutes.
pub const MAX_ACCESS_TTL_MINUTES: u32 = 525_600;
/// Ten years.
pub const MAX_REFRESH_TTL_DAYS: u32 = 3_650;

/// Signing secret and lifetime for one token kind.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenSettings {
    pub secret: Vec<u8>,
    pub ttl: Duration,
}

impl fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSettings")
            .field("secret", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}

/// JWT signing configuration for both token kinds.
///
/// TTLs arrive as whole minutes (access) and whole days (refresh) and are
/// converted to a `Duration` once, here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityConfig {
    pub access: TokenSettings,
    pub refresh: TokenSettings,
    /// JWT algorithm (HS256)
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    pub fn new(
        access_secret: impl Into<Vec<u8>>,
        access_ttl_minutes: u32,
        refresh_secret: impl Into<Vec<u8>>,
        refresh_ttl_days: u32,
    ) -> Self {
        Self {
            access: TokenSettings {
                secret: access_secret.into(),
                ttl: Duration::minutes(i64::from(access_ttl_minutes)),
            },
            refresh: TokenSettings {
                secret: refresh_secret.into(),
                ttl: Duration::days(i64::from(refresh_ttl_days)),
            },
            algorithm: Algorithm::HS256,
        }
    }

    pub fn settings(&self, kind: TokenKind) -> &TokenSettings {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env::process_env())
    }

    pub fn from_lookup(lookup: &impl Lookup) -> Result<Self, ConfigError> {
        let access_secret = require(lookup, ACCESS_SECRET_VAR)?;
        let access_ttl = require_bounded(lookup, ACCESS_TTL_MINUTES_VAR, MAX_ACCESS_TTL_MINUTES)?;
        let refresh_secret = require(lookup, REFRESH_SECRET_VAR)?;
        let refresh_ttl = require_bounded(lookup, REFRESH_TTL_DAYS_VAR, MAX_REFRESH_TTL_DAYS)?;

        Ok(Self::new(
            access_secret.into_bytes(),
            access_ttl,
            refresh_secret.into_bytes(),
            refresh_ttl,
        ))
    }

    /// Distinct throwaway secrets, 15 minute access / 7 day refresh.
    pub fn for_tests() -> Self {
        Self::new(
            b"test_access_secret_for_testing_purposes_only".to_vec(),
            15,
            b"test_refresh_secret_for_testing_purposes_only".to_vec(),
            7,
        )
    }
}
