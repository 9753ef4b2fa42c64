//! Listener and infrastructure settings. All optional.

use super::env::{optional, ConfigError, Lookup};
use crate::middleware::cors::parse_origins;

pub const HOST_VAR: &str = "BACKEND_HOST";
pub const PORT_VAR: &str = "BACKEND_PORT";
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const CORS_ORIGINS_VAR: &str = "CORS_ALLOWED_ORIGINS";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `None` selects the in-memory user store.
    pub database_url: Option<String>,
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&super::env::process_env())
    }

    pub fn from_lookup(lookup: &impl Lookup) -> Result<Self, ConfigError> {
        let port = match optional(lookup, PORT_VAR) {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: PORT_VAR,
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: optional(lookup, HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: optional(lookup, DATABASE_URL_VAR),
            cors_origins: optional(lookup, CORS_ORIGINS_VAR)
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
        })
    }
}
