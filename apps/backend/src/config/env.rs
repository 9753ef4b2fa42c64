//! Typed access to environment-sourced settings.
//!
//! Loaders take a lookup function instead of reading `std::env` directly so
//! they can be exercised in tests without mutating process state.

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Source of raw setting values, keyed by variable name.
pub trait Lookup {
    fn get(&self, key: &str) -> Option<String>;
}

impl<F> Lookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// The process environment.
pub fn process_env() -> impl Lookup {
    |key: &str| std::env::var(key).ok()
}

/// A required, non-blank value.
pub fn require(lookup: &impl Lookup, key: &'static str) -> Result<String, ConfigError> {
    match lookup.get(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}

/// A required value parsed into `T`. The raw value is not echoed back in
/// the error since some keys hold secrets.
pub fn require_parsed<T>(lookup: &impl Lookup, key: &'static str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = require(lookup, key)?;
    raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}

/// An optional value; blank counts as unset.
pub fn optional(lookup: &impl Lookup, key: &str) -> Option<String> {
    lookup
        .get(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// A required positive integer.
pub fn require_positive(lookup: &impl Lookup, key: &'static str) -> Result<u32, ConfigError> {
    let value: u32 = require_parsed(lookup, key)?;
    if value == 0 {
        return Err(ConfigError::Invalid {
            key,
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(value)
}

/// A required integer in `1..=max`.
pub fn require_bounded(
    lookup: &impl Lookup,
    key: &'static str,
    max: u32,
) -> Result<u32, ConfigError> {
    let value = require_positive(lookup, key)?;
    if value > max {
        return Err(ConfigError::Invalid {
            key,
            reason: format!("must be at most {max}"),
        });
    }
    Ok(value)
}
