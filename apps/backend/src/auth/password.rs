//! Password hashing.

use std::sync::Arc;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

use crate::errors::domain::{DependencyKind, DomainError};

/// One-way salted hashing of user secrets.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, secret: &str) -> Result<String, DomainError>;
    /// False for a mismatch and for a digest that does not parse.
    fn compare(&self, secret: &str, digest: &str) -> bool;
}

/// Argon2id with fixed parameters; digests are PHC strings.
#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

impl Argon2Hasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: Params) -> Self {
        Self { params }
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, secret: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(secret.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| DomainError::dependency(DependencyKind::Hasher, e.to_string()))
    }

    fn compare(&self, secret: &str, digest: &str) -> bool {
        PasswordHash::new(digest)
            .map(|parsed| {
                self.argon2()
                    .verify_password(secret.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}

/// Hash on the blocking pool.
pub async fn hash_blocking(
    hasher: Arc<dyn CredentialHasher>,
    secret: String,
) -> Result<String, DomainError> {
    tokio::task::spawn_blocking(move || hasher.hash(&secret))
        .await
        .map_err(|e| DomainError::dependency(DependencyKind::Hasher, e.to_string()))?
}

/// Compare on the blocking pool.
pub async fn compare_blocking(
    hasher: Arc<dyn CredentialHasher>,
    secret: String,
    digest: String,
) -> Result<bool, DomainError> {
    tokio::task::spawn_blocking(move || hasher.compare(&secret, &digest))
        .await
        .map_err(|e| DomainError::dependency(DependencyKind::Hasher, e.to_string()))
}
