//! User repository seam for the domain layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::auth::claims::Claims;
use crate::errors::domain::DomainError;

/// Public projection of a user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub surname: String,
}

/// Private projection used only by login.
#[derive(Clone, PartialEq, Eq)]
pub struct UserCredentials {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

impl std::fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCredentials")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

/// Registration input, password already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub name: String,
    pub surname: String,
}

/// Persistence of user records.
///
/// Lookups return `Ok(None)` for absent rows; `Err` is reserved for the
/// store itself being unreachable (`DependencyUnavailable`).
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Profile of the user matching both the id and the username in `claims`.
    async fn find_profile(&self, claims: &Claims) -> Result<Option<Profile>, DomainError>;

    async fn find_credentials(&self, username: &str)
        -> Result<Option<UserCredentials>, DomainError>;

    /// True when a user with this id and username still exists.
    async fn exists(&self, subject_id: i64, username: &str) -> Result<bool, DomainError>;

    /// Insert `user` unless the username is taken. `None` means it was.
    async fn create_if_absent(&self, user: NewUser) -> Result<Option<Profile>, DomainError>;
}
