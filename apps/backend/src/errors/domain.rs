//! Domain-level error type used across services and adapters.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert with the provided
//! `From<DomainError> for AppError` implementation.

use thiserror::Error;

/// Which collaborator failed when a `DependencyUnavailable` is raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    UserStore,
    Cache,
    Hasher,
}

/// Central domain error type. Every variant is terminal for the operation
/// in progress; nothing here is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("claims are missing a subject id or username")]
    MalformedClaims,
    #[error("token is invalid")]
    InvalidToken,
    #[error("token has expired")]
    TokenExpired,
    #[error("no token was presented")]
    MissingToken,
    #[error("token subject no longer exists")]
    SubjectNotFound,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("user not found")]
    UserNotFound,
    #[error("profile not found")]
    ProfileNotFound,
    #[error("username is already taken")]
    DuplicateUsername,
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0:?} unavailable: {1}")]
    DependencyUnavailable(DependencyKind, String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }

    pub fn dependency(kind: DependencyKind, detail: impl Into<String>) -> Self {
        Self::DependencyUnavailable(kind, detail.into())
    }

    /// True for the token-level failures a session check can produce.
    pub fn is_token_error(&self) -> bool {
        matches!(
            self,
            Self::MissingToken | Self::InvalidToken | Self::TokenExpired | Self::MalformedClaims
        )
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::dependency(DependencyKind::UserStore, e.to_string())
    }
}

impl From<redis::RedisError> for DomainError {
    fn from(e: redis::RedisError) -> Self {
        Self::dependency(DependencyKind::Cache, e.to_string())
    }
}
