//! Error codes for the backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in problem-details responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Tokens & sessions
    /// No token in any configured transport slot
    MissingToken,
    /// Signature, format or kind mismatch
    InvalidToken,
    /// Token lifetime elapsed
    TokenExpired,
    /// Claims payload lacks a subject id or username
    MalformedClaims,
    /// Token verified but its subject no longer exists
    SubjectNotFound,

    // Credentials
    /// Password did not match
    InvalidCredentials,

    // Resource Not Found
    UserNotFound,
    ProfileNotFound,

    // Request Validation
    ValidationError,
    BadRequest,

    // Conflicts
    /// Username already registered
    DuplicateUsername,

    // System Errors
    DependencyUnavailable,
    Internal,
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingToken => "MISSING_TOKEN",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::MalformedClaims => "MALFORMED_CLAIMS",
            Self::SubjectNotFound => "SUBJECT_NOT_FOUND",

            Self::InvalidCredentials => "INVALID_CREDENTIALS",

            Self::UserNotFound => "USER_NOT_FOUND",
            Self::ProfileNotFound => "PROFILE_NOT_FOUND",

            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::DuplicateUsername => "DUPLICATE_USERNAME",

            Self::DependencyUnavailable => "DEPENDENCY_UNAVAILABLE",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
