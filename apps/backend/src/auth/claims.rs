//! Identity payloads carried by signed tokens.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// The authenticated identity: who a token was issued to.
///
/// Both fields are mandatory. A zero subject id or an empty username is
/// never signed and never accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Claims {
    pub subject_id: i64,
    pub username: String,
}

impl Claims {
    pub fn new(subject_id: i64, username: impl Into<String>) -> Self {
        Self {
            subject_id,
            username: username.into(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.subject_id == 0 || self.username.is_empty() {
            return Err(DomainError::MalformedClaims);
        }
        Ok(())
    }
}

/// Which of the two token families a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }

    /// Name of the cookie that carries this kind.
    pub const fn cookie_name(&self) -> &'static str {
        match self {
            TokenKind::Access => "accessToken",
            TokenKind::Refresh => "refreshToken",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An access/refresh pair minted from the same claims in one call.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenPair {
    pub fn token(&self, kind: TokenKind) -> &str {
        match kind {
            TokenKind::Access => &self.access_token,
            TokenKind::Refresh => &self.refresh_token,
        }
    }
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}

/// Wire payload of a signed token. Identity fields are optional here so a
/// token that verifies but lacks them is reported as malformed instead of
/// failing to decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct TokenPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub kind: TokenKind,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl TokenPayload {
    pub fn into_claims(self) -> Result<Claims, DomainError> {
        let claims = match (self.sub, self.username) {
            (Some(sub), Some(username)) => Claims::new(sub, username),
            _ => return Err(DomainError::MalformedClaims),
        };
        claims.validate()?;
        Ok(claims)
    }
}
