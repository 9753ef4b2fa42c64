//! Where tokens travel on an inbound request.
//!
//! Each token kind owns an ordered list of sources. The first source that
//! yields a non-empty value wins, so the access cookie takes precedence over
//! an `Authorization: Bearer` header when both are present.

use crate::auth::claims::TokenKind;

/// Read-only view of the credential-bearing parts of a request.
pub trait TokenCarrier {
    fn cookie(&self, name: &str) -> Option<String>;
    /// Token from an `Authorization: Bearer <token>` header, if well formed.
    fn bearer(&self) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    Cookie(String),
    Bearer,
}

impl TokenSource {
    fn read(&self, carrier: &(impl TokenCarrier + ?Sized)) -> Option<String> {
        let raw = match self {
            TokenSource::Cookie(name) => carrier.cookie(name),
            TokenSource::Bearer => carrier.bearer(),
        };
        raw.filter(|token| !token.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    pub access: Vec<TokenSource>,
    pub refresh: Vec<TokenSource>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            access: vec![
                TokenSource::Cookie(TokenKind::Access.cookie_name().to_string()),
                TokenSource::Bearer,
            ],
            refresh: vec![TokenSource::Cookie(
                TokenKind::Refresh.cookie_name().to_string(),
            )],
        }
    }
}

impl TransportConfig {
    pub fn sources(&self, kind: TokenKind) -> &[TokenSource] {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }

    /// First token found for `kind`, walking its sources in order.
    pub fn extract(&self, carrier: &(impl TokenCarrier + ?Sized), kind: TokenKind) -> Option<String> {
        self.sources(kind)
            .iter()
            .find_map(|source| source.read(carrier))
    }
}

/// Parse the token out of an `Authorization` header value.
pub fn parse_bearer(header_value: &str) -> Option<String> {
    let mut parts = header_value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => {
            Some(token.to_string())
        }
        _ => None,
    }
}
