use std::sync::Arc;

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use time::{Duration, OffsetDateTime};
use tracing::debug;

use crate::auth::claims::{Claims, TokenKind, TokenPair, TokenPayload};
use crate::errors::DomainError;
use crate::state::security_config::{SecurityConfig, TokenSettings};
use crate::utils::clock::Clock;

/// Verification seam consumed by the session authorizer.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str, kind: TokenKind) -> Result<Claims, DomainError>;
}

struct KindKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl KindKeys {
    fn new(settings: &TokenSettings) -> Self {
        Self {
            encoding: EncodingKey::from_secret(&settings.secret),
            decoding: DecodingKey::from_secret(&settings.secret),
            ttl: settings.ttl,
        }
    }
}

/// Mints and verifies HS256 tokens for both kinds.
///
/// Keys are derived from the configuration once, at construction. Expiry is
/// judged against the injected clock rather than the JWT library's own clock,
/// so issuing and verifying share one time source.
pub struct TokenService {
    access: KindKeys,
    refresh: KindKeys,
    header: Header,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    pub fn new(security: &SecurityConfig, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(security.algorithm);
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            access: KindKeys::new(&security.access),
            refresh: KindKeys::new(&security.refresh),
            header: Header::new(security.algorithm),
            validation,
            clock,
        }
    }

    fn keys(&self, kind: TokenKind) -> &KindKeys {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }

    /// Lifetime of tokens of `kind`.
    pub fn ttl(&self, kind: TokenKind) -> Duration {
        self.keys(kind).ttl
    }

    /// Mint an access/refresh pair for `claims`.
    ///
    /// Fails with `MalformedClaims` before signing anything if either identity
    /// field is empty, so a caller never receives half a pair.
    pub fn issue(&self, claims: &Claims) -> Result<TokenPair, DomainError> {
        claims.validate()?;

        let now = self.clock.now();
        let access_token = self.sign(claims, TokenKind::Access, now)?;
        let refresh_token = self.sign(claims, TokenKind::Refresh, now)?;

        debug!(subject_id = claims.subject_id, "issued token pair");

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    fn sign(
        &self,
        claims: &Claims,
        kind: TokenKind,
        now: OffsetDateTime,
    ) -> Result<String, DomainError> {
        let keys = self.keys(kind);
        let expires_at = now
            .checked_add(keys.ttl)
            .ok_or_else(|| DomainError::internal(format!("{kind} token expiry is out of range")))?;
        let payload = TokenPayload {
            sub: Some(claims.subject_id),
            username: Some(claims.username.clone()),
            kind,
            iat: now.unix_timestamp(),
            exp: expires_at.unix_timestamp(),
        };

        encode(&self.header, &payload, &keys.encoding)
            .map_err(|e| DomainError::internal(format!("failed to encode {kind} token: {e}")))
    }

    /// Verify `token` as a token of `kind` and return its claims.
    ///
    /// Errors:
    /// - bad signature, unparsable token, or a token of the other kind → `InvalidToken`
    /// - `now >= exp` → `TokenExpired`
    /// - verified payload without subject id or username → `MalformedClaims`
    pub fn verify(&self, token: &str, kind: TokenKind) -> Result<Claims, DomainError> {
        let keys = self.keys(kind);

        let payload = decode::<TokenPayload>(token, &keys.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(%kind, reason = ?e.kind(), "token rejected");
                DomainError::InvalidToken
            })?;

        if payload.kind != kind {
            debug!(%kind, presented = %payload.kind, "token kind mismatch");
            return Err(DomainError::InvalidToken);
        }

        if self.clock.now().unix_timestamp() >= payload.exp {
            return Err(DomainError::TokenExpired);
        }

        payload.into_claims()
    }
}

impl TokenVerifier for TokenService {
    fn verify(&self, token: &str, kind: TokenKind) -> Result<Claims, DomainError> {
        TokenService::verify(self, token, kind)
    }
}
