use std::sync::Arc;

use tracing::debug;

use crate::auth::claims::{Claims, TokenKind};
use crate::auth::jwt::TokenVerifier;
use crate::auth::transport::{TokenCarrier, TransportConfig};
use crate::errors::DomainError;
use crate::logging::redact::Redacted;
use crate::logging::security;
use crate::repos::users::UserStore;

/// Resolves the identity behind a request for a required token kind.
///
/// Extraction, verification and the subject re-check run in that order and
/// stop at the first failure. A token whose subject has since been removed
/// is refused even though its signature and expiry are fine.
pub struct SessionAuthorizer {
    verifier: Arc<dyn TokenVerifier>,
    users: Arc<dyn UserStore>,
    transport: TransportConfig,
}

impl SessionAuthorizer {
    pub fn new(
        verifier: Arc<dyn TokenVerifier>,
        users: Arc<dyn UserStore>,
        transport: TransportConfig,
    ) -> Self {
        Self {
            verifier,
            users,
            transport,
        }
    }

    pub async fn authorize(
        &self,
        carrier: &dyn TokenCarrier,
        kind: TokenKind,
    ) -> Result<Claims, DomainError> {
        let token = self
            .transport
            .extract(carrier, kind)
            .ok_or(DomainError::MissingToken)?;

        let claims = self.verifier.verify(&token, kind).inspect_err(|e| {
            security::token_rejected(kind, &e.to_string());
        })?;

        if !self.users.exists(claims.subject_id, &claims.username).await? {
            debug!(
                %kind,
                subject_id = claims.subject_id,
                username = %Redacted(&claims.username),
                "token subject no longer exists"
            );
            return Err(DomainError::SubjectNotFound);
        }

        Ok(claims)
    }
}
