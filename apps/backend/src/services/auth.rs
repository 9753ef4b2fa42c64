//! Login and token refresh.

use std::sync::Arc;

use tracing::info;

use crate::auth::claims::{Claims, TokenKind, TokenPair};
use crate::auth::password::{compare_blocking, CredentialHasher};
use crate::auth::{SessionAuthorizer, TokenCarrier, TokenService};
use crate::errors::DomainError;
use crate::logging::redact::Redacted;
use crate::logging::security;
use crate::repos::users::UserStore;

pub struct AuthService {
    tokens: Arc<TokenService>,
    authorizer: Arc<SessionAuthorizer>,
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn CredentialHasher>,
}

impl AuthService {
    pub fn new(
        tokens: Arc<TokenService>,
        authorizer: Arc<SessionAuthorizer>,
        users: Arc<dyn UserStore>,
        hasher: Arc<dyn CredentialHasher>,
    ) -> Self {
        Self {
            tokens,
            authorizer,
            users,
            hasher,
        }
    }

    /// Exchange a username and password for a fresh token pair.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, DomainError> {
        if username.is_empty() || password.is_empty() {
            return Err(DomainError::validation("username and password are required"));
        }

        let Some(credentials) = self.users.find_credentials(username).await? else {
            security::login_failed("unknown_user", username);
            return Err(DomainError::UserNotFound);
        };

        let matches = compare_blocking(
            self.hasher.clone(),
            password.to_string(),
            credentials.password_hash,
        )
        .await?;
        if !matches {
            security::login_failed("bad_password", username);
            return Err(DomainError::InvalidCredentials);
        }

        let pair = self
            .tokens
            .issue(&Claims::new(credentials.id, credentials.username))?;
        info!(
            user_id = credentials.id,
            username = %Redacted(username),
            "user logged in"
        );
        Ok(pair)
    }

    /// Mint a new pair from a valid refresh token whose subject still exists.
    pub async fn refresh(&self, carrier: &dyn TokenCarrier) -> Result<TokenPair, DomainError> {
        let claims = self.authorizer.authorize(carrier, TokenKind::Refresh).await?;
        let pair = self.tokens.issue(&claims)?;
        info!(user_id = claims.subject_id, "tokens refreshed");
        Ok(pair)
    }
}
