use std::sync::Arc;

use serde::Deserialize;
use time::OffsetDateTime;
use tracing::info;

use crate::auth::claims::Claims;
use crate::auth::password::{hash_blocking, CredentialHasher};
use crate::errors::DomainError;
use crate::logging::redact::Redacted;
use crate::repos::users::{NewUser, Profile, UserStore};
use crate::services::profile_cache::ProfileCache;
use crate::utils::clock::Clock;

pub const USER_REGISTERED: &str = "USER_SUCCESSFULLY_REGISTERED";

#[derive(Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub name: String,
    pub surname: String,
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &Redacted(&self.username))
            .field("password", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl RegisterRequest {
    fn validate(&self) -> Result<(), DomainError> {
        let missing: Vec<&str> = [
            ("username", &self.username),
            ("password", &self.password),
            ("name", &self.name),
            ("surname", &self.surname),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::validation(format!(
                "must not be empty: {}",
                missing.join(", ")
            )))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub message: &'static str,
    pub date: OffsetDateTime,
    pub profile: Profile,
}

pub struct UserService {
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn CredentialHasher>,
    profiles: Arc<ProfileCache>,
    clock: Arc<dyn Clock>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<dyn CredentialHasher>,
        profiles: Arc<ProfileCache>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            hasher,
            profiles,
            clock,
        }
    }

    /// Create a user. The cache is not pre-warmed; the first profile read
    /// goes to the store.
    pub async fn register(&self, request: RegisterRequest) -> Result<Registration, DomainError> {
        request.validate()?;

        // Cheap pre-check so a taken username never pays for a hash.
        if self.users.find_credentials(&request.username).await?.is_some() {
            return Err(DomainError::DuplicateUsername);
        }

        let password_hash = hash_blocking(self.hasher.clone(), request.password).await?;
        let profile = self
            .users
            .create_if_absent(NewUser {
                username: request.username,
                password_hash,
                name: request.name,
                surname: request.surname,
            })
            .await?
            .ok_or(DomainError::DuplicateUsername)?;

        info!(
            user_id = profile.id,
            username = %Redacted(&profile.username),
            "user registered"
        );

        Ok(Registration {
            message: USER_REGISTERED,
            date: self.clock.now(),
            profile,
        })
    }

    pub async fn profile(&self, identity: &Claims) -> Result<Profile, DomainError> {
        self.profiles.get_profile(identity).await
    }
}
