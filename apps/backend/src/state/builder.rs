use std::sync::Arc;

use migration::{migrate, MigrationCommand};
use sea_orm::{Database, DatabaseConnection};
use tracing::info;

use crate::adapters::{InMemoryUserStore, MokaCacheBackend, RedisCacheBackend, SeaUserStore};
use crate::auth::{Argon2Hasher, CredentialHasher, SessionAuthorizer, TokenService, TransportConfig};
use crate::config::cache::CacheConfig;
use crate::error::AppError;
use crate::repos::{CacheBackend, UserStore};
use crate::services::{AuthService, ProfileCache, UserService};
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;
use crate::utils::clock::{Clock, SystemClock};

/// Builder for creating AppState instances (used in both tests and main).
///
/// Collaborators left unset are chosen from configuration: a database URL
/// selects the SeaORM store (migrated on connect), otherwise users live in
/// memory; a Redis URL in the cache config selects Redis, otherwise moka.
#[derive(Default)]
pub struct StateBuilder {
    security: Option<SecurityConfig>,
    cache: Option<CacheConfig>,
    database_url: Option<String>,
    users: Option<Arc<dyn UserStore>>,
    cache_backend: Option<Arc<dyn CacheBackend>>,
    hasher: Option<Arc<dyn CredentialHasher>>,
    clock: Option<Arc<dyn Clock>>,
    transport: TransportConfig,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_security(mut self, security: SecurityConfig) -> Self {
        self.security = Some(security);
        self
    }

    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_database_url(mut self, url: Option<String>) -> Self {
        self.database_url = url;
        self
    }

    pub fn with_user_store(mut self, users: Arc<dyn UserStore>) -> Self {
        self.users = Some(users);
        self
    }

    pub fn with_cache_backend(mut self, backend: Arc<dyn CacheBackend>) -> Self {
        self.cache_backend = Some(backend);
        self
    }

    pub fn with_hasher(mut self, hasher: Arc<dyn CredentialHasher>) -> Self {
        self.hasher = Some(hasher);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let security = self
            .security
            .ok_or_else(|| AppError::config("security configuration is required"))?;
        let cache = self
            .cache
            .ok_or_else(|| AppError::config("cache configuration is required"))?;

        let (db, users) = match (self.users, self.database_url) {
            (Some(users), _) => (None, users),
            (None, Some(url)) => {
                let conn = connect_and_migrate(&url).await?;
                let users: Arc<dyn UserStore> = Arc::new(SeaUserStore::new(conn.clone()));
                (Some(conn), users)
            }
            (None, None) => {
                info!("no DATABASE_URL; using in-memory user store");
                let users: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
                (None, users)
            }
        };

        let cache_backend: Arc<dyn CacheBackend> = match (self.cache_backend, &cache.redis_url) {
            (Some(backend), _) => backend,
            (None, Some(url)) => Arc::new(RedisCacheBackend::connect(url).await?),
            (None, None) => Arc::new(MokaCacheBackend::new(&cache)),
        };

        let hasher = self
            .hasher
            .unwrap_or_else(|| Arc::new(Argon2Hasher::new()));
        let clock = self.clock.unwrap_or_else(SystemClock::shared);

        let tokens = Arc::new(TokenService::new(&security, clock.clone()));
        let authorizer = Arc::new(SessionAuthorizer::new(
            tokens.clone(),
            users.clone(),
            self.transport,
        ));
        let profiles = Arc::new(ProfileCache::new(
            users.clone(),
            cache_backend,
            clock.clone(),
            cache.ttl,
        ));
        let auth = Arc::new(AuthService::new(
            tokens.clone(),
            authorizer.clone(),
            users.clone(),
            hasher.clone(),
        ));
        let user_service = Arc::new(UserService::new(users, hasher, profiles, clock.clone()));

        Ok(AppState::new(
            db,
            security,
            tokens,
            authorizer,
            auth,
            user_service,
            clock,
        ))
    }
}

/// Single entrypoint for the relational store: connect, then migrate up.
async fn connect_and_migrate(url: &str) -> Result<DatabaseConnection, AppError> {
    let conn = Database::connect(url)
        .await
        .map_err(crate::errors::DomainError::from)?;
    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(crate::errors::DomainError::from)?;
    info!("database connected and migrated");
    Ok(conn)
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
