use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::auth::{SessionAuthorizer, TokenService};
use crate::services::{AuthService, UserService};
use crate::utils::clock::Clock;

/// Application state containing shared resources.
///
/// Every service is already wired to its collaborators; handlers only pick
/// the one they need.
#[derive(Clone)]
pub struct AppState {
    /// Database connection (absent when running on the in-memory store)
    db: Option<DatabaseConnection>,
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
    pub tokens: Arc<TokenService>,
    pub authorizer: Arc<SessionAuthorizer>,
    pub auth: Arc<AuthService>,
    pub users: Arc<UserService>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub(crate) fn new(
        db: Option<DatabaseConnection>,
        security: SecurityConfig,
        tokens: Arc<TokenService>,
        authorizer: Arc<SessionAuthorizer>,
        auth: Arc<AuthService>,
        users: Arc<UserService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            db,
            security,
            tokens,
            authorizer,
            auth,
            users,
            clock,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
