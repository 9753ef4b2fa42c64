//! In-process user store, used when no database is configured and by tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::auth::claims::Claims;
use crate::errors::domain::DomainError;
use crate::repos::users::{NewUser, Profile, UserCredentials, UserStore};

#[derive(Debug, Clone)]
struct Row {
    profile: Profile,
    password_hash: String,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    by_username: HashMap<String, Row>,
}

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: RwLock<Inner>,
    profile_reads: AtomicUsize,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a user by username. Returns whether a row was removed.
    pub fn delete(&self, username: &str) -> bool {
        self.inner.write().by_username.remove(username).is_some()
    }

    /// Number of `find_profile` calls served so far.
    pub fn profile_reads(&self) -> usize {
        self.profile_reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_profile(&self, claims: &Claims) -> Result<Option<Profile>, DomainError> {
        self.profile_reads.fetch_add(1, Ordering::SeqCst);
        let inner = self.inner.read();
        Ok(inner
            .by_username
            .get(&claims.username)
            .filter(|row| row.profile.id == claims.subject_id)
            .map(|row| row.profile.clone()))
    }

    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, DomainError> {
        let inner = self.inner.read();
        Ok(inner.by_username.get(username).map(|row| UserCredentials {
            id: row.profile.id,
            username: row.profile.username.clone(),
            password_hash: row.password_hash.clone(),
        }))
    }

    async fn exists(&self, subject_id: i64, username: &str) -> Result<bool, DomainError> {
        let inner = self.inner.read();
        Ok(inner
            .by_username
            .get(username)
            .is_some_and(|row| row.profile.id == subject_id))
    }

    async fn create_if_absent(&self, user: NewUser) -> Result<Option<Profile>, DomainError> {
        let mut inner = self.inner.write();
        if inner.by_username.contains_key(&user.username) {
            return Ok(None);
        }

        inner.next_id += 1;
        let profile = Profile {
            id: inner.next_id,
            username: user.username.clone(),
            name: user.name,
            surname: user.surname,
        };
        inner.by_username.insert(
            user.username,
            Row {
                profile: profile.clone(),
                password_hash: user.password_hash,
            },
        );
        Ok(Some(profile))
    }
}
