//! SeaORM adapter for the user store.

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, Set,
};
use tracing::debug;

use crate::auth::claims::Claims;
use crate::entities::users;
use crate::errors::domain::DomainError;
use crate::logging::redact::Redacted;
use crate::repos::users::{NewUser, Profile, UserCredentials, UserStore};

pub mod dto;

pub use dto::UserCreate;

// Adapter functions return DbErr; the store maps to DomainError via From<DbErr>.

pub async fn find_by_identity<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    username: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find_by_id(id)
        .filter(users::Column::Username.eq(username))
        .one(conn)
        .await
}

pub async fn find_by_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::Username.eq(username))
        .one(conn)
        .await
}

pub async fn count_by_identity<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    username: &str,
) -> Result<u64, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::Id.eq(id))
        .filter(users::Column::Username.eq(username))
        .count(conn)
        .await
}

/// Insert unless the username exists. Returns the new row, or `None` when
/// the unique index swallowed the insert.
pub async fn insert_if_absent<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let username = dto.username.clone();

    let user_active = users::ActiveModel {
        id: NotSet,
        username: Set(dto.username),
        password_hash: Set(dto.password_hash),
        name: Set(dto.name),
        surname: Set(dto.surname),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let rows = users::Entity::insert(user_active)
        .on_conflict(
            OnConflict::column(users::Column::Username)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    if rows == 0 {
        return Ok(None);
    }

    find_by_username(conn, &username).await
}

/// `UserStore` over a SeaORM connection (Postgres in production, SQLite in tests).
#[derive(Clone)]
pub struct SeaUserStore {
    db: DatabaseConnection,
}

impl SeaUserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for SeaUserStore {
    async fn find_profile(&self, claims: &Claims) -> Result<Option<Profile>, DomainError> {
        let user = find_by_identity(&self.db, claims.subject_id, &claims.username).await?;
        Ok(user.map(Profile::from))
    }

    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, DomainError> {
        let user = find_by_username(&self.db, username).await?;
        Ok(user.map(UserCredentials::from))
    }

    async fn exists(&self, subject_id: i64, username: &str) -> Result<bool, DomainError> {
        Ok(count_by_identity(&self.db, subject_id, username).await? > 0)
    }

    async fn create_if_absent(&self, user: NewUser) -> Result<Option<Profile>, DomainError> {
        let username = user.username.clone();
        let created = insert_if_absent(&self.db, UserCreate::from(user)).await?;
        if created.is_none() {
            debug!(username = %Redacted(&username), "username already taken");
        }
        Ok(created.map(Profile::from))
    }
}

// Conversions between SeaORM models and domain models

impl From<users::Model> for Profile {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            name: model.name,
            surname: model.surname,
        }
    }
}

impl From<users::Model> for UserCredentials {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            password_hash: model.password_hash,
        }
    }
}
