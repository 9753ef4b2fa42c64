//! DTOs for users_sea adapter.

use crate::repos::users::NewUser;

/// DTO for inserting a user row.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub username: String,
    pub password_hash: String,
    pub name: String,
    pub surname: String,
}

impl From<NewUser> for UserCreate {
    fn from(user: NewUser) -> Self {
        Self {
            username: user.username,
            password_hash: user.password_hash,
            name: user.name,
            surname: user.surname,
        }
    }
}
