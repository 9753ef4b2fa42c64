//! Repository traits for domain layer.

pub mod cache;
pub mod users;

pub use cache::{CacheBackend, CacheEntry};
pub use users::{NewUser, Profile, UserCredentials, UserStore};
