//! Adapters for external dependencies.

pub mod cache_moka;
pub mod cache_redis;
pub mod users_memory;
pub mod users_sea;

pub use cache_moka::MokaCacheBackend;
pub use cache_redis::RedisCacheBackend;
pub use users_memory::InMemoryUserStore;
pub use users_sea::SeaUserStore;
