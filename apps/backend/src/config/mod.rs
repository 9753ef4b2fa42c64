pub mod cache;
pub mod env;
pub mod server;

pub use cache::CacheConfig;
pub use env::ConfigError;
pub use server::ServerConfig;
