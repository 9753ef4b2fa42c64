pub mod auth;
pub mod profile_cache;
pub mod users;

pub use auth::AuthService;
pub use profile_cache::ProfileCache;
pub use users::{RegisterRequest, Registration, UserService};
