pub mod authorizer;
pub mod claims;
pub mod jwt;
pub mod password;
pub mod transport;

pub use authorizer::SessionAuthorizer;
pub use claims::{Claims, TokenKind, TokenPair};
pub use jwt::{TokenService, TokenVerifier};
pub use password::{Argon2Hasher, CredentialHasher};
pub use transport::{TokenCarrier, TokenSource, TransportConfig};
