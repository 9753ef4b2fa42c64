//! Error handling for the backend.

pub mod domain;
pub mod error_code;

pub use domain::{DependencyKind, DomainError};
pub use error_code::ErrorCode;
