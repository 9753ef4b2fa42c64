pub mod redact;
pub mod security;
