use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::config::env::ConfigError;
use crate::errors::{DependencyKind, DomainError, ErrorCode};
use crate::trace_ctx;

/// RFC 7807 body rendered for every error response.
#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

/// Boundary error: a domain failure already classified into an HTTP status.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Unauthorized: {detail}")]
    Unauthorized { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("{kind:?} unavailable: {detail}")]
    Unavailable { kind: DependencyKind, detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::BadRequest { code, .. } => *code,
            AppError::Unauthorized { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::Conflict { code, .. } => *code,
            AppError::Unavailable { .. } => ErrorCode::DependencyUnavailable,
            AppError::Internal { .. } => ErrorCode::Internal,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Detail safe to send to the client. Collaborator and internal
    /// details stay in the logs.
    fn public_detail(&self) -> String {
        match self {
            AppError::BadRequest { detail, .. }
            | AppError::Unauthorized { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::Conflict { detail, .. } => detail.clone(),
            AppError::Unavailable { .. } => "A backing service is unavailable".to_string(),
            AppError::Internal { .. } | AppError::Config { .. } => {
                "Internal server error".to_string()
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn unauthorized(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Unauthorized {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// Mapping used by the refresh endpoint: a missing or unusable refresh
    /// token is a malformed request (400) rather than an auth challenge.
    pub fn for_refresh(err: DomainError) -> Self {
        if err.is_token_error() {
            let code = token_error_code(&err);
            return Self::bad_request(code, err.to_string());
        }
        Self::from(err)
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let lower = word.to_lowercase();
                let mut chars = lower.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn token_error_code(err: &DomainError) -> ErrorCode {
    match err {
        DomainError::MissingToken => ErrorCode::MissingToken,
        DomainError::TokenExpired => ErrorCode::TokenExpired,
        DomainError::MalformedClaims => ErrorCode::MalformedClaims,
        _ => ErrorCode::InvalidToken,
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        let detail = err.to_string();
        match err {
            DomainError::MissingToken
            | DomainError::InvalidToken
            | DomainError::TokenExpired
            | DomainError::MalformedClaims => {
                let code = token_error_code(&err);
                AppError::unauthorized(code, detail)
            }
            DomainError::SubjectNotFound => {
                AppError::unauthorized(ErrorCode::SubjectNotFound, detail)
            }
            DomainError::InvalidCredentials => {
                AppError::bad_request(ErrorCode::InvalidCredentials, detail)
            }
            DomainError::UserNotFound => AppError::not_found(ErrorCode::UserNotFound, detail),
            DomainError::ProfileNotFound => {
                AppError::not_found(ErrorCode::ProfileNotFound, detail)
            }
            DomainError::DuplicateUsername => {
                AppError::conflict(ErrorCode::DuplicateUsername, detail)
            }
            DomainError::Validation(d) => AppError::bad_request(ErrorCode::ValidationError, d),
            DomainError::DependencyUnavailable(kind, d) => AppError::Unavailable { kind, detail: d },
            DomainError::Internal(d) => AppError::internal(d),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::config(err.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code().as_str();
        let trace_id = trace_ctx::trace_id();

        if status.is_server_error() {
            error!(trace_id = %trace_id, code, error = %self, "request failed");
        }

        let problem_details = ProblemDetails {
            type_: format!("urn:problem:{}", code.to_lowercase()),
            title: Self::humanize_code(code),
            status: status.as_u16(),
            detail: self.public_detail(),
            code: code.to_string(),
            trace_id: trace_id.clone(),
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .insert_header(("x-trace-id", trace_id))
            .json(problem_details)
    }
}
