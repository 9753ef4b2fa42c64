use actix_web::cookie::{time as cookie_time, Cookie, SameSite};
use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::auth::claims::{TokenKind, TokenPair};
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::state::app_state::AppState;

pub const LOGGED_IN: &str = "USER_SUCCESSFULLY_LOGGED_IN";
pub const TOKENS_REFRESHED: &str = "TOKENS_SUCCESSFULLY_REFRESHED";

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `{message, date}` acknowledgement shared by the auth and register routes.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
    pub date: String,
}

impl ApiMessage {
    pub fn new(message: &str, date: OffsetDateTime) -> Self {
        Self {
            message: message.to_string(),
            date: date
                .format(&Rfc3339)
                .unwrap_or_else(|_| "unknown".to_string()),
        }
    }
}

/// HttpOnly, SameSite=Strict cookie holding one token, living as long as it.
fn token_cookie(kind: TokenKind, value: &str, state: &AppState) -> Cookie<'static> {
    let ttl = state.tokens.ttl(kind);
    Cookie::build(kind.cookie_name(), value.to_string())
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(cookie_time::Duration::seconds(ttl.whole_seconds()))
        .finish()
}

fn with_token_cookies(pair: &TokenPair, message: &str, state: &AppState) -> HttpResponse {
    HttpResponse::Ok()
        .cookie(token_cookie(TokenKind::Access, &pair.access_token, state))
        .cookie(token_cookie(TokenKind::Refresh, &pair.refresh_token, state))
        .json(ApiMessage::new(message, state.clock.now()))
}

async fn login(
    body: ValidatedJson<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let LoginRequest { username, password } = body.into_inner();
    let pair = app_state.auth.login(&username, &password).await?;
    Ok(with_token_cookies(&pair, LOGGED_IN, &app_state))
}

async fn refresh(
    req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let pair = app_state
        .auth
        .refresh(&req)
        .await
        .map_err(AppError::for_refresh)?;
    Ok(with_token_cookies(&pair, TOKENS_REFRESHED, &app_state))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/login").route(web::post().to(login)))
        .service(web::resource("/refresh").route(web::post().to(refresh)));
}
