use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::routes::auth::ApiMessage;
use crate::services::RegisterRequest;
use crate::state::app_state::AppState;

async fn profile(
    current: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let profile = app_state.users.profile(current.claims()).await?;
    Ok(HttpResponse::Ok().json(profile))
}

async fn register(
    body: ValidatedJson<RegisterRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let registration = app_state.users.register(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiMessage::new(registration.message, registration.date)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/profile").route(web::get().to(profile)))
        .service(web::resource("/register").route(web::post().to(register)));
}
