use actix_web::web;

pub mod auth;
pub mod health;
pub mod user;

/// Register every route. Shared by `main.rs` and the integration tests so
/// both serve the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Auth routes: /api/auth/**
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));

    // User routes: /api/user/**
    cfg.service(web::scope("/api/user").configure(user::configure_routes));
}
