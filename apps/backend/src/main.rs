use actix_web::{web, App, HttpServer};
use backend::config::{CacheConfig, ServerConfig};
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_trace::RequestTrace;
use backend::routes;
use backend::state::build_state;
use backend::state::security_config::SecurityConfig;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment; every
    // setting is read once here and passed down as plain values.
    let (server, security, cache) = match (
        ServerConfig::from_env(),
        SecurityConfig::from_env(),
        CacheConfig::from_env(),
    ) {
        (Ok(server), Ok(security), Ok(cache)) => (server, security, cache),
        (server, security, cache) => {
            for err in [server.err(), security.err(), cache.err()]
                .into_iter()
                .flatten()
            {
                error!(error = %err, "invalid configuration");
            }
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_security(security)
        .with_cache(cache)
        .with_database_url(server.database_url.clone())
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(host = %server.host, port = server.port, "starting backend");

    let data = web::Data::new(app_state);
    let origins = server.cors_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
