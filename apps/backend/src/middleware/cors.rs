use actix_cors::Cors;
use actix_web::http::header;

/// Build CORS middleware with an explicit origin list.
///
/// Credentials are allowed since session tokens travel in cookies, which
/// rules out wildcard origins. An empty list falls back to localhost.
pub fn cors_middleware(allowed_origins: &[String]) -> Cors {
    let fallback = [
        "http://localhost:3000".to_string(),
        "http://127.0.0.1:3000".to_string(),
    ];
    let effective_origins = if allowed_origins.is_empty() {
        &fallback[..]
    } else {
        allowed_origins
    };

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-trace-id")])
        .supports_credentials()
        .max_age(3600);

    for origin in effective_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}

/// Parse a comma-separated origin list, dropping blanks, `null` and
/// anything that is not an http(s) origin.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect()
}
