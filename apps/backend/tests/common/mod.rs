#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Find a `Set-Cookie` by name on a response.
pub fn response_cookie<B>(resp: &ServiceResponse<B>, name: &str) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == name)
        .map(|c| c.into_owned())
}
