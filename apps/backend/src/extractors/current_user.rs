use std::future::Future;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};

use crate::auth::claims::{Claims, TokenKind};
use crate::auth::transport::{parse_bearer, TokenCarrier};
use crate::error::AppError;
use crate::state::app_state::AppState;

impl TokenCarrier for HttpRequest {
    fn cookie(&self, name: &str) -> Option<String> {
        HttpRequest::cookie(self, name).map(|c| c.value().to_string())
    }

    fn bearer(&self) -> Option<String> {
        self.headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_bearer)
    }
}

pub(crate) fn app_state(req: &HttpRequest) -> Result<web::Data<AppState>, AppError> {
    req.app_data::<web::Data<AppState>>()
        .cloned()
        .ok_or_else(|| AppError::internal("AppState missing from request"))
}

/// The identity behind a valid access token whose subject still exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(pub Claims);

impl CurrentUser {
    pub fn claims(&self) -> &Claims {
        &self.0
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let state = app_state(&req)?;
            let claims = state
                .authorizer
                .authorize(&req, TokenKind::Access)
                .await?;
            Ok(CurrentUser(claims))
        })
    }
}
