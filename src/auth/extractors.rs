use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, Error as ActixError, FromRequest, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::Claims;
use crate::error::AppError;
use crate::state::AppState;

/// The verified claims of the request's `Authorization: Bearer` token.
///
/// Handlers that take this as a parameter reject requests with a missing,
/// malformed, badly signed or expired token with 401 before running.
#[derive(Debug, Clone)]
pub struct BearerClaims(pub Claims);

impl BearerClaims {
    pub fn subject(&self) -> &str {
        &self.0.sub
    }
}

impl FromRequest for BearerClaims {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_claims(req).map(BearerClaims).map_err(Into::into))
    }
}

fn extract_claims(req: &HttpRequest) -> Result<Claims, AppError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::InternalServerError("Application state not configured".into()))?;

    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
        .ok_or_else(|| AppError::Unauthorized("Not authenticated".into()))?;

    state.tokens.verify(token)
}

/// Splits `<scheme> <token>` and returns the token when the scheme is
/// `bearer` in any letter case.
fn bearer_token(header_value: &str) -> Option<&str> {
    let (scheme, token) = header_value.trim().split_once(char::is_whitespace)?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
