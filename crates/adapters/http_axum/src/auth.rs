//! Bearer-token guard for the listing endpoints.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use phonehub_app::services::token::TokenService;
use phonehub_domain::error::PhoneHubError;

use crate::error::ApiError;

/// Reject the request unless it carries a valid `Authorization: Bearer`
/// token. Validated [`Claims`](phonehub_app::services::token::Claims) are
/// stored in the request extensions for handlers that care.
///
/// # Errors
///
/// A missing header, a non-Bearer scheme, and an invalid token all fail
/// the same way: `401` with the uniform unauthorized body.
pub async fn require_auth(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(PhoneHubError::InvalidToken)?;

    let claims = tokens.validate(token)?;
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
