//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use phonehub_domain::error::PhoneHubError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`PhoneHubError`] to an HTTP response with appropriate status code.
pub struct ApiError(PhoneHubError);

impl From<PhoneHubError> for ApiError {
    fn from(err: PhoneHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            PhoneHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            PhoneHubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            PhoneHubError::Conflict(err) => (StatusCode::CONFLICT, err.to_string()),
            // Credential and token failures are indistinguishable on the
            // wire: the caller never learns which check failed.
            PhoneHubError::Unauthorized | PhoneHubError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, "unauthorized".to_string())
            }
            PhoneHubError::Timeout => {
                (StatusCode::GATEWAY_TIMEOUT, "operation timed out".to_string())
            }
            PhoneHubError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            PhoneHubError::CodeSpaceExhausted => {
                tracing::error!("registration code space exhausted");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
