//! JSON REST handlers for accounts — registration, login, listing.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use phonehub_app::ports::{
    AccountRepository, NotificationRepository, OwnershipRepository, PhoneRepository,
    SdCardRepository, SimSlotRepository,
};
use phonehub_domain::account::{AccountWithPhones, Profile, Registration};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for the login endpoint.
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response body carrying a freshly issued session token.
#[derive(Serialize)]
pub struct LoginBody {
    pub token: String,
}

/// Possible responses from the register endpoint.
pub enum RegisterResponse {
    Created(Json<Profile>),
}

impl IntoResponse for RegisterResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the login endpoint.
pub enum LoginResponse {
    Ok(Json<LoginBody>),
}

impl IntoResponse for LoginResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<AccountWithPhones>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/register`
///
/// Returns the public profile; the password hash and internal id never
/// leave the server.
#[allow(clippy::missing_errors_doc)]
pub async fn register<PR, SR, CR, AR, OR, NR>(
    State(state): State<AppState<PR, SR, CR, AR, OR, NR>>,
    Json(registration): Json<Registration>,
) -> Result<RegisterResponse, ApiError>
where
    PR: PhoneRepository + Send + Sync + 'static,
    SR: SimSlotRepository + Send + Sync + 'static,
    CR: SdCardRepository + Send + Sync + 'static,
    AR: AccountRepository + Send + Sync + 'static,
    OR: OwnershipRepository + Send + Sync + 'static,
    NR: NotificationRepository + Send + Sync + 'static,
{
    let account = state.accounts.register(registration).await?;
    Ok(RegisterResponse::Created(Json(account.profile())))
}

/// `POST /api/login`
#[allow(clippy::missing_errors_doc)]
pub async fn login<PR, SR, CR, AR, OR, NR>(
    State(state): State<AppState<PR, SR, CR, AR, OR, NR>>,
    Json(request): Json<LoginRequest>,
) -> Result<LoginResponse, ApiError>
where
    PR: PhoneRepository + Send + Sync + 'static,
    SR: SimSlotRepository + Send + Sync + 'static,
    CR: SdCardRepository + Send + Sync + 'static,
    AR: AccountRepository + Send + Sync + 'static,
    OR: OwnershipRepository + Send + Sync + 'static,
    NR: NotificationRepository + Send + Sync + 'static,
{
    let account = state
        .accounts
        .verify_login(&request.email, &request.password)
        .await?;
    let token = state.tokens.issue(&account.email, &account.role)?;
    Ok(LoginResponse::Ok(Json(LoginBody { token })))
}

/// `GET /api/accounts`
#[allow(clippy::missing_errors_doc)]
pub async fn list<PR, SR, CR, AR, OR, NR>(
    State(state): State<AppState<PR, SR, CR, AR, OR, NR>>,
) -> Result<ListResponse, ApiError>
where
    PR: PhoneRepository + Send + Sync + 'static,
    SR: SimSlotRepository + Send + Sync + 'static,
    CR: SdCardRepository + Send + Sync + 'static,
    AR: AccountRepository + Send + Sync + 'static,
    OR: OwnershipRepository + Send + Sync + 'static,
    NR: NotificationRepository + Send + Sync + 'static,
{
    let accounts = state.linker.list_accounts_with_phones().await?;
    Ok(ListResponse::Ok(Json(accounts)))
}
