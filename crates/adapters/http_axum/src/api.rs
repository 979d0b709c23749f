//! JSON REST API handler modules.

pub mod accounts;
pub mod devices;
pub mod notifications;
pub mod telemetry;

use std::sync::Arc;

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};

use phonehub_app::ports::{
    AccountRepository, NotificationRepository, OwnershipRepository, PhoneRepository,
    SdCardRepository, SimSlotRepository,
};
use phonehub_app::services::token::TokenService;

use crate::auth::require_auth;
use crate::state::AppState;

/// Build the `/api` sub-router.
///
/// Ingestion, registration, login, and the notification intake are open
/// to unauthenticated agents; the listing endpoints require a bearer
/// token issued by `/login`.
pub fn routes<PR, SR, CR, AR, OR, NR>(
    tokens: Arc<TokenService>,
) -> Router<AppState<PR, SR, CR, AR, OR, NR>>
where
    PR: PhoneRepository + Send + Sync + 'static,
    SR: SimSlotRepository + Send + Sync + 'static,
    CR: SdCardRepository + Send + Sync + 'static,
    AR: AccountRepository + Send + Sync + 'static,
    OR: OwnershipRepository + Send + Sync + 'static,
    NR: NotificationRepository + Send + Sync + 'static,
{
    let guarded = Router::new()
        .route("/devices", get(devices::list::<PR, SR, CR, AR, OR, NR>))
        .route("/accounts", get(accounts::list::<PR, SR, CR, AR, OR, NR>))
        .route(
            "/notifications/{model_number}",
            get(notifications::list::<PR, SR, CR, AR, OR, NR>),
        )
        .route_layer(from_fn_with_state(tokens, require_auth));

    Router::new()
        .route(
            "/telemetry",
            post(telemetry::ingest::<PR, SR, CR, AR, OR, NR>),
        )
        .route(
            "/register",
            post(accounts::register::<PR, SR, CR, AR, OR, NR>),
        )
        .route("/login", post(accounts::login::<PR, SR, CR, AR, OR, NR>))
        .route(
            "/notifications",
            post(notifications::record::<PR, SR, CR, AR, OR, NR>),
        )
        .merge(guarded)
}
