//! Axum router assembly.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use phonehub_app::ports::{
    AccountRepository, NotificationRepository, OwnershipRepository, PhoneRepository,
    SdCardRepository, SimSlotRepository,
};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the API under `/api` with a permissive [`CorsLayer`] (agents
/// report from arbitrary origins) and a [`TraceLayer`] logging each
/// request/response through the `tracing` ecosystem.
pub fn build<PR, SR, CR, AR, OR, NR>(state: AppState<PR, SR, CR, AR, OR, NR>) -> Router
where
    PR: PhoneRepository + Send + Sync + 'static,
    SR: SimSlotRepository + Send + Sync + 'static,
    CR: SdCardRepository + Send + Sync + 'static,
    AR: AccountRepository + Send + Sync + 'static,
    OR: OwnershipRepository + Send + Sync + 'static,
    NR: NotificationRepository + Send + Sync + 'static,
{
    let tokens = Arc::clone(&state.tokens);
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes(tokens))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
