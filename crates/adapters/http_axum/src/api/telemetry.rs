//! JSON REST handler for telemetry ingestion.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use phonehub_app::ports::{
    AccountRepository, NotificationRepository, OwnershipRepository, PhoneRepository,
    SdCardRepository, SimSlotRepository,
};
use phonehub_domain::report::{IngestOutcome, TelemetryReport};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the ingest endpoint.
pub enum IngestResponse {
    Ok(Json<IngestOutcome>),
}

impl IntoResponse for IngestResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/telemetry`
#[allow(clippy::missing_errors_doc)]
pub async fn ingest<PR, SR, CR, AR, OR, NR>(
    State(state): State<AppState<PR, SR, CR, AR, OR, NR>>,
    Json(report): Json<TelemetryReport>,
) -> Result<IngestResponse, ApiError>
where
    PR: PhoneRepository + Send + Sync + 'static,
    SR: SimSlotRepository + Send + Sync + 'static,
    CR: SdCardRepository + Send + Sync + 'static,
    AR: AccountRepository + Send + Sync + 'static,
    OR: OwnershipRepository + Send + Sync + 'static,
    NR: NotificationRepository + Send + Sync + 'static,
{
    let outcome = state.ingestor.ingest(report).await?;
    Ok(IngestResponse::Ok(Json(outcome)))
}
