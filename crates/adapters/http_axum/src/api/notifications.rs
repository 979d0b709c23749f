//! JSON REST handlers for the notification feed.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use phonehub_app::ports::{
    AccountRepository, NotificationRepository, OwnershipRepository, PhoneRepository,
    SdCardRepository, SimSlotRepository,
};
use phonehub_domain::notification::{Notification, NotificationInfo};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the record endpoint.
pub enum RecordResponse {
    Created(Json<Notification>),
}

impl IntoResponse for RecordResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Notification>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/notifications`
#[allow(clippy::missing_errors_doc)]
pub async fn record<PR, SR, CR, AR, OR, NR>(
    State(state): State<AppState<PR, SR, CR, AR, OR, NR>>,
    Json(info): Json<NotificationInfo>,
) -> Result<RecordResponse, ApiError>
where
    PR: PhoneRepository + Send + Sync + 'static,
    SR: SimSlotRepository + Send + Sync + 'static,
    CR: SdCardRepository + Send + Sync + 'static,
    AR: AccountRepository + Send + Sync + 'static,
    OR: OwnershipRepository + Send + Sync + 'static,
    NR: NotificationRepository + Send + Sync + 'static,
{
    let stored = state.notifications.record(info).await?;
    Ok(RecordResponse::Created(Json(stored)))
}

/// `GET /api/notifications/:model_number`
#[allow(clippy::missing_errors_doc)]
pub async fn list<PR, SR, CR, AR, OR, NR>(
    State(state): State<AppState<PR, SR, CR, AR, OR, NR>>,
    Path(model_number): Path<String>,
) -> Result<ListResponse, ApiError>
where
    PR: PhoneRepository + Send + Sync + 'static,
    SR: SimSlotRepository + Send + Sync + 'static,
    CR: SdCardRepository + Send + Sync + 'static,
    AR: AccountRepository + Send + Sync + 'static,
    OR: OwnershipRepository + Send + Sync + 'static,
    NR: NotificationRepository + Send + Sync + 'static,
{
    let feed = state.notifications.for_model(&model_number).await?;
    Ok(ListResponse::Ok(Json(feed)))
}
