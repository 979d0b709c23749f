//! JSON REST handler for the device inventory listing.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use phonehub_app::ports::{
    AccountRepository, NotificationRepository, OwnershipRepository, PhoneRepository,
    SdCardRepository, SimSlotRepository,
};
use phonehub_domain::phone::Phone;
use phonehub_domain::sd::SdCard;
use phonehub_domain::sim::SimSlot;

use crate::error::ApiError;
use crate::state::AppState;

/// Full inventory snapshot: every known phone, SIM and SD card,
/// including detached slot records.
#[derive(Serialize)]
pub struct InventoryBody {
    pub phones: Vec<Phone>,
    pub sim_cards: Vec<SimSlot>,
    pub sd_cards: Vec<SdCard>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<InventoryBody>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/devices`
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
    let phones = state.devices.list_phones().await?;
    let sim_cards = state.slots.list_sims().await?;
    let sd_cards = state.slots.list_sds().await?;
    Ok(ListResponse::Ok(Json(InventoryBody {
        phones,
        sim_cards,
        sd_cards,
    })))
}
