//! Telemetry ingestor — orchestrates one incoming device report.
//!
//! Steps run strictly in order: normalize, resolve-or-create the phone,
//! reconcile SIM then SD slots, optionally link an owner. No transaction
//! spans the steps; each commits independently, so a failure late in the
//! sequence leaves earlier writes in place (partial success by design).

use std::sync::Arc;

use phonehub_domain::catalog;
use phonehub_domain::error::PhoneHubError;
use phonehub_domain::report::{IngestOutcome, TelemetryReport};

use crate::ports::{
    AccountRepository, OwnershipRepository, PhoneRepository, SdCardRepository, SimSlotRepository,
};
use crate::services::account_directory::AccountDirectory;
use crate::services::device_directory::DeviceDirectory;
use crate::services::ownership_linker::OwnershipLinker;
use crate::services::slot_reconciler::SlotReconciler;

/// The top-level telemetry use case.
pub struct TelemetryIngestor<PR, SR, CR, AR, OR> {
    devices: Arc<DeviceDirectory<PR>>,
    slots: Arc<SlotReconciler<SR, CR>>,
    accounts: Arc<AccountDirectory<AR>>,
    linker: Arc<OwnershipLinker<OR>>,
}

impl<PR, SR, CR, AR, OR> TelemetryIngestor<PR, SR, CR, AR, OR>
where
    PR: PhoneRepository,
    SR: SimSlotRepository,
    CR: SdCardRepository,
    AR: AccountRepository,
    OR: OwnershipRepository,
{
    /// Wire the ingestor over the shared service instances.
    pub fn new(
        devices: Arc<DeviceDirectory<PR>>,
        slots: Arc<SlotReconciler<SR, CR>>,
        accounts: Arc<AccountDirectory<AR>>,
        linker: Arc<OwnershipLinker<OR>>,
    ) -> Self {
        Self {
            devices,
            slots,
            accounts,
            linker,
        }
    }

    /// Ingest one report.
    ///
    /// Retrying a failed call is safe at the device/slot level: every
    /// write is an upsert keyed by a natural key.
    ///
    /// # Errors
    ///
    /// Validation errors abort before any write. A [`PhoneHubError::NotFound`]
    /// from the linking step surfaces to the caller but does not undo the
    /// device and slot writes already committed.
    #[tracing::instrument(skip(self, report), fields(model_tag = %report.phone.model_tag))]
    pub async fn ingest(&self, report: TelemetryReport) -> Result<IngestOutcome, PhoneHubError> {
        let mut info = report.phone;
        info.model_tag = catalog::display_model_tag(&info.model_tag);
        info.sim_slots = u32::try_from(report.sim_info.len()).unwrap_or(u32::MAX);
        info.sd_slots = u32::try_from(report.sd_info.len()).unwrap_or(u32::MAX);

        let (phone, created) = self.devices.resolve_or_create(info).await?;

        self.slots.reconcile_sims(phone.id, report.sim_info).await?;
        self.slots.reconcile_sds(phone.id, report.sd_info).await?;

        let mut owner = None;
        if let Some(code) = report.account_code {
            let account = self.accounts.find_by_code(code).await?;
            self.linker.link(account.id, phone.id).await?;
            if report.user_info_needed {
                owner = Some(account.profile());
            }
        }

        Ok(IngestOutcome {
            phone_id: phone.id,
            created,
            owner,
        })
    }
}
