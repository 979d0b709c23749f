//! Slot reconciler — rewrites a phone's SIM/SD associations from a report.
//!
//! The agent reports the full current slot state; anything not re-reported
//! is no longer present in the device, so reconciliation first detaches
//! every slot linked to the phone and then relinks the reported ones by
//! their natural keys. Re-reporting a key held by another phone migrates
//! the slot to the most recent reporter (last write wins, by design).

use phonehub_domain::catalog;
use phonehub_domain::error::PhoneHubError;
use phonehub_domain::id::PhoneId;
use phonehub_domain::sd::{SdCard, SdInfo};
use phonehub_domain::sim::{SimInfo, SimSlot};

use crate::ports::{SdCardRepository, SimSlotRepository};

/// Application service owning SIM and SD slot records. It only sets or
/// clears the owning-phone reference, never touching other families.
pub struct SlotReconciler<SR, CR> {
    sims: SR,
    sds: CR,
}

impl<SR: SimSlotRepository, CR: SdCardRepository> SlotReconciler<SR, CR> {
    /// Create a reconciler over the two slot repositories.
    pub fn new(sims: SR, sds: CR) -> Self {
        Self { sims, sds }
    }

    /// Reconcile the SIM slots of `phone_id` against `reported`.
    ///
    /// Empty entries are silently skipped; they produce no record and no
    /// error. Returns the slots now linked to the phone.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository; slots of
    /// the other family already committed are not rolled back.
    #[tracing::instrument(skip(self, reported), fields(count = reported.len()))]
    pub async fn reconcile_sims(
        &self,
        phone_id: PhoneId,
        reported: Vec<SimInfo>,
    ) -> Result<Vec<SimSlot>, PhoneHubError> {
        let occupied: Vec<SimInfo> = reported.into_iter().filter(|sim| !sim.is_empty()).collect();
        self.sims.reconcile(phone_id, occupied).await
    }

    /// Reconcile the SD slots of `phone_id` against `reported`.
    ///
    /// Manufacturer ids are normalized to company names before persisting;
    /// unknown ids pass through unchanged.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, reported), fields(count = reported.len()))]
    pub async fn reconcile_sds(
        &self,
        phone_id: PhoneId,
        reported: Vec<SdInfo>,
    ) -> Result<Vec<SdCard>, PhoneHubError> {
        let occupied: Vec<SdInfo> = reported
            .into_iter()
            .filter(|sd| !sd.is_empty())
            .map(|mut sd| {
                sd.manufacturer = catalog::display_sd_manufacturer(&sd.manufacturer);
                sd
            })
            .collect();
        self.sds.reconcile(phone_id, occupied).await
    }

    /// List every SIM row, attached or not.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_sims(&self) -> Result<Vec<SimSlot>, PhoneHubError> {
        self.sims.get_all().await
    }

    /// List every SD row, attached or not.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_sds(&self) -> Result<Vec<SdCard>, PhoneHubError> {
        self.sds.get_all().await
    }
}
