//! Shared application state for axum handlers.

use std::sync::Arc;

use phonehub_app::ports::{
    AccountRepository, NotificationRepository, OwnershipRepository, PhoneRepository,
    SdCardRepository, SimSlotRepository,
};
use phonehub_app::services::account_directory::AccountDirectory;
use phonehub_app::services::code_allocator::CodeAllocator;
use phonehub_app::services::device_directory::DeviceDirectory;
use phonehub_app::services::notification_log::NotificationLog;
use phonehub_app::services::ownership_linker::OwnershipLinker;
use phonehub_app::services::slot_reconciler::SlotReconciler;
use phonehub_app::services::telemetry_ingestor::TelemetryIngestor;
use phonehub_app::services::token::TokenService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying types themselves do not need to
/// be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<PR, SR, CR, AR, OR, NR> {
    /// Phone upsert and listing.
    pub devices: Arc<DeviceDirectory<PR>>,
    /// SIM/SD reconciliation and listing.
    pub slots: Arc<SlotReconciler<SR, CR>>,
    /// Registration, login verification, code resolution.
    pub accounts: Arc<AccountDirectory<AR>>,
    /// Ownership links and the accounts listing.
    pub linker: Arc<OwnershipLinker<OR>>,
    /// The top-level telemetry use case.
    pub ingestor: Arc<TelemetryIngestor<PR, SR, CR, AR, OR>>,
    /// Notification feed.
    pub notifications: Arc<NotificationLog<NR>>,
    /// Session token issue/validate, shared with the auth middleware.
    pub tokens: Arc<TokenService>,
}

impl<PR, SR, CR, AR, OR, NR> Clone for AppState<PR, SR, CR, AR, OR, NR> {
    fn clone(&self) -> Self {
        Self {
            devices: Arc::clone(&self.devices),
            slots: Arc::clone(&self.slots),
            accounts: Arc::clone(&self.accounts),
            linker: Arc::clone(&self.linker),
            ingestor: Arc::clone(&self.ingestor),
            notifications: Arc::clone(&self.notifications),
            tokens: Arc::clone(&self.tokens),
        }
    }
}

impl<PR, SR, CR, AR, OR, NR> AppState<PR, SR, CR, AR, OR, NR>
where
    PR: PhoneRepository + Send + Sync + 'static,
    SR: SimSlotRepository + Send + Sync + 'static,
    CR: SdCardRepository + Send + Sync + 'static,
    AR: AccountRepository + Send + Sync + 'static,
    OR: OwnershipRepository + Send + Sync + 'static,
    NR: NotificationRepository + Send + Sync + 'static,
{
    /// Wire the state from repositories and the token service.
    ///
    /// Services are constructed here so the composition root only deals
    /// in adapters; the ingestor shares the same service instances the
    /// individual endpoints use.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        phone_repo: PR,
        sim_repo: SR,
        sd_repo: CR,
        account_repo: AR,
        ownership_repo: OR,
        notification_repo: NR,
        allocator: CodeAllocator,
        tokens: TokenService,
    ) -> Self {
        let devices = Arc::new(DeviceDirectory::new(phone_repo));
        let slots = Arc::new(SlotReconciler::new(sim_repo, sd_repo));
        let accounts = Arc::new(AccountDirectory::new(account_repo, allocator));
        let linker = Arc::new(OwnershipLinker::new(ownership_repo));
        let ingestor = Arc::new(TelemetryIngestor::new(
            Arc::clone(&devices),
            Arc::clone(&slots),
            Arc::clone(&accounts),
            Arc::clone(&linker),
        ));
        Self {
            devices,
            slots,
            accounts,
            linker,
            ingestor,
            notifications: Arc::new(NotificationLog::new(notification_repo)),
            tokens: Arc::new(tokens),
        }
    }
}
