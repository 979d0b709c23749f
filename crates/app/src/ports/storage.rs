//! Storage ports — repository traits for persistence.
//!
//! Each entity family is owned by exactly one repository; no repository
//! mutates another family's records. All methods may block on IO and must
//! be treated as potentially failing with
//! [`PhoneHubError::Storage`](phonehub_domain::error::PhoneHubError) or
//! [`PhoneHubError::Timeout`](phonehub_domain::error::PhoneHubError).

use std::future::Future;

use phonehub_domain::account::{Account, AccountWithPhones, NewAccount};
use phonehub_domain::error::PhoneHubError;
use phonehub_domain::id::{AccountId, PhoneId};
use phonehub_domain::notification::{Notification, NotificationInfo};
use phonehub_domain::phone::{Phone, PhoneInfo};
use phonehub_domain::sd::{SdCard, SdInfo};
use phonehub_domain::sim::{SimInfo, SimSlot};

/// Persistence for phone records, keyed by model tag.
pub trait PhoneRepository {
    /// Insert-or-update in a single atomic statement keyed on `model_tag`.
    ///
    /// The returned flag is `true` when the call created the record. Two
    /// concurrent calls for the same tag must never create two rows; the
    /// store's uniqueness constraint is the arbiter, not a prior lookup.
    fn upsert(
        &self,
        info: PhoneInfo,
    ) -> impl Future<Output = Result<(Phone, bool), PhoneHubError>> + Send;

    fn find_by_model_tag(
        &self,
        model_tag: &str,
    ) -> impl Future<Output = Result<Option<Phone>, PhoneHubError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Phone>, PhoneHubError>> + Send;
}

/// Persistence for SIM cards, keyed by phone number.
pub trait SimSlotRepository {
    /// Detach every SIM currently linked to `phone_id`, then upsert each
    /// entry in `slots` relinked to it — both inside one transaction so a
    /// concurrent reconcile never observes a half-detached state.
    ///
    /// Callers pass only non-empty entries; the repository does not filter.
    fn reconcile(
        &self,
        phone_id: PhoneId,
        slots: Vec<SimInfo>,
    ) -> impl Future<Output = Result<Vec<SimSlot>, PhoneHubError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<SimSlot>, PhoneHubError>> + Send;
}

/// Persistence for SD cards, keyed by serial number.
pub trait SdCardRepository {
    /// SD analogue of [`SimSlotRepository::reconcile`].
    fn reconcile(
        &self,
        phone_id: PhoneId,
        slots: Vec<SdInfo>,
    ) -> impl Future<Output = Result<Vec<SdCard>, PhoneHubError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<SdCard>, PhoneHubError>> + Send;
}

/// Persistence for accounts.
pub trait AccountRepository {
    /// Constrained insert. A uniqueness violation surfaces as
    /// [`PhoneHubError::Conflict`](phonehub_domain::error::PhoneHubError)
    /// naming the violated constraint (`"code"` or `"email"`), so the
    /// registration loop can redraw codes without a check-then-insert race.
    fn insert(
        &self,
        account: NewAccount,
    ) -> impl Future<Output = Result<Account, PhoneHubError>> + Send;

    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<Account>, PhoneHubError>> + Send;

    fn find_by_code(
        &self,
        code: u32,
    ) -> impl Future<Output = Result<Option<Account>, PhoneHubError>> + Send;

    /// Advisory pre-check used by the allocator to skip taken codes cheaply.
    fn code_exists(&self, code: u32) -> impl Future<Output = Result<bool, PhoneHubError>> + Send;
}

/// Persistence for the phone-to-account ownership link.
pub trait OwnershipRepository {
    /// Upsert the single ownership row keyed by phone id; an existing
    /// owner is replaced. An unknown phone or account id surfaces as
    /// [`PhoneHubError::NotFound`](phonehub_domain::error::PhoneHubError).
    fn link(
        &self,
        account_id: AccountId,
        phone_id: PhoneId,
    ) -> impl Future<Output = Result<(), PhoneHubError>> + Send;

    fn accounts_with_phones(
        &self,
    ) -> impl Future<Output = Result<Vec<AccountWithPhones>, PhoneHubError>> + Send;
}

/// Persistence for the notification log.
pub trait NotificationRepository {
    fn insert(
        &self,
        info: NotificationInfo,
    ) -> impl Future<Output = Result<Notification, PhoneHubError>> + Send;

    fn find_by_model_number(
        &self,
        model_number: &str,
    ) -> impl Future<Output = Result<Vec<Notification>, PhoneHubError>> + Send;
}
