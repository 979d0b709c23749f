//! Ownership linker — the current phone-to-account association.

use phonehub_domain::account::AccountWithPhones;
use phonehub_domain::error::PhoneHubError;
use phonehub_domain::id::{AccountId, PhoneId};

use crate::ports::OwnershipRepository;

/// Application service owning the ownership link table.
pub struct OwnershipLinker<R> {
    repo: R,
}

impl<R: OwnershipRepository> OwnershipLinker<R> {
    /// Create a linker backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Upsert the ownership row keyed by phone id.
    ///
    /// A phone that already has an owner is reassigned; "already owned"
    /// is never an error.
    ///
    /// # Errors
    ///
    /// [`PhoneHubError::NotFound`] for an unknown account or phone id, or
    /// a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn link(
        &self,
        account_id: AccountId,
        phone_id: PhoneId,
    ) -> Result<(), PhoneHubError> {
        self.repo.link(account_id, phone_id).await
    }

    /// List accounts (public fields only) with the phones they own.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_accounts_with_phones(
        &self,
    ) -> Result<Vec<AccountWithPhones>, PhoneHubError> {
        self.repo.accounts_with_phones().await
    }
}
