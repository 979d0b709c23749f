//! Device directory — resolves whether a reported phone is new or known.

use phonehub_domain::error::PhoneHubError;
use phonehub_domain::phone::{Phone, PhoneInfo};

use crate::ports::PhoneRepository;

/// Application service owning phone records.
pub struct DeviceDirectory<R> {
    repo: R,
}

impl<R: PhoneRepository> DeviceDirectory<R> {
    /// Create a new directory backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Look up by model tag and insert or update in one atomic upsert.
    ///
    /// Mutable attributes are overwritten in place; the surrogate id is
    /// preserved. The returned flag is `true` when the record was created.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneHubError::Validation`] for a blank model tag, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, info), fields(model_tag = %info.model_tag))]
    pub async fn resolve_or_create(&self, info: PhoneInfo) -> Result<(Phone, bool), PhoneHubError> {
        info.validate()?;
        self.repo.upsert(info).await
    }

    /// List all phones.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_phones(&self) -> Result<Vec<Phone>, PhoneHubError> {
        self.repo.get_all().await
    }
}
