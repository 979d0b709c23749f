//! Phone — one physical device tracked by the inventory.
//!
//! The identity key is the agent-supplied model tag (case sensitive);
//! the numeric surrogate id is assigned by the store on first creation
//! and preserved across subsequent reports.

use serde::{Deserialize, Serialize};

use crate::error::{PhoneHubError, ValidationError};
use crate::id::PhoneId;

/// A persisted phone record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phone {
    pub id: PhoneId,
    #[serde(flatten)]
    pub info: PhoneInfo,
}

/// The device attributes carried by a telemetry report.
///
/// All fields are mutable on re-report except `model_tag`, which is the
/// upsert key. `sim_slots` and `sd_slots` are derived by the ingestor from
/// the report's slot-list lengths, so they default when deserializing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhoneInfo {
    pub manufacturer: String,
    pub model_tag: String,
    pub model_number: String,
    pub os_version: String,
    pub api_version: String,
    pub cpu: String,
    pub firmware: String,
    pub bootloader: String,
    pub supported_archs: Vec<String>,
    #[serde(default)]
    pub sim_slots: u32,
    #[serde(default)]
    pub sd_slots: u32,
}

impl PhoneInfo {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneHubError::Validation`] when the model tag is empty,
    /// since the upsert key must never be blank.
    pub fn validate(&self) -> Result<(), PhoneHubError> {
        if self.model_tag.is_empty() {
            return Err(ValidationError::EmptyModelTag.into());
        }
        Ok(())
    }
}
