//! SD card — a removable storage record, optionally linked to one phone.

use serde::{Deserialize, Serialize};

use crate::id::{PhoneId, SdCardId};

/// A persisted SD card, keyed by its globally unique serial number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdCard {
    pub id: SdCardId,
    pub phone_id: Option<PhoneId>,
    pub manufacturer: String,
    pub serial_no: String,
    pub total_space: u64,
    pub used_space: u64,
    pub free_space: u64,
}

/// An SD entry as reported by an agent.
///
/// `manufacturer` arrives as the raw card-register manufacturer id
/// (e.g. `"0x000003"`); the reconciler normalizes it to a company name
/// via [`catalog`](crate::catalog) before persisting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SdInfo {
    #[serde(rename = "sd_manufacturer_id")]
    pub manufacturer: String,
    pub serial_no: String,
    pub total_space: u64,
    pub used_space: u64,
    pub free_space: u64,
}

impl SdInfo {
    /// A vacant SD slot is reported with blank identifiers and zeroed
    /// space counters; it produces no record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.manufacturer.is_empty()
            && self.serial_no.is_empty()
            && self.total_space == 0
            && self.used_space == 0
            && self.free_space == 0
    }
}
