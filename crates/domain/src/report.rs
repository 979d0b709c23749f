//! Telemetry report — one submission from a client agent describing a
//! device and its currently inserted SIM/SD slots.

use serde::{Deserialize, Serialize};

use crate::account::Profile;
use crate::id::PhoneId;
use crate::phone::PhoneInfo;
use crate::sd::SdInfo;
use crate::sim::SimInfo;

/// The full payload of one telemetry submission.
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryReport {
    #[serde(rename = "phone_info")]
    pub phone: PhoneInfo,
    #[serde(default)]
    pub sim_info: Vec<SimInfo>,
    #[serde(default)]
    pub sd_info: Vec<SdInfo>,
    /// Registration code of the account claiming this device, if any.
    #[serde(default)]
    pub account_code: Option<u32>,
    /// When set, a successful link echoes the owner's public profile back.
    #[serde(default)]
    pub user_info_needed: bool,
}

/// Result of ingesting one report.
#[derive(Debug, Clone, Serialize)]
pub struct IngestOutcome {
    pub phone_id: PhoneId,
    /// Whether this report created the phone record (as opposed to
    /// refreshing an existing one).
    pub created: bool,
    /// Present only when the report asked for it and a link happened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Profile>,
}
