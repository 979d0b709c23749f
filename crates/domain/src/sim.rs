//! SIM slot — a SIM card record, optionally linked to one owning phone.

use serde::{Deserialize, Serialize};

use crate::id::{PhoneId, SimSlotId};

/// A persisted SIM card.
///
/// `phone_id` is `None` when the card was reported once but absent from the
/// owning phone's most recent report (detached, not deleted).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimSlot {
    pub id: SimSlotId,
    pub phone_id: Option<PhoneId>,
    pub phone_number: String,
    pub operator: String,
}

/// A SIM entry as reported by an agent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimInfo {
    pub phone_number: String,
    pub operator: String,
}

impl SimInfo {
    /// An agent reports one entry per physical slot; a slot without a card
    /// comes through with both fields blank and must not be persisted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phone_number.is_empty() && self.operator.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_treat_blank_entry_as_empty() {
        assert!(SimInfo::default().is_empty());
    }

    #[test]
    fn should_treat_entry_with_number_as_occupied() {
        let sim = SimInfo {
            phone_number: "79990000000".to_string(),
            operator: String::new(),
        };
        assert!(!sim.is_empty());
    }

    #[test]
    fn should_treat_entry_with_operator_only_as_occupied() {
        let sim = SimInfo {
            phone_number: String::new(),
            operator: "MTS".to_string(),
        };
        assert!(!sim.is_empty());
    }
}
