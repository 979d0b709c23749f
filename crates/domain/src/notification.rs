//! Notification — an append-only log entry forwarded by a device agent.

use serde::{Deserialize, Serialize};

use crate::id::NotificationId;

/// A persisted notification. Keyed to a device by model number rather than
/// surrogate id, since agents forward these before the phone record may
/// exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "notification_id")]
    pub id: NotificationId,
    #[serde(flatten)]
    pub info: NotificationInfo,
}

/// One notification as reported by an agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationInfo {
    pub model_number: String,
    #[serde(rename = "notification_source")]
    pub source: String,
    pub sender: String,
    pub body: String,
    /// Agent-side unix timestamp in milliseconds.
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_agent_field_names_in_json() {
        let notification = Notification {
            id: NotificationId::from_i64(3),
            info: NotificationInfo {
                model_number: "GVU6C".to_string(),
                source: "org.example.mail".to_string(),
                sender: "inbox".to_string(),
                body: "hello".to_string(),
                timestamp: 1_700_000_000_000,
            },
        };
        let json = serde_json::to_value(&notification).unwrap();
        assert_eq!(json["notification_id"], 3);
        assert_eq!(json["notification_source"], "org.example.mail");
    }
}
