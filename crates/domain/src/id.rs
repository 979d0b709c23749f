//! Typed identifier newtypes backed by database-assigned integers.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw database identifier.
            #[must_use]
            pub fn from_i64(value: i64) -> Self {
                Self(value)
            }

            /// Access the raw identifier.
            #[must_use]
            pub fn as_i64(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Phone`](crate::phone::Phone).
    PhoneId
);

define_id!(
    /// Unique identifier for a [`SimSlot`](crate::sim::SimSlot).
    SimSlotId
);

define_id!(
    /// Unique identifier for an [`SdCard`](crate::sd::SdCard).
    SdCardId
);

define_id!(
    /// Unique identifier for an [`Account`](crate::account::Account).
    AccountId
);

define_id!(
    /// Unique identifier for a [`Notification`](crate::notification::Notification).
    NotificationId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = PhoneId::from_i64(42);
        let text = id.to_string();
        let parsed: PhoneId = text.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_bare_integer() {
        let id = AccountId::from_i64(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let parsed: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric() {
        let result = SimSlotId::from_str("not-a-number");
        assert!(result.is_err());
    }

    #[test]
    fn should_expose_raw_value() {
        let id = SdCardId::from_i64(9000);
        assert_eq!(id.as_i64(), 9000);
    }
}
