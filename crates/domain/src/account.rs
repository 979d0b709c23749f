//! Account — a registered user who can claim phones via a numeric code.

use serde::{Deserialize, Serialize};

use crate::error::{PhoneHubError, ValidationError};
use crate::id::AccountId;

/// Role tag attached to every account.
pub const ROLE_USER: &str = "user";

/// A persisted account. The password is stored only as an argon2id hash,
/// computed once at registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    /// Short human-enterable registration code, unique across accounts.
    pub code: u32,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

impl Account {
    /// The externally visible slice of an account.
    #[must_use]
    pub fn profile(&self) -> Profile {
        Profile {
            name: self.name.clone(),
            email: self.email.clone(),
            code: self.code,
        }
    }
}

/// Public account profile — never carries the hash or the role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub code: u32,
}

/// An account ready to be inserted: everything but the surrogate id.
///
/// Built by the account directory once the password is hashed and a code
/// has been drawn; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub code: u32,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

/// Read model for the accounts listing: who owns which phones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountWithPhones {
    #[serde(flatten)]
    pub profile: Profile,
    pub phone_ids: Vec<crate::id::PhoneId>,
}

/// Registration input, validated before any hashing or allocation.
#[derive(Debug, Clone, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    /// Check that all required fields are present.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneHubError::Validation`] naming the first blank field.
    pub fn validate(&self) -> Result<(), PhoneHubError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.email.is_empty() {
            return Err(ValidationError::EmptyEmail.into());
        }
        if self.password.is_empty() {
            return Err(ValidationError::EmptyPassword.into());
        }
        Ok(())
    }
}
