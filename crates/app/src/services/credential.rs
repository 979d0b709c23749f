//! Credential service — password hashing and verification.
//!
//! Delegates entirely to argon2id with a fresh random salt per hash. No
//! custom comparison logic is layered on top of the primitive's verifier,
//! and any malformed stored hash verifies as false rather than erroring.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use phonehub_domain::error::PhoneHubError;

/// Stateless password hashing service.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialService;

impl CredentialService {
    /// Hash a plaintext password.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneHubError::Storage`] if the hashing primitive itself
    /// fails (out of memory for the configured cost); the plaintext is
    /// never persisted or logged.
    pub fn hash(&self, plaintext: &str) -> Result<String, PhoneHubError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|err| PhoneHubError::Storage(Box::new(err)))
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// Fails closed: a hash that cannot be parsed is a verification
    /// failure, never a success and never an error.
    #[must_use]
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(plaintext.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_verify_own_hash() {
        let svc = CredentialService;
        let hash = svc.hash("pw").unwrap();
        assert!(svc.verify("pw", &hash));
    }

    #[test]
    fn should_reject_wrong_plaintext() {
        let svc = CredentialService;
        let hash = svc.hash("pw").unwrap();
        assert!(!svc.verify("other", &hash));
    }

    #[test]
    fn should_salt_each_hash_independently() {
        let svc = CredentialService;
        let a = svc.hash("pw").unwrap();
        let b = svc.hash("pw").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn should_fail_closed_on_malformed_hash() {
        let svc = CredentialService;
        assert!(!svc.verify("pw", "not-a-phc-string"));
        assert!(!svc.verify("pw", ""));
    }
}
