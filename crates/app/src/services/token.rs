//! Token service — issue and validate signed session tokens.
//!
//! Compact HS256 JWTs carrying the account email as subject, the role,
//! and an absolute expiry. The signing secret is process-wide
//! configuration passed in at construction; rotating it invalidates all
//! outstanding tokens.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use phonehub_domain::error::PhoneHubError;

/// Claims embedded in every session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the account email.
    pub sub: String,
    /// Role tag, e.g. `"user"`.
    pub role: String,
    /// Issued at (unix seconds).
    pub iat: i64,
    /// Expiry (unix seconds).
    pub exp: i64,
}

/// Issues and validates HMAC-signed session tokens.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl TokenService {
    /// Build a service signing with `secret`, issuing tokens valid for
    /// `ttl_secs`.
    #[must_use]
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
            ttl_secs,
        }
    }

    /// Issue a signed token for `email` with the given role.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneHubError::InvalidToken`] if encoding fails (never
    /// expected with an HMAC key).
    pub fn issue(&self, email: &str, role: &str) -> Result<String, PhoneHubError> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: email.to_string(),
            role: role.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };
        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| PhoneHubError::InvalidToken)
    }

    /// Verify signature and expiry, returning the embedded claims.
    ///
    /// # Errors
    ///
    /// Any signature mismatch, malformed structure, or past expiry fails
    /// with [`PhoneHubError::InvalidToken`] — a token is never partially
    /// trusted.
    pub fn validate(&self, token: &str) -> Result<Claims, PhoneHubError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| PhoneHubError::InvalidToken)
    }
}
