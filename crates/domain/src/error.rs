//! Error taxonomy shared across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PhoneHubError`]; adapters box their source errors into the `Storage`
//! variant so the domain crate never depends on a storage engine.

/// Top-level error type surfaced by every core operation.
#[derive(Debug, thiserror::Error)]
pub enum PhoneHubError {
    /// A report or request carried malformed or missing required fields.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A referenced account or phone does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// A uniqueness constraint was violated in a way the upsert logic
    /// did not absorb.
    #[error("conflict")]
    Conflict(#[from] ConflictError),

    /// The store was unreachable or a query failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A store operation exceeded its deadline.
    #[error("operation timed out")]
    Timeout,

    /// Credentials did not match. Deliberately carries no detail about
    /// which check failed.
    #[error("unauthorized")]
    Unauthorized,

    /// A session token failed signature, structure, or expiry checks.
    #[error("invalid token")]
    InvalidToken,

    /// The registration-code allocator exhausted its attempt budget.
    #[error("registration code space exhausted")]
    CodeSpaceExhausted,
}

/// Malformed or missing required fields.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A phone report arrived without a model tag.
    #[error("model tag must not be empty")]
    EmptyModelTag,
    /// Registration requires a display name.
    #[error("name must not be empty")]
    EmptyName,
    /// Registration and login require an email.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Registration and login require a password.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// A referenced record is absent.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found: {key}")]
pub struct NotFoundError {
    /// Entity family name, e.g. `"Account"`.
    pub entity: &'static str,
    /// The lookup key that missed.
    pub key: String,
}

/// A uniqueness constraint rejected a write.
#[derive(Debug, thiserror::Error)]
#[error("{entity} already exists for {constraint}")]
pub struct ConflictError {
    /// Entity family name.
    pub entity: &'static str,
    /// The violated constraint, e.g. `"email"` or `"code"`.
    pub constraint: &'static str,
}

impl PhoneHubError {
    /// Whether this error is a uniqueness conflict on the given constraint.
    ///
    /// Used by the registration loop to tell a code collision (retryable)
    /// apart from an email collision (terminal).
    #[must_use]
    pub fn is_conflict_on(&self, constraint: &str) -> bool {
        matches!(self, Self::Conflict(err) if err.constraint == constraint)
    }
}
