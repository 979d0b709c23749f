//! Storage-specific error type wrapping sqlx errors.

use phonehub_domain::error::PhoneHubError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to deserialize a stored JSON value.
    #[error("JSON deserialization error")]
    Json(#[from] serde_json::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for PhoneHubError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Database(sqlx::Error::PoolTimedOut) => Self::Timeout,
            other => Self::Storage(Box::new(other)),
        }
    }
}

/// Whether a sqlx error is a unique-constraint violation on the given
/// column (`"table.column"` in `SQLite`'s message format).
pub(crate) fn is_unique_violation(err: &sqlx::Error, column: &str) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_unique_violation() && db.message().contains(column))
}

/// Whether a sqlx error is a foreign-key violation.
pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_foreign_key_violation)
}
