//! # phonehub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `phonehub-app::ports`
//! - Manage the `SQLite` connection pool lifecycle
//! - Run database migrations (sqlx embedded migrations)
//! - Map between domain types and database rows, and translate engine
//!   errors (unique violations, foreign-key violations, pool timeouts)
//!   into the domain error taxonomy
//!
//! ## Dependency rule
//! Depends on `phonehub-app` (for port traits) and `phonehub-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod account_repo;
pub mod error;
pub mod notification_repo;
pub mod ownership_repo;
pub mod phone_repo;
pub mod pool;
pub mod sd_repo;
pub mod sim_repo;

pub use account_repo::SqliteAccountRepository;
pub use notification_repo::SqliteNotificationRepository;
pub use ownership_repo::SqliteOwnershipRepository;
pub use phone_repo::SqlitePhoneRepository;
pub use pool::{Config, Database};
pub use sd_repo::SqliteSdCardRepository;
pub use sim_repo::SqliteSimSlotRepository;
