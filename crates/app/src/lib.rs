//! # phonehub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound
//!   ports): one repository per entity family.
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DeviceDirectory` — atomic phone upsert keyed by model tag
//!   - `SlotReconciler` — detach-then-relink of SIM/SD slots
//!   - `AccountDirectory` — registration and login verification
//!   - `OwnershipLinker` — claim a phone for an account by code
//!   - `TelemetryIngestor` — the top-level report use case
//!   - `NotificationLog` — append-only notification feed
//! - Provide the IO-free credential, code-allocation, and token services.
//!
//! ## Dependency rule
//! Depends on `phonehub-domain` plus pure-compute crates (argon2,
//! jsonwebtoken, rand). Never imports adapter crates. Adapters depend on
//! *this* crate, not the reverse.

pub mod ports;
pub mod services;
