//! # phonehub-domain
//!
//! Pure domain model for the phonehub device-inventory system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Phones** (the devices reported by client agents)
//! - Define **Slots** (SIM cards and SD cards, optionally linked to a phone)
//! - Define **Accounts** (registered users with a numeric linking code)
//! - Define **Telemetry reports** (one agent submission)
//! - Contain all invariant enforcement and domain logic (emptiness
//!   predicates, field validation, catalog lookups)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod account;
pub mod catalog;
pub mod notification;
pub mod phone;
pub mod report;
pub mod sd;
pub mod sim;
