//! # phonehub-adapter-http-axum
//!
//! HTTP adapter using [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Deserialize requests into the domain structures and invoke the
//!   application services
//! - Map the domain error taxonomy onto HTTP status codes
//! - Guard listing endpoints with bearer-token validation
//! - Request tracing and permissive CORS (agents and the dashboard run on
//!   other origins)
//!
//! ## Dependency rule
//! Depends on `phonehub-app` and `phonehub-domain`. The `app` and `domain`
//! crates must never reference this adapter.

pub mod api;
pub mod auth;
pub mod error;
pub mod router;
pub mod state;
