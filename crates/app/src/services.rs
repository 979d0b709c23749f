//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic
//! parameters (constructor injection), keeping this layer decoupled from
//! concrete adapters. The credential, code-allocation, and token services
//! are pure compute and own no ports.

pub mod account_directory;
pub mod code_allocator;
pub mod credential;
pub mod device_directory;
pub mod notification_log;
pub mod ownership_linker;
pub mod slot_reconciler;
pub mod telemetry_ingestor;
pub mod token;
