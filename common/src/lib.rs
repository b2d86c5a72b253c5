//! # Stowage Domain
//!
//! Shared models for `stowr`. Pure Rust, no IO besides the hazard notice,
//! which is a tracing event.
//!
//! * **[`cargo`]**: containers, their kinds and the hazard notice.
//! * **[`fleet`]**: the ship aggregate and its read-only snapshots.
//! * **[`error`]**: the validation errors raised by both.
//! * **[`config`]**: runtime flags shared with the command line.

pub mod cargo;
pub mod config;
pub mod error;
pub mod fleet;
