//! # Stowr Core
//!
//! Application layer on top of [`stowr_common`]. It keeps a [`fleet::Fleet`]
//! of named ships and turns each user intent (stow, load cargo, unload,
//! replace, transfer, inspect) into calls on the domain model, reporting the
//! outcome through `tracing`.

pub mod error;
pub mod fleet;

pub use error::FleetError;
pub use fleet::Fleet;
