//! # Cargo Model
//!
//! Containers and the behavior that differs between their kinds.
//!
//! * [`container::Container`]: the record every kind shares (number, capacity, weights).
//! * [`kind::ContainerKind`]: the variant payload deciding hazard and residue rules.
//! * [`hazard::notify_hazard`]: the notice raised by liquid and gas loads.

pub mod container;
pub mod hazard;
pub mod kind;

pub use container::Container;
pub use kind::{ContainerClass, ContainerKind};
