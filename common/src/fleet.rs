//! # Fleet Model
//!
//! * [`ship::Ship`]: the aggregate that owns containers and enforces its limits.
//! * [`snapshot`]: read-only views handed to whoever renders them.

pub mod ship;
pub mod snapshot;

pub use ship::{Ship, ShipSpec, Transfer};
pub use snapshot::{ContainerInfo, ShipInfo};
