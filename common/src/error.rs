//! # Stowage Errors
//!
//! Every rule the model enforces fails with a [`StowageError`]. Lookups that
//! miss are not errors: they surface as `None` or
//! [`Transfer::NotFound`](crate::fleet::ship::Transfer::NotFound).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StowageError {
    /// Cargo heavier than the container's load capacity.
    #[error("cargo weight {cargo} exceeds the load capacity {capacity} of container {container}")]
    Overfill {
        container: String,
        cargo: f64,
        capacity: f64,
    },
    /// The ship already carries its maximum number of containers.
    #[error("maximum number of containers reached ({max_containers})")]
    CapacityExceeded { max_containers: usize },
    /// Accepting the container would push the ship over its weight limit.
    #[error("adding {incoming} would bring the ship to {total}, over its maximum weight of {max_weight}")]
    WeightExceeded {
        incoming: f64,
        total: f64,
        max_weight: f64,
    },
    /// A container with the same number is already aboard.
    #[error("container {0} is already aboard")]
    DuplicateContainer(String),
    /// The container type name did not match any known kind.
    #[error("unknown container type '{0}' (expected liquid, gas or refrigerated)")]
    UnknownKind(String),
    /// A weight, capacity or reading that is not a usable number.
    #[error("{field} must be a finite{} number (got {value})", sign_rule(.signed))]
    InvalidMeasure {
        field: &'static str,
        value: f64,
        signed: bool,
    },
}

fn sign_rule(signed: &bool) -> &'static str {
    if *signed { "" } else { ", non-negative" }
}

pub type Result<T> = std::result::Result<T, StowageError>;

/// Accepts finite, non-negative quantities such as weights and capacities.
pub fn quantity(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(StowageError::InvalidMeasure {
            field,
            value,
            signed: false,
        })
    }
}

/// Accepts any finite reading, negative included (temperatures, gauges).
pub fn reading(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(StowageError::InvalidMeasure {
            field,
            value,
            signed: true,
        })
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
