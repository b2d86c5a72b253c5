//! # Ship Aggregate
//!
//! A ship owns its containers in load order. The count and weight limits are
//! checked whenever a container comes aboard (load, replace, transfer), not
//! continuously: cargo loaded into a container that is already aboard is not
//! re-checked against the ship.
//!
//! Container numbers are unique per ship. Lookups by number therefore match
//! at most one container.

use tracing::debug;

use crate::cargo::Container;
use crate::error::{self, Result, StowageError};
use crate::fleet::snapshot::{ContainerInfo, ShipInfo};

/// The fixed limits of a ship.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipSpec {
    /// Informational only, nothing is checked against it.
    pub max_speed: f64,
    pub max_containers: usize,
    pub max_weight: f64,
}

impl Default for ShipSpec {
    fn default() -> Self {
        Self {
            max_speed: 25.5,
            max_containers: 100,
            max_weight: 50_000.0,
        }
    }
}

impl ShipSpec {
    pub fn new(max_speed: f64, max_containers: usize, max_weight: f64) -> Self {
        Self {
            max_speed,
            max_containers,
            max_weight,
        }
    }

    pub fn validate(&self) -> Result<()> {
        error::quantity("max speed", self.max_speed)?;
        error::quantity("max weight", self.max_weight)?;
        Ok(())
    }
}

/// Outcome of [`Ship::transfer_container`] when no limit was broken.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    Moved,
    NotFound,
}

#[derive(Debug, Clone)]
pub struct Ship {
    spec: ShipSpec,
    containers: Vec<Container>,
}

impl Ship {
    pub fn new(spec: ShipSpec) -> Result<Self> {
        spec.validate()?;
        Ok(Self {
            spec,
            containers: Vec::new(),
        })
    }

    pub fn spec(&self) -> &ShipSpec {
        &self.spec
    }

    /// Containers in the order they came aboard.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.containers.iter().map(Container::current_weight).sum()
    }

    /// Checks whether `container` could come aboard right now, without
    /// changing anything.
    ///
    /// The count limit is checked first, then the weight limit against the
    /// container's current weight, then number uniqueness.
    pub fn admit(&self, container: &Container) -> Result<()> {
        if self.containers.len() >= self.spec.max_containers {
            return Err(StowageError::CapacityExceeded {
                max_containers: self.spec.max_containers,
            });
        }

        let total = self.total_weight() + container.current_weight();
        if total > self.spec.max_weight {
            return Err(StowageError::WeightExceeded {
                incoming: container.current_weight(),
                total,
                max_weight: self.spec.max_weight,
            });
        }

        if self.position(container.number()).is_some() {
            return Err(StowageError::DuplicateContainer(container.number().to_string()));
        }

        Ok(())
    }

    pub fn load_container(&mut self, container: Container) -> Result<()> {
        self.admit(&container)?;
        debug!(
            "Container {} aboard ({} kg)",
            container.number(),
            container.current_weight()
        );
        self.containers.push(container);
        Ok(())
    }

    /// Takes the container off the ship. `None` when it is not aboard.
    pub fn unload_container(&mut self, number: &str) -> Option<Container> {
        let idx = self.position(number)?;
        Some(self.containers.remove(idx))
    }

    /// Swaps the container numbered `old_number` for `new_container` at the
    /// same position and hands back the one taken off.
    ///
    /// Returns `Ok(None)` and changes nothing when `old_number` is not aboard.
    /// The swap is refused if it would break the weight limit or if
    /// `new_container` reuses the number of another container aboard.
    pub fn replace_container(
        &mut self,
        old_number: &str,
        new_container: Container,
    ) -> Result<Option<Container>> {
        let Some(idx) = self.position(old_number) else {
            return Ok(None);
        };

        let clashes = self
            .containers
            .iter()
            .enumerate()
            .any(|(i, c)| i != idx && c.has_number(new_container.number()));
        if clashes {
            return Err(StowageError::DuplicateContainer(
                new_container.number().to_string(),
            ));
        }

        let total = self.total_weight() - self.containers[idx].current_weight()
            + new_container.current_weight();
        if total > self.spec.max_weight {
            return Err(StowageError::WeightExceeded {
                incoming: new_container.current_weight(),
                total,
                max_weight: self.spec.max_weight,
            });
        }

        Ok(Some(std::mem::replace(&mut self.containers[idx], new_container)))
    }

    /// Moves the container numbered `number` onto `target`.
    ///
    /// Either both ships change or neither does: the target's limits are
    /// checked before the container leaves this ship.
    pub fn transfer_container(&mut self, target: &mut Ship, number: &str) -> Result<Transfer> {
        let Some(idx) = self.position(number) else {
            return Ok(Transfer::NotFound);
        };

        target.admit(&self.containers[idx])?;
        let container = self.containers.remove(idx);
        target.containers.push(container);
        Ok(Transfer::Moved)
    }

    pub fn find_container(&self, number: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.has_number(number))
    }

    pub fn find_container_mut(&mut self, number: &str) -> Option<&mut Container> {
        self.containers.iter_mut().find(|c| c.has_number(number))
    }

    pub fn container_info(&self, number: &str) -> Option<ContainerInfo> {
        self.find_container(number).map(Container::info)
    }

    pub fn info(&self) -> ShipInfo {
        ShipInfo {
            max_speed: self.spec.max_speed,
            max_containers: self.spec.max_containers,
            max_weight: self.spec.max_weight,
            container_count: self.containers.len(),
            current_weight: self.total_weight(),
        }
    }

    fn position(&self, number: &str) -> Option<usize> {
        self.containers.iter().position(|c| c.has_number(number))
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
