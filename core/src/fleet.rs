//! # Fleet Service
//!
//! A fleet is a set of named ships, one of which is *active*. Container
//! operations always act on the active ship; transfers move a container from
//! the active ship to another ship of the fleet.
//!
//! Lookups that miss are reported with a warning and come back as `None` or
//! [`Transfer::NotFound`]. Rule violations come back as [`FleetError`].

use std::collections::BTreeMap;

use stowr_common::cargo::Container;
use stowr_common::fleet::{ContainerInfo, Ship, ShipInfo, ShipSpec, Transfer};
use tracing::{info, warn};

use crate::error::{FleetError, Result};

pub struct Fleet {
    active_name: String,
    active: Ship,
    docked: BTreeMap<String, Ship>,
}

impl Fleet {
    /// Starts a fleet with a single ship, which becomes the active one.
    pub fn new(name: impl Into<String>, spec: ShipSpec) -> Result<Self> {
        Ok(Self {
            active_name: name.into(),
            active: Ship::new(spec)?,
            docked: BTreeMap::new(),
        })
    }

    /// Adds an empty ship to the fleet without making it active.
    pub fn commission(&mut self, name: impl Into<String>, spec: ShipSpec) -> Result<()> {
        let name = name.into();
        if self.contains(&name) {
            return Err(FleetError::DuplicateShip(name));
        }
        let ship = Ship::new(spec)?;
        info!("Ship {name} joined the fleet");
        self.docked.insert(name, ship);
        Ok(())
    }

    /// Makes `name` the active ship. Selecting the active ship again is a no-op.
    pub fn select(&mut self, name: &str) -> Result<()> {
        if name == self.active_name {
            return Ok(());
        }
        let ship = self
            .docked
            .remove(name)
            .ok_or_else(|| FleetError::UnknownShip(name.to_string()))?;

        let previous = std::mem::replace(&mut self.active, ship);
        let previous_name = std::mem::replace(&mut self.active_name, name.to_string());
        self.docked.insert(previous_name, previous);
        Ok(())
    }

    pub fn active_name(&self) -> &str {
        &self.active_name
    }

    pub fn active(&self) -> &Ship {
        &self.active
    }

    pub fn contains(&self, name: &str) -> bool {
        name == self.active_name || self.docked.contains_key(name)
    }

    pub fn ship(&self, name: &str) -> Result<&Ship> {
        if name == self.active_name {
            return Ok(&self.active);
        }
        self.docked
            .get(name)
            .ok_or_else(|| FleetError::UnknownShip(name.to_string()))
    }

    /// Every ship of the fleet, ordered by name.
    pub fn ships(&self) -> Vec<(&str, &Ship)> {
        let mut ships: Vec<(&str, &Ship)> = self
            .docked
            .iter()
            .map(|(name, ship)| (name.as_str(), ship))
            .collect();
        ships.push((self.active_name.as_str(), &self.active));
        ships.sort_by(|a, b| a.0.cmp(b.0));
        ships
    }

    /// Puts a new container aboard the active ship.
    pub fn stow(&mut self, container: Container) -> Result<()> {
        let number = container.number().to_string();
        self.active.load_container(container)?;
        info!("Container {number} loaded onto {}", self.active_name);
        Ok(())
    }

    /// Loads cargo into a container already aboard the active ship.
    ///
    /// The ship's weight limit is not re-checked: it only applies when a
    /// container comes aboard.
    pub fn load_cargo(&mut self, number: &str, cargo: f64) -> Result<Option<ContainerInfo>> {
        let Some(container) = self.active.find_container_mut(number) else {
            warn!("Container {number} not found on {}.", self.active_name);
            return Ok(None);
        };
        container.load(cargo)?;
        info!("Loaded {cargo} kg of cargo into container {number}");
        Ok(Some(container.info()))
    }

    /// Empties a container aboard the active ship.
    pub fn empty_container(&mut self, number: &str) -> Option<ContainerInfo> {
        let Some(container) = self.active.find_container_mut(number) else {
            warn!("Container {number} not found on {}.", self.active_name);
            return None;
        };
        container.empty();
        info!("Container {number} emptied");
        Some(container.info())
    }

    pub fn unload(&mut self, number: &str) -> Option<Container> {
        match self.active.unload_container(number) {
            Some(container) => {
                info!("Container {number} unloaded from {}", self.active_name);
                Some(container)
            }
            None => {
                warn!("Container {number} not found on {}.", self.active_name);
                None
            }
        }
    }

    pub fn replace(&mut self, old_number: &str, new_container: Container) -> Result<Option<Container>> {
        let new_number = new_container.number().to_string();
        let replaced = self.active.replace_container(old_number, new_container)?;
        match &replaced {
            Some(_) => info!("Container {old_number} replaced by {new_number}"),
            None => warn!("Container {old_number} not found on {}.", self.active_name),
        }
        Ok(replaced)
    }

    /// Moves a container from the active ship to the ship named `target`.
    pub fn transfer(&mut self, number: &str, target: &str) -> Result<Transfer> {
        if target == self.active_name {
            return Err(FleetError::SameShip(target.to_string()));
        }
        let target_ship = self
            .docked
            .get_mut(target)
            .ok_or_else(|| FleetError::UnknownShip(target.to_string()))?;

        let outcome = self.active.transfer_container(target_ship, number)?;
        match outcome {
            Transfer::Moved => info!("Container {number} transferred to {target}."),
            Transfer::NotFound => warn!("Container {number} not found on {}.", self.active_name),
        }
        Ok(outcome)
    }

    pub fn container_info(&self, number: &str) -> Option<ContainerInfo> {
        let info = self.active.container_info(number);
        if info.is_none() {
            warn!("Container {number} not found on {}.", self.active_name);
        }
        info
    }

    pub fn ship_info(&self) -> ShipInfo {
        self.active.info()
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
