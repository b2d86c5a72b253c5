//! # Container
//!
//! The record shared by every kind of container. Kind specific behavior is
//! looked up on [`ContainerKind`] while loading and emptying.

use crate::cargo::hazard;
use crate::cargo::kind::{ContainerClass, ContainerKind};
use crate::error::{self, Result, StowageError};
use crate::fleet::snapshot::ContainerInfo;

#[derive(Debug, Clone)]
pub struct Container {
    number: String,
    load_capacity: f64,
    empty_weight: f64,
    current_weight: f64,
    kind: ContainerKind,
}

impl Container {
    /// Builds an unloaded container; its current weight starts at `empty_weight`.
    ///
    /// The number is not checked for uniqueness here, ships do that on load.
    pub fn new(
        number: impl Into<String>,
        load_capacity: f64,
        empty_weight: f64,
        kind: ContainerKind,
    ) -> Result<Self> {
        let load_capacity = error::quantity("load capacity", load_capacity)?;
        let empty_weight = error::quantity("empty weight", empty_weight)?;
        match &kind {
            ContainerKind::Liquid { pressure } | ContainerKind::Gas { pressure } => {
                error::reading("pressure", *pressure)?;
            }
            ContainerKind::Refrigerated { temperature, .. } => {
                error::reading("temperature", *temperature)?;
            }
        }

        Ok(Self {
            number: number.into(),
            load_capacity,
            empty_weight,
            current_weight: empty_weight,
            kind,
        })
    }

    pub fn liquid(
        number: impl Into<String>,
        load_capacity: f64,
        empty_weight: f64,
        pressure: f64,
    ) -> Result<Self> {
        Self::new(number, load_capacity, empty_weight, ContainerKind::Liquid { pressure })
    }

    pub fn gas(
        number: impl Into<String>,
        load_capacity: f64,
        empty_weight: f64,
        pressure: f64,
    ) -> Result<Self> {
        Self::new(number, load_capacity, empty_weight, ContainerKind::Gas { pressure })
    }

    pub fn refrigerated(
        number: impl Into<String>,
        load_capacity: f64,
        empty_weight: f64,
        temperature: f64,
        product_type: impl Into<String>,
    ) -> Result<Self> {
        let kind = ContainerKind::Refrigerated {
            temperature,
            product_type: product_type.into(),
        };
        Self::new(number, load_capacity, empty_weight, kind)
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn has_number(&self, number: &str) -> bool {
        self.number == number
    }

    pub fn load_capacity(&self) -> f64 {
        self.load_capacity
    }

    pub fn empty_weight(&self) -> f64 {
        self.empty_weight
    }

    pub fn current_weight(&self) -> f64 {
        self.current_weight
    }

    pub fn kind(&self) -> &ContainerKind {
        &self.kind
    }

    pub fn class(&self) -> ContainerClass {
        self.kind.class()
    }

    /// Fills the container with `cargo`, replacing whatever it held.
    ///
    /// Hazardous kinds raise their notice before the capacity check, so the
    /// notice is emitted even when the load is then refused with
    /// [`StowageError::Overfill`]. A refused load leaves the weight untouched.
    pub fn load(&mut self, cargo: f64) -> Result<()> {
        if self.kind.raises_hazard(cargo, self.load_capacity) {
            hazard::notify_hazard(&self.number);
        }

        let cargo = error::quantity("cargo weight", cargo)?;
        if cargo > self.load_capacity {
            return Err(StowageError::Overfill {
                container: self.number.clone(),
                cargo,
                capacity: self.load_capacity,
            });
        }

        self.current_weight = cargo + self.empty_weight;
        Ok(())
    }

    /// Resets to the empty weight, then keeps only the residue share for
    /// liquid and gas containers.
    ///
    /// The residue is taken from the empty weight, not from the cargo that was
    /// drained: a gas container of empty weight 200 always ends at 10.
    pub fn empty(&mut self) {
        self.current_weight = self.empty_weight;
        if let Some(factor) = self.kind.residue_factor() {
            self.current_weight *= factor;
        }
    }

    pub fn info(&self) -> ContainerInfo {
        ContainerInfo {
            number: self.number.clone(),
            class: self.class(),
            load_capacity: self.load_capacity,
            current_weight: self.current_weight,
        }
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
