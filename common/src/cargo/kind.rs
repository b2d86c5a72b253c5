//! # Container Kinds
//!
//! A container is one of three kinds. The kind decides two things:
//! * whether a load raises a hazard notice ([`ContainerKind::raises_hazard`]),
//! * what weight is left behind after emptying ([`ContainerKind::residue_factor`]).

use std::fmt;
use std::str::FromStr;

use crate::error::StowageError;

/// Loads above this share of the load capacity are hazardous for liquid and gas.
pub const HAZARD_LOAD_RATIO: f64 = 0.5;

/// Share of the empty weight left after draining a liquid or gas container.
pub const RESIDUE_FACTOR: f64 = 0.05;

/// Names a kind without its payload, as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerClass {
    Liquid,
    Gas,
    Refrigerated,
}

impl ContainerClass {
    pub const ALL: [ContainerClass; 3] = [Self::Liquid, Self::Gas, Self::Refrigerated];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Liquid => "liquid",
            Self::Gas => "gas",
            Self::Refrigerated => "refrigerated",
        }
    }

    pub fn is_hazardous(self) -> bool {
        matches!(self, Self::Liquid | Self::Gas)
    }
}

impl fmt::Display for ContainerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainerClass {
    type Err = StowageError;

    /// Case-insensitive match on `liquid`, `gas` or `refrigerated`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|class| class.as_str() == lower)
            .ok_or_else(|| StowageError::UnknownKind(s.trim().to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContainerKind {
    Liquid { pressure: f64 },
    Gas { pressure: f64 },
    Refrigerated { temperature: f64, product_type: String },
}

impl ContainerKind {
    pub fn class(&self) -> ContainerClass {
        match self {
            Self::Liquid { .. } => ContainerClass::Liquid,
            Self::Gas { .. } => ContainerClass::Gas,
            Self::Refrigerated { .. } => ContainerClass::Refrigerated,
        }
    }

    /// Whether loading `cargo` into a container of this kind and `capacity`
    /// must raise a hazard notice.
    ///
    /// Gas ignores its pressure here; liquid only counts when pressurized.
    pub fn raises_hazard(&self, cargo: f64, capacity: f64) -> bool {
        let over_half = cargo > capacity * HAZARD_LOAD_RATIO;
        match self {
            Self::Liquid { pressure } => *pressure > 0.0 && over_half,
            Self::Gas { .. } => over_half,
            Self::Refrigerated { .. } => false,
        }
    }

    /// Multiplier applied to the empty weight after emptying, if any.
    pub fn residue_factor(&self) -> Option<f64> {
        match self {
            Self::Liquid { .. } | Self::Gas { .. } => Some(RESIDUE_FACTOR),
            Self::Refrigerated { .. } => None,
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
