use stowr_common::error::StowageError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FleetError {
    #[error("no ship named '{0}' in the fleet")]
    UnknownShip(String),
    #[error("a ship named '{0}' is already in the fleet")]
    DuplicateShip(String),
    #[error("'{0}' is the active ship, pick another ship as the transfer target")]
    SameShip(String),
    #[error(transparent)]
    Stowage(#[from] StowageError),
}

pub type Result<T> = std::result::Result<T, FleetError>;
