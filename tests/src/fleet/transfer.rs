#![cfg(test)]
use stowr_common::error::StowageError;
use stowr_common::fleet::{ShipSpec, Transfer};
use stowr_core::{Fleet, FleetError};

use crate::utils::{reefer, ship};

#[test]
fn transfer_to_full_target_keeps_container_on_source() {
    let mut source = ship(5, 1_000.0);
    let mut target = ship(1, 1_000.0);
    source.load_container(reefer("X", 10.0, 5.0)).unwrap();
    target.load_container(reefer("Y", 10.0, 5.0)).unwrap();

    let err = source.transfer_container(&mut target, "X").unwrap_err();

    assert_eq!(err, StowageError::CapacityExceeded { max_containers: 1 });
    assert!(source.find_container("X").is_some());
    assert!(target.find_container("X").is_none());
    assert_eq!(target.len(), 1);
}

#[test]
fn transfer_to_overweight_target_keeps_container_on_source() {
    let mut source = ship(5, 1_000.0);
    let mut target = ship(5, 50.0);
    source.load_container(reefer("X", 10.0, 45.0)).unwrap();

    let err = source.transfer_container(&mut target, "X").unwrap_err();

    assert!(matches!(err, StowageError::WeightExceeded { .. }));
    assert_eq!(source.total_weight(), 55.0);
    assert!(target.is_empty());
}

#[test]
fn transfer_carries_loaded_weight() {
    let mut source = ship(5, 1_000.0);
    let mut target = ship(5, 1_000.0);
    source.load_container(reefer("X", 10.0, 45.0)).unwrap();

    assert_eq!(source.transfer_container(&mut target, "X"), Ok(Transfer::Moved));
    assert_eq!(source.total_weight(), 0.0);
    assert_eq!(target.total_weight(), 55.0);
}

#[test]
fn fleet_round_trip_through_a_tender() {
    let mut fleet = Fleet::new("flagship", ShipSpec::default()).unwrap();
    fleet.commission("tender", ShipSpec::new(12.0, 2, 500.0)).unwrap();
    fleet.stow(reefer("R-1", 100.0, 50.0)).unwrap();
    fleet.stow(reefer("R-2", 100.0, 50.0)).unwrap();
    fleet.stow(reefer("R-3", 100.0, 50.0)).unwrap();

    assert_eq!(fleet.transfer("R-1", "tender"), Ok(Transfer::Moved));
    assert_eq!(fleet.transfer("R-2", "tender"), Ok(Transfer::Moved));
    assert!(matches!(
        fleet.transfer("R-3", "tender"),
        Err(FleetError::Stowage(StowageError::CapacityExceeded { .. }))
    ));

    fleet.select("tender").unwrap();
    assert_eq!(fleet.ship_info().container_count, 2);
    assert_eq!(fleet.transfer("R-2", "flagship"), Ok(Transfer::Moved));
    assert_eq!(fleet.ship("flagship").unwrap().len(), 2);
}

#[test]
fn fleet_reports_missing_container_softly() {
    let mut fleet = Fleet::new("flagship", ShipSpec::default()).unwrap();
    fleet.commission("tender", ShipSpec::default()).unwrap();

    assert_eq!(fleet.transfer("ghost", "tender"), Ok(Transfer::NotFound));
    assert!(fleet.unload("ghost").is_none());
    assert!(fleet.container_info("ghost").is_none());
    assert!(matches!(fleet.replace("ghost", reefer("R-1", 1.0, 0.0)), Ok(None)));
}
