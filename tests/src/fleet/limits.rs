#![cfg(test)]
use stowr_common::cargo::Container;
use stowr_common::error::StowageError;

use crate::utils::{reefer, ship};

#[test]
fn single_slot_ship_refuses_second_container() {
    let mut ship = ship(1, 1_000.0);

    let mut a = Container::gas("A", 50.0, 100.0, 0.0).unwrap();
    a.load(40.0).unwrap();
    assert_eq!(a.current_weight(), 140.0);
    ship.load_container(a).unwrap();

    let b = Container::gas("B", 50.0, 100.0, 0.0).unwrap();
    let err = ship.load_container(b).unwrap_err();

    assert_eq!(err, StowageError::CapacityExceeded { max_containers: 1 });
    assert_eq!(ship.len(), 1);
    assert_eq!(ship.total_weight(), 140.0);
}

#[test]
fn filling_every_slot_then_one_more_fails() {
    let mut ship = ship(5, 10_000.0);
    for i in 0..5 {
        ship.load_container(reefer(&format!("R-{i}"), 10.0, 0.0)).unwrap();
    }
    let err = ship.load_container(reefer("R-5", 10.0, 0.0)).unwrap_err();
    assert_eq!(err, StowageError::CapacityExceeded { max_containers: 5 });
}

#[test]
fn weight_overflow_leaves_total_unchanged() {
    let mut ship = ship(10, 1_000.0);
    ship.load_container(reefer("R-1", 100.0, 600.0)).unwrap();
    ship.load_container(reefer("R-2", 100.0, 100.0)).unwrap();

    let err = ship.load_container(reefer("R-3", 100.0, 1.0)).unwrap_err();

    assert!(matches!(err, StowageError::WeightExceeded { max_weight, .. } if max_weight == 1_000.0));
    assert_eq!(ship.total_weight(), 900.0);
    assert_eq!(ship.len(), 2);
}

#[test]
fn cargo_loaded_aboard_is_not_rechecked() {
    let mut ship = ship(10, 200.0);
    ship.load_container(reefer("R-1", 100.0, 0.0)).unwrap();

    ship.find_container_mut("R-1").unwrap().load(500.0).unwrap();

    assert_eq!(ship.total_weight(), 600.0);
    assert_eq!(ship.info().spare_weight(), 0.0);
}

#[test]
fn replace_with_unknown_number_is_a_noop() {
    let mut ship = ship(10, 1_000.0);
    ship.load_container(reefer("R-1", 10.0, 0.0)).unwrap();
    ship.load_container(reefer("R-2", 20.0, 0.0)).unwrap();

    let replaced = ship
        .replace_container("R-404", reefer("R-3", 30.0, 0.0))
        .unwrap();

    assert!(replaced.is_none());
    let numbers: Vec<&str> = ship.containers().iter().map(Container::number).collect();
    assert_eq!(numbers, ["R-1", "R-2"]);
    assert_eq!(ship.total_weight(), 30.0);
}
