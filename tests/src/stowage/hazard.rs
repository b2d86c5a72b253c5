#![cfg(test)]
use stowr_common::cargo::Container;
use stowr_common::error::StowageError;

use crate::utils::{capture_logs, hazard_notices};

#[test]
fn gas_notifies_above_half_capacity_whatever_the_pressure() {
    for pressure in [0.0, 5.0] {
        let mut gas = Container::gas("G-100", 100.0, 20.0, pressure).unwrap();

        let (_, logs) = capture_logs(|| gas.load(50.0).unwrap());
        assert_eq!(hazard_notices(&logs), 0, "half capacity is not hazardous");

        let (_, logs) = capture_logs(|| gas.load(50.5).unwrap());
        assert_eq!(hazard_notices(&logs), 1);
        assert!(logs.contains("G-100"));
    }
}

#[test]
fn liquid_notifies_only_when_pressurized() {
    let mut pressurized = Container::liquid("L-1", 100.0, 20.0, 0.5).unwrap();
    let mut unpressurized = Container::liquid("L-2", 100.0, 20.0, 0.0).unwrap();

    let (_, logs) = capture_logs(|| pressurized.load(80.0).unwrap());
    assert_eq!(hazard_notices(&logs), 1);
    assert!(logs.contains("L-1"));

    let (_, logs) = capture_logs(|| pressurized.load(30.0).unwrap());
    assert_eq!(hazard_notices(&logs), 0);

    let (_, logs) = capture_logs(|| unpressurized.load(99.0).unwrap());
    assert_eq!(hazard_notices(&logs), 0);
}

#[test]
fn refrigerated_never_notifies() {
    let mut reefer = Container::refrigerated("R-1", 100.0, 20.0, -5.0, "berries").unwrap();
    let (_, logs) = capture_logs(|| reefer.load(100.0).unwrap());
    assert_eq!(hazard_notices(&logs), 0);
}

#[test]
fn notice_fires_before_overfill_is_refused() {
    let mut gas = Container::gas("G-7", 100.0, 20.0, 1.0).unwrap();

    let (result, logs) = capture_logs(|| gas.load(150.0));

    assert!(matches!(result, Err(StowageError::Overfill { .. })));
    assert_eq!(hazard_notices(&logs), 1);
    assert_eq!(gas.current_weight(), 20.0);
}

#[test]
fn notice_is_a_warning() {
    let mut gas = Container::gas("G-8", 10.0, 1.0, 1.0).unwrap();
    let (_, logs) = capture_logs(|| gas.load(9.0).unwrap());
    assert!(logs.contains("WARN"));
    assert!(logs.contains("stowr::hazard"));
}
