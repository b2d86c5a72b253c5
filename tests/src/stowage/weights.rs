#![cfg(test)]
use stowr_common::cargo::Container;
use stowr_common::error::StowageError;

#[test]
fn construction_starts_at_empty_weight() {
    let containers = [
        Container::liquid("L-1", 300.0, 75.0, 1.0).unwrap(),
        Container::gas("G-1", 300.0, 75.0, 1.0).unwrap(),
        Container::refrigerated("R-1", 300.0, 75.0, 1.0, "salad").unwrap(),
    ];
    for container in &containers {
        assert_eq!(container.current_weight(), 75.0);
    }
}

#[test]
fn load_sets_cargo_plus_empty_weight_for_every_kind() {
    let mut containers = [
        Container::liquid("L-1", 300.0, 75.0, 0.0).unwrap(),
        Container::gas("G-1", 300.0, 75.0, 0.0).unwrap(),
        Container::refrigerated("R-1", 300.0, 75.0, 1.0, "salad").unwrap(),
    ];
    for container in &mut containers {
        container.load(300.0).unwrap();
        assert_eq!(container.current_weight(), 375.0);

        let err = container.load(300.1).unwrap_err();
        assert!(matches!(err, StowageError::Overfill { .. }));
        assert_eq!(container.current_weight(), 375.0);
    }
}

#[test]
fn residue_comes_from_empty_weight_not_cargo() {
    for cargo in [0.0, 10.0, 299.0] {
        let mut liquid = Container::liquid("L-1", 300.0, 80.0, 2.0).unwrap();
        let mut gas = Container::gas("G-1", 300.0, 80.0, 2.0).unwrap();
        liquid.load(cargo).unwrap();
        gas.load(cargo).unwrap();

        liquid.empty();
        gas.empty();

        assert_eq!(liquid.current_weight(), 0.05 * 80.0);
        assert_eq!(gas.current_weight(), 0.05 * 80.0);
    }
}

#[test]
fn emptying_twice_keeps_the_same_residue() {
    let mut gas = Container::gas("G-1", 300.0, 80.0, 2.0).unwrap();
    gas.empty();
    gas.empty();
    assert_eq!(gas.current_weight(), 0.05 * 80.0);
}
