//! End-to-end scenarios exercised through the public fleet API.

use stevedore::{Fleet, FleetError, Location};

#[test]
fn overfilled_load_is_rejected_and_load_unchanged() {
    let mut fleet = Fleet::new();
    let serial = fleet.new_container(1000.0).unwrap();

    fleet.load_container(serial, 600.0).unwrap();
    let err = fleet.load_container(serial, 500.0).unwrap_err();
    assert!(matches!(err, FleetError::Overfill { .. }));
    assert_eq!(
        fleet.describe_container(serial).unwrap().current_load_kg,
        600.0
    );
}

#[test]
fn vessel_at_container_cap_rejects_the_next_container() {
    let mut fleet = Fleet::new();
    fleet.add_vessel("Single", 15.0, 1, 5.0).unwrap();
    let a = fleet.new_container(1000.0).unwrap();
    let b = fleet.new_container(1000.0).unwrap();

    fleet.place_container(a, "Single").unwrap();
    let err = fleet.place_container(b, "Single").unwrap_err();
    assert!(matches!(err, FleetError::CapacityExceeded { .. }));
}

#[test]
fn vessel_weight_limit_uses_live_container_loads() {
    let mut fleet = Fleet::new();
    fleet.add_vessel("Light", 15.0, 5, 1.0).unwrap(); // 1 ton = 1000 kg
    let a = fleet.new_container(1000.0).unwrap();
    let b = fleet.new_container(1000.0).unwrap();
    fleet.load_container(a, 800.0).unwrap();
    fleet.load_container(b, 300.0).unwrap();

    fleet.place_container(a, "Light").unwrap();
    let err = fleet.place_container(b, "Light").unwrap_err();
    assert!(matches!(err, FleetError::WeightExceeded { .. }));

    let vessel = fleet.vessel("Light").unwrap();
    assert_eq!(vessel.container_count(), 1);
    assert!(vessel.carries(a));
}

#[test]
fn failed_transfer_leaves_both_vessels_untouched() {
    let mut fleet = Fleet::new();
    fleet.add_vessel("S", 15.0, 5, 10.0).unwrap();
    fleet.add_vessel("D", 15.0, 1, 10.0).unwrap();
    let x = fleet.new_container(1000.0).unwrap();
    let blocker = fleet.new_container(1000.0).unwrap();
    fleet.place_container(x, "S").unwrap();
    fleet.place_container(blocker, "D").unwrap();

    let err = fleet.transfer_container(x, "S", "D").unwrap_err();
    assert!(matches!(err, FleetError::CapacityExceeded { .. }));
    assert!(fleet.vessel("S").unwrap().carries(x));
    assert!(!fleet.vessel("D").unwrap().carries(x));
    assert_eq!(fleet.vessel("D").unwrap().container_count(), 1);
}

#[test]
fn removing_an_unknown_serial_changes_nothing() {
    let mut fleet = Fleet::new();
    fleet.add_vessel("V", 15.0, 5, 10.0).unwrap();
    let aboard = fleet.new_container(1000.0).unwrap();
    let free = fleet.new_container(1000.0).unwrap();
    fleet.place_container(aboard, "V").unwrap();

    // `free` exists but is not aboard V
    let err = fleet.remove_from_vessel("V", free).unwrap_err();
    assert!(matches!(err, FleetError::ContainerNotFound { .. }));
    assert_eq!(fleet.vessel("V").unwrap().container_count(), 1);
    assert_eq!(fleet.locate(free), Some(Location::Free));
}

#[test]
fn unload_twice_equals_unload_once() {
    let mut fleet = Fleet::new();
    let serial = fleet.new_container(500.0).unwrap();
    fleet.load_container(serial, 500.0).unwrap();

    fleet.unload_container(serial).unwrap();
    fleet.unload_container(serial).unwrap();
    assert_eq!(
        fleet.describe_container(serial).unwrap().current_load_kg,
        0.0
    );
}

#[test]
fn capacity_invariants_hold_through_a_mixed_sequence() {
    let mut fleet = Fleet::new();
    fleet.add_vessel("A", 20.0, 3, 2.0).unwrap();
    fleet.add_vessel("B", 20.0, 2, 1.0).unwrap();

    let mut serials = Vec::new();
    for _ in 0..4 {
        serials.push(fleet.new_container(900.0).unwrap());
    }
    for &s in &serials {
        let _ = fleet.load_container(s, 600.0);
    }
    let _ = fleet.place_container(serials[0], "A");
    let _ = fleet.place_container(serials[1], "A");
    let _ = fleet.place_container(serials[2], "A");
    let _ = fleet.place_container(serials[3], "B");
    let _ = fleet.transfer_container(serials[0], "A", "B");
    let _ = fleet.transfer_container(serials[1], "A", "B");
    let _ = fleet.remove_from_vessel("B", serials[3]);

    for vessel in fleet.vessels() {
        assert!(vessel.container_count() <= vessel.max_containers());
        assert!(vessel.total_mass_kg() <= vessel.max_total_mass_kg());
    }
    // every container is still somewhere, exactly once
    for &s in &serials {
        assert!(fleet.locate(s).is_some());
    }
}

#[test]
fn serial_ids_are_unique_for_the_whole_run() {
    let mut fleet = Fleet::new();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..10 {
        let s = fleet.new_container(100.0).unwrap();
        assert!(seen.insert(s));
    }
    // deletion never recycles an id
    let deleted = *seen.iter().next().unwrap();
    fleet.remove_container(deleted).unwrap();
    let fresh = fleet.new_container(100.0).unwrap();
    assert!(seen.insert(fresh));
}
