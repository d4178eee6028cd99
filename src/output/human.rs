//! Human-readable output formatting

use crate::container::ContainerInfo;
use crate::fleet::FleetInfo;
use crate::vessel::VesselInfo;

pub fn format_fleet(info: &FleetInfo) -> String {
    let mut output = String::from("Vessels\n-------\n");
    if info.vessels.is_empty() {
        output.push_str("(none)\n");
    } else {
        for vessel in &info.vessels {
            output.push_str(&format_vessel(vessel));
            output.push('\n');
        }
    }

    output.push_str("\nFree containers\n---------------\n");
    if info.free_containers.is_empty() {
        output.push_str("(none)\n");
    } else {
        for container in &info.free_containers {
            output.push_str(&format_container(container));
            output.push('\n');
        }
    }

    output
}

pub fn format_vessel(info: &VesselInfo) -> String {
    let mut line = format!(
        "{} (speed {} kn, containers {}/{}, cargo {}/{} kg)",
        info.name,
        info.cruise_speed_knots,
        info.containers.len(),
        info.max_containers,
        info.total_mass_kg,
        info.max_total_mass_kg
    );
    if !info.containers.is_empty() {
        let aboard: Vec<String> = info.containers.iter().map(format_container).collect();
        line.push_str(&format!("\n  aboard: {}", aboard.join(", ")));
    }
    line
}

pub fn format_container(info: &ContainerInfo) -> String {
    format!(
        "{} [{}] ({}/{} kg)",
        info.serial,
        info.kind.code(),
        info.current_load_kg,
        info.max_capacity_kg
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::Fleet;

    #[test]
    fn test_empty_fleet_shows_placeholders() {
        let fleet = Fleet::new();
        let text = format_fleet(&fleet.describe());
        assert!(text.contains("Vessels"));
        assert!(text.contains("Free containers"));
        assert_eq!(text.matches("(none)").count(), 2);
    }

    #[test]
    fn test_container_line_shows_load_and_capacity() {
        let mut fleet = Fleet::new();
        let serial = fleet.new_container(1000.0).unwrap();
        fleet.load_container(serial, 600.0).unwrap();

        let info = fleet.describe_container(serial).unwrap();
        let line = format_container(&info);
        assert!(line.contains("CNT-1"));
        assert!(line.contains("600/1000 kg"));
    }

    #[test]
    fn test_vessel_line_lists_containers_aboard() {
        let mut fleet = Fleet::new();
        fleet.add_vessel("Albatross", 18.0, 4, 10.0).unwrap();
        let serial = fleet.new_container(1000.0).unwrap();
        fleet.place_container(serial, "Albatross").unwrap();

        let info = fleet.vessel("Albatross").unwrap().describe();
        let text = format_vessel(&info);
        assert!(text.contains("Albatross"));
        assert!(text.contains("containers 1/4"));
        assert!(text.contains("aboard: CNT-1"));
    }
}
