//! JSON output formatting

use serde_json::json;

use crate::fleet::FleetInfo;

pub fn format_fleet(info: &FleetInfo) -> String {
    let value = serde_json::to_value(info).unwrap_or(json!(null));
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::Fleet;

    #[test]
    fn test_fleet_snapshot_has_expected_fields() {
        let mut fleet = Fleet::new();
        fleet.add_vessel("Albatross", 18.0, 4, 10.0).unwrap();
        let serial = fleet.new_container(1000.0).unwrap();
        fleet.load_container(serial, 250.0).unwrap();

        let text = format_fleet(&fleet.describe());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["vessels"][0]["name"], "Albatross");
        assert_eq!(value["vessels"][0]["max_total_mass_kg"], 10000.0);
        assert_eq!(value["free_containers"][0]["serial"], 1);
        assert_eq!(value["free_containers"][0]["current_load_kg"], 250.0);
        assert_eq!(value["free_containers"][0]["kind"], "basic");
    }
}
