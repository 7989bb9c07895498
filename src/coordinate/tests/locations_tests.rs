//! Tests for location table loading

use crate::coordinate::{builtin_locations, load_locations_file, load_locations_str, Coordinate};
use crate::errors::GeoError;

#[test]
fn test_table_and_string_entries() {
    let map = load_locations_str(r#"
        [locations]
        berlin = { latitude = 52.52, longitude = 13.405 }
        paris = "2.3522, 48.8566"
        origin_ish = { latitude = 1, longitude = -1 }
    "#).unwrap();

    assert_eq!(map.len(), 3);
    assert_eq!(map["berlin"], Coordinate::new(52.52, 13.405));
    assert_eq!(map["paris"], Coordinate::new(48.8566, 2.3522));
    assert_eq!(map["origin_ish"], Coordinate::new(1.0, -1.0));
}

#[test]
fn test_table_entries_are_clamped() {
    let map = load_locations_str("[locations]\npole = { latitude = 95.0, longitude = 0.0 }\n").unwrap();
    assert_eq!(map["pole"].latitude(), 90.0);
}

#[test]
fn test_missing_locations_table() {
    let result = load_locations_str("[settings]\n");
    assert!(matches!(result, Err(GeoError::ConfigError(_))));
}

#[test]
fn test_bad_entries_name_the_key() {
    for content in [
        "[locations]\nnowhere = \"0,0\"\n",
        "[locations]\nnowhere = { latitude = 1.0 }\n",
        "[locations]\nnowhere = 42\n",
    ] {
        match load_locations_str(content) {
            Err(GeoError::ConfigError(msg)) => assert!(msg.contains("nowhere"), "{}", msg),
            other => panic!("expected config error, got {:?}", other),
        }
    }
}

#[test]
fn test_invalid_toml() {
    assert!(matches!(load_locations_str("[locations"), Err(GeoError::ConfigError(_))));
}

#[test]
fn test_missing_file() {
    let result = load_locations_file("/nonexistent/latlngkit/locations.toml");
    assert!(matches!(result, Err(GeoError::IoError(_))));
}

#[test]
fn test_builtin_locations() {
    let builtin = builtin_locations();
    assert!(builtin.len() >= 10);

    let near_louvre = Coordinate::new(48.8606, 2.3376);
    assert_eq!(near_louvre.find_nearest(Some(builtin), None), Some("paris".to_string()));
}
