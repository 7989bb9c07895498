//! Named location tables
//!
//! Location tables map a unique name to a [`Coordinate`]. They are read from
//! TOML documents with a single `[locations]` table:
//!
//! ```toml
//! [locations]
//! berlin = { latitude = 52.52, longitude = 13.405 }
//! paris = "2.3522,48.8566"
//! ```
//!
//! String entries go through [`Coordinate::parse`], so they use the same
//! longitude-first order.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use log::{debug, warn};

use super::latlng::Coordinate;
use crate::errors::{GeoError, GeoResult};

/// Named coordinates, iterated in key order
pub type LocationMap = BTreeMap<String, Coordinate>;

lazy_static! {
    // Parse the embedded table on first use
    static ref BUILTIN_LOCATIONS: LocationMap = {
        let content = include_str!("../../locations.toml");
        load_locations_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse built-in locations: {}", e);
            LocationMap::new()
        })
    };
}

/// The location table embedded in the crate
pub fn builtin_locations() -> &'static LocationMap {
    &BUILTIN_LOCATIONS
}

/// Parse a location table from a TOML string
pub fn load_locations_str(content: &str) -> GeoResult<LocationMap> {
    let document: toml::Table = match content.parse() {
        Ok(value) => value,
        Err(e) => return Err(GeoError::ConfigError(format!("Failed to parse TOML: {}", e))),
    };

    let table = document.get("locations")
        .and_then(|v| v.as_table())
        .ok_or_else(|| GeoError::ConfigError("Missing [locations] table".to_string()))?;

    let mut locations = LocationMap::new();
    for (name, value) in table {
        let coordinate = parse_entry(name, value)?;
        locations.insert(name.clone(), coordinate);
    }

    debug!("Loaded {} locations", locations.len());
    Ok(locations)
}

/// Load a location table from a TOML file
pub fn load_locations_file<P: AsRef<Path>>(path: P) -> GeoResult<LocationMap> {
    let path = path.as_ref();
    debug!("Reading location table from {}", path.display());
    let contents = fs::read_to_string(path)?;
    load_locations_str(&contents)
}

fn parse_entry(name: &str, value: &toml::Value) -> GeoResult<Coordinate> {
    if let Some(text) = value.as_str() {
        return Coordinate::parse(text)
            .map_err(|e| GeoError::ConfigError(format!("Location '{}': {}", name, e)));
    }

    if let Some(entry) = value.as_table() {
        let latitude = entry.get("latitude").and_then(as_number);
        let longitude = entry.get("longitude").and_then(as_number);
        return match (latitude, longitude) {
            (Some(lat), Some(lon)) => Ok(Coordinate::new(lat, lon)),
            _ => Err(GeoError::ConfigError(format!(
                "Location '{}' needs numeric latitude and longitude", name))),
        };
    }

    Err(GeoError::ConfigError(format!(
        "Location '{}' must be a coordinate string or a table", name)))
}

/// Read a TOML float or integer as f64
pub(crate) fn as_number(value: &toml::Value) -> Option<f64> {
    value.as_float().or_else(|| value.as_integer().map(|i| i as f64))
}
