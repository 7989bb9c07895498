//! Command-line configuration
//!
//! Settings are read from a TOML document with an optional `[settings]`
//! table. Every field is optional and command-line flags take precedence.

use std::fs;
use std::path::Path;

use crate::coordinate::locations::as_number;
use crate::errors::{GeoError, GeoResult};

/// Settings for the `latlngkit` binary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Default nearest-location limit in meters
    pub default_limit: Option<f64>,
    /// Location table used by `--nearest` when none is given
    pub locations_file: Option<String>,
    /// Log file; console logging is used when unset
    pub log_file: Option<String>,
}

impl Config {
    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> GeoResult<Self> {
        let document: toml::Table = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(GeoError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let mut config = Config::default();
        let settings = match document.get("settings") {
            Some(value) => value.as_table()
                .ok_or_else(|| GeoError::ConfigError("[settings] must be a table".to_string()))?,
            None => return Ok(config),
        };

        if let Some(value) = settings.get("default_limit") {
            let limit = as_number(value)
                .ok_or_else(|| GeoError::ConfigError("default_limit must be a number".to_string()))?;
            if limit.is_nan() || limit < 0.0 {
                return Err(GeoError::ConfigError(format!(
                    "default_limit must be a non-negative distance, got {}", limit)));
            }
            config.default_limit = Some(limit);
        }

        config.locations_file = Self::parse_path(settings, "locations_file")?;
        config.log_file = Self::parse_path(settings, "log_file")?;

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> GeoResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    fn parse_path(settings: &toml::value::Table, key: &str) -> GeoResult<Option<String>> {
        match settings.get(key) {
            Some(value) => value.as_str()
                .map(|s| Some(s.to_string()))
                .ok_or_else(|| GeoError::ConfigError(format!("{} must be a string", key))),
            None => Ok(None),
        }
    }
}
