//! Nearest-location command
//!
//! This module implements the command that looks up the closest named
//! location to the input coordinate, optionally bounded by a distance limit.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::config::Config;
use crate::coordinate::{builtin_locations, load_locations_file, Coordinate, LocationMap};
use crate::errors::GeoResult;
use crate::utils::arg_utils::{coordinate_arg, limit_arg};

/// Printed when no location qualifies
pub const NO_MATCH: &str = "no location within limit";

/// Command for finding the nearest named location
pub struct NearestCommand {
    /// Query coordinate
    coordinate: Coordinate,
    /// Candidate locations
    locations: LocationMap,
    /// Furthest allowed match in meters
    limit: Option<f64>,
}

impl NearestCommand {
    /// Create a new nearest command
    ///
    /// The location table comes from `--locations`, then the configured
    /// `locations_file`, then the built-in table. The limit comes from
    /// `--limit`, then the configured `default_limit`.
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `config` - Settings loaded from the configuration file
    ///
    /// # Returns
    /// A new NearestCommand instance or an error
    pub fn new(args: &ArgMatches, config: &Config) -> GeoResult<Self> {
        let coordinate = coordinate_arg(args, "coordinate")?;

        let locations_file = args.get_one::<String>("locations")
            .or(config.locations_file.as_ref());
        let locations = match locations_file {
            Some(path) => load_locations_file(path)?,
            None => {
                debug!("No location table given, using built-in locations");
                builtin_locations().clone()
            }
        };

        let limit = match limit_arg(args)? {
            Some(limit) => Some(limit),
            None => config.default_limit,
        };

        Ok(NearestCommand {
            coordinate,
            locations,
            limit,
        })
    }
}

impl Command for NearestCommand {
    fn execute(&self) -> GeoResult<String> {
        info!("Searching {} locations near {}", self.locations.len(), self.coordinate);

        match self.coordinate.find_nearest(Some(&self.locations), self.limit) {
            Some(key) => {
                if let Some(location) = self.locations.get(&key) {
                    info!("Nearest location: {} at {:.1} m", key, self.coordinate.distance_to(location));
                }
                Ok(key)
            }
            None => {
                info!("No location within limit {:?}", self.limit);
                Ok(NO_MATCH.to_string())
            }
        }
    }
}
