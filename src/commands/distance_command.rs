//! Great-circle distance command
//!
//! This module implements the command that measures the distance
//! between the input coordinate and a second coordinate.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::coordinate::Coordinate;
use crate::errors::GeoResult;
use crate::utils::arg_utils::coordinate_arg;

/// Command for measuring the distance between two coordinates
pub struct DistanceCommand {
    /// Start coordinate
    from: Coordinate,
    /// End coordinate
    to: Coordinate,
}

impl DistanceCommand {
    /// Create a new distance command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new DistanceCommand instance or an error
    pub fn new(args: &ArgMatches) -> GeoResult<Self> {
        let from = coordinate_arg(args, "coordinate")?;
        let to = coordinate_arg(args, "to")?;
        Ok(DistanceCommand { from, to })
    }
}

impl Command for DistanceCommand {
    fn execute(&self) -> GeoResult<String> {
        let distance = self.from.distance_to(&self.to);
        info!("Distance from {} to {}: {:.3} m", self.from, self.to, distance);
        Ok(format!("{:.3}", distance))
    }
}
