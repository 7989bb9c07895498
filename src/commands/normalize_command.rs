//! Coordinate normalization command
//!
//! Parses a coordinate and prints it in canonical `latitude,longitude` form.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::coordinate::Coordinate;
use crate::errors::GeoResult;
use crate::utils::arg_utils::coordinate_arg;

/// Command for printing a coordinate in canonical form
pub struct NormalizeCommand {
    /// Parsed input coordinate
    coordinate: Coordinate,
}

impl NormalizeCommand {
    /// Create a new normalize command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new NormalizeCommand instance or an error
    pub fn new(args: &ArgMatches) -> GeoResult<Self> {
        let coordinate = coordinate_arg(args, "coordinate")?;
        Ok(NormalizeCommand { coordinate })
    }
}

impl Command for NormalizeCommand {
    fn execute(&self) -> GeoResult<String> {
        info!("Normalized coordinate: {}", self.coordinate);
        Ok(self.coordinate.to_string())
    }
}
