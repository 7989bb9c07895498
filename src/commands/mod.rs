//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod cli;
pub mod command_traits;
pub mod distance_command;
pub mod nearest_command;
pub mod normalize_command;

pub use cli::{build_cli, log_file};
pub use command_traits::{Command, CommandFactory};
pub use distance_command::DistanceCommand;
pub use nearest_command::NearestCommand;
pub use normalize_command::NormalizeCommand;

use clap::ArgMatches;
use crate::config::Config;
use crate::errors::GeoResult;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct LatLngCommandFactory;

impl LatLngCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        LatLngCommandFactory
    }
}

impl Default for LatLngCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for LatLngCommandFactory {
    fn create_command(&self, args: &ArgMatches, config: &Config) -> GeoResult<Box<dyn Command>> {
        if args.get_flag("nearest") {
            Ok(Box::new(NearestCommand::new(args, config)?))
        } else if args.contains_id("to") {
            Ok(Box::new(DistanceCommand::new(args)?))
        } else {
            // Default to normalize command
            Ok(Box::new(NormalizeCommand::new(args)?))
        }
    }
}
