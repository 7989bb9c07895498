//! Command-line interface definition

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};

use crate::config::Config;

/// Build the clap command for the `latlngkit` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("latlngkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize coordinates, measure distances and find the nearest named location")
        .arg(
            Arg::new("coordinate")
                .help("Coordinate in 'longitude,latitude' format")
                .required(true)
                .allow_hyphen_values(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Measure the great-circle distance to this coordinate")
                .value_name("COORDINATE")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("nearest")
                .short('n')
                .long("nearest")
                .help("Find the nearest named location")
                .conflicts_with("to")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("locations")
                .long("locations")
                .help("TOML file with a [locations] table")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("limit")
                .long("limit")
                .help("Furthest allowed match in meters")
                .value_name("METERS")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log output to this file")
                .value_name("FILE")
                .required(false),
        )
}

/// Resolve the log file: `--log-file` first, then the configured `log_file`
///
/// The configuration has to be loaded before logging is set up, so the
/// binary traces the loaded settings only once the logger is installed.
pub fn log_file<'a>(args: &'a ArgMatches, config: &'a Config) -> Option<&'a str> {
    args.get_one::<String>("log-file")
        .or(config.log_file.as_ref())
        .map(String::as_str)
}
