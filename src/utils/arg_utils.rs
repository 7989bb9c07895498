//! Helpers for reading typed values out of CLI arguments

use clap::ArgMatches;
use log::debug;

use crate::coordinate::Coordinate;
use crate::errors::{GeoError, GeoResult};

/// Read a required coordinate argument
///
/// # Arguments
/// * `args` - CLI argument matches from clap
/// * `name` - Argument id
///
/// # Returns
/// The parsed coordinate, or an error if the argument is missing or invalid
pub fn coordinate_arg(args: &ArgMatches, name: &str) -> GeoResult<Coordinate> {
    let text = args.get_one::<String>(name)
        .ok_or_else(|| GeoError::InvalidArgument(format!("Missing {} coordinate", name)))?;
    let coordinate = Coordinate::parse(text)?;
    debug!("Argument {}: {}", name, coordinate);
    Ok(coordinate)
}

/// Read an optional distance limit in meters
pub fn limit_arg(args: &ArgMatches) -> GeoResult<Option<f64>> {
    match args.get_one::<String>("limit") {
        Some(text) => parse_limit(text).map(Some),
        None => Ok(None),
    }
}

/// Parse a distance limit, rejecting negative and non-numeric values
pub fn parse_limit(text: &str) -> GeoResult<f64> {
    let limit = text.trim().parse::<f64>()
        .map_err(|_| GeoError::InvalidArgument(format!("Invalid limit: {}", text)))?;
    if limit.is_nan() || limit < 0.0 {
        return Err(GeoError::InvalidArgument(format!("Limit must be a non-negative distance: {}", text)));
    }
    Ok(limit)
}
