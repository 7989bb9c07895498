pub mod coordinate;
pub mod errors;
pub mod config;
pub mod utils;
pub mod commands;

pub use coordinate::{Coordinate, LocationMap, ParseError};
pub use errors::{GeoError, GeoResult};
pub use config::Config;
