//! Coordinate handling for geographic locations
//!
//! This module provides the latitude/longitude value type, great-circle
//! distance on a spherical Earth, and named location tables used by the
//! nearest-location lookup.

mod errors;
mod latlng;
pub mod locations;
pub mod spherical;

#[cfg(test)]
mod tests;

// Re-export key types
pub use self::errors::ParseError;
pub use self::latlng::Coordinate;
pub use self::locations::{builtin_locations, load_locations_file, load_locations_str, LocationMap};
pub use self::spherical::{compute_angle_between, distance_between, EARTH_RADIUS};
