//! Latitude/longitude value type

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use log::debug;

use super::errors::ParseError;
use super::locations::LocationMap;
use super::spherical;

const MIN_LATITUDE: f64 = -90.0;
const MAX_LATITUDE: f64 = 90.0;
const MIN_LONGITUDE: f64 = -180.0;
const MAX_LONGITUDE: f64 = 180.0;

/// A geographic coordinate in degrees
///
/// Latitude is always within `[-90, 90]` and longitude within `[-180, 180]`.
/// Out-of-range input is clamped on construction, never rejected. NaN input
/// is kept as NaN.
#[derive(Debug, Clone, Copy)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate, clamping both fields to their valid range
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees
    /// * `longitude` - Longitude in degrees
    pub fn new(latitude: f64, longitude: f64) -> Self {
        // f64::clamp passes NaN through, unlike a bare min/max chain
        Coordinate {
            latitude: latitude.clamp(MIN_LATITUDE, MAX_LATITUDE),
            longitude: longitude.clamp(MIN_LONGITUDE, MAX_LONGITUDE),
        }
    }

    /// Latitude in degrees
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Parse a coordinate from a comma-separated pair
    ///
    /// The first value is read as the **longitude** and the second as the
    /// **latitude**, which is the reverse of the order produced by
    /// `to_string()`. Parsing a formatted coordinate therefore swaps its
    /// fields unless they are equal. Existing callers depend on this order,
    /// so it is kept as is.
    ///
    /// A pair of exact zeros is rejected so that blank or defaulted input
    /// is not mistaken for the null coordinate.
    ///
    /// # Arguments
    /// * `text` - Text in the form `"lon,lat"`, whitespace around values allowed
    ///
    /// # Returns
    /// The clamped coordinate, or a `ParseError` naming the input
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let parts: Vec<&str> = text.split(',').collect();
        if parts.len() != 2 {
            return Err(ParseError::new(text));
        }

        let longitude = parse_degrees(parts[0]).ok_or_else(|| ParseError::new(text))?;
        let latitude = parse_degrees(parts[1]).ok_or_else(|| ParseError::new(text))?;

        if longitude == 0.0 && latitude == 0.0 {
            return Err(ParseError::new(text));
        }

        let coordinate = Coordinate::new(latitude, longitude);
        debug!("Parsed '{}' as coordinate {}", text, coordinate);
        Ok(coordinate)
    }

    /// Great-circle distance to another coordinate in meters
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        spherical::distance_between(*self, *other)
    }

    /// Returns the key of the nearest location in a named location table
    ///
    /// # Arguments
    /// * `locations` - Table of `key => Coordinate`, `None` if there is none
    /// * `limit` - Furthest allowed match in meters, `None` for no limit
    ///
    /// # Returns
    /// The key of the nearest qualifying location, or `None`
    pub fn find_nearest(&self, locations: Option<&LocationMap>, limit: Option<f64>) -> Option<String> {
        let locations = locations?;
        let nearest = self.find_nearest_in(locations, limit).cloned();

        match &nearest {
            Some(key) => debug!("Nearest location to {} is '{}' ({} candidates, limit {:?})",
                                self, key, locations.len(), limit),
            None => debug!("No location near {} among {} candidates (limit {:?})",
                           self, locations.len(), limit),
        }

        nearest
    }

    /// Returns the key of the nearest location among arbitrary candidates
    ///
    /// Works with any map-like iterator of `(&key, &Coordinate)` pairs, such
    /// as `&HashMap<K, Coordinate>`. Ties keep the first candidate seen.
    ///
    /// A candidate only takes the lead when it is strictly closer than the
    /// current lead *and* within `limit`. A closer candidate that fails the
    /// limit leaves the running minimum untouched, so later candidates are
    /// still measured against the previous lead.
    pub fn find_nearest_in<'a, K, I>(&self, candidates: I, limit: Option<f64>) -> Option<&'a K>
    where
        K: ?Sized + 'a,
        I: IntoIterator<Item = (&'a K, &'a Coordinate)>,
    {
        let mut nearest_distance = f64::INFINITY;
        let mut nearest_key = None;

        for (key, location) in candidates {
            let distance = self.distance_to(location);
            if distance < nearest_distance {
                if limit.map_or(true, |max| distance <= max) {
                    nearest_distance = distance;
                    nearest_key = Some(key);
                }
            }
        }

        nearest_key
    }
}

/// Parse one coordinate field, ignoring surrounding whitespace
///
/// Only the exact spellings `NaN` and `Infinity` (optionally signed) are
/// accepted as words; `inf`, `nan` and other case variants are rejected.
fn parse_degrees(field: &str) -> Option<f64> {
    let field = field.trim();
    let unsigned = field.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(field);
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) && unsigned != "NaN" && unsigned != "Infinity" {
        return None;
    }
    field.parse::<f64>().ok()
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.latitude == other.latitude && self.longitude == other.longitude
    }
}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_bits(self.latitude).hash(state);
        hash_bits(self.longitude).hash(state);
    }
}

/// Bit pattern used for hashing, with -0.0 folded onto 0.0 to match `==`
fn hash_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl FromStr for Coordinate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coordinate::parse(s)
    }
}
