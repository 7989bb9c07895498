//! Great-circle geometry on a spherical Earth
//!
//! Distances use the haversine formula on a sphere of Earth's mean radius,
//! which is accurate to within about 0.5% of the ellipsoidal distance.

use super::latlng::Coordinate;

/// Mean radius of the Earth in meters
pub const EARTH_RADIUS: f64 = 6_371_009.0;

/// Central angle between two coordinates in radians
///
/// # Arguments
/// * `from` - Start coordinate
/// * `to` - End coordinate
///
/// # Returns
/// The angle subtended at the Earth's center, in `[0, PI]`
pub fn compute_angle_between(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let delta_lat = lat2 - lat1;
    let delta_lon = (to.longitude() - from.longitude()).to_radians();

    let hav = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);

    // Rounding can push hav just past 1 for antipodal points; clamp keeps NaN
    2.0 * hav.sqrt().clamp(0.0, 1.0).asin()
}

/// Great-circle distance between two coordinates in meters
pub fn distance_between(from: Coordinate, to: Coordinate) -> f64 {
    compute_angle_between(from, to) * EARTH_RADIUS
}
