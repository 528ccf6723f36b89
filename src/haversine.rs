//! Great-circle distance between geographic points.
//!
//! Straight-line (as-the-crow-flies) distance on a spherical Earth.
//! Road-following distance comes from the routing service instead.

/// Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters between two (longitude, latitude) points
/// given in degrees.
///
/// Uses the haversine formula in the `atan2` form, which stays stable for
/// coincident and near-antipodal pairs. Bit-identical inputs return exactly
/// zero. No range validation is performed on the coordinates.
pub fn distance_meters(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lon1, lat1) = from;
    let (lon2, lat2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);

    // Round-off can land slightly outside [0, 1] for antipodal pairs, which
    // would make the square roots produce NaN.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}
