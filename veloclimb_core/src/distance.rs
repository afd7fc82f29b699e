//! Great-circle distance on a spherical earth.

/// Mean spherical earth radius in metres.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Returns the great-circle surface distance in metres between two WGS84
/// coordinates (degrees), using the haversine formula.
///
/// The haversine intermediate is clamped to [0, 1] before the inverse
/// trigonometric step: floating-point overshoot near antipodal or coincident
/// points would otherwise take sqrt outside its domain. NaN or out-of-range
/// input is a caller error and produces an undefined (but non-panicking)
/// result.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}
