use super::EARTH_RADIUS_M;

/// Returns the great-circle surface distance in meters between two GPS
/// points, by the haversine formula on a sphere of mean Earth radius.
#[must_use]
pub fn haversine_distance_m(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let dlat = (lat2 - lat1).to_radians();
    let dlng = (lng2 - lng1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Returns the arithmetic midpoint of a segment in degree space, where map
/// layers place per-edge distance labels. Not a geodesic midpoint.
#[must_use]
pub fn segment_midpoint_deg(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> (f64, f64) {
    ((lat1 + lat2) / 2.0, (lng1 + lng2) / 2.0)
}
