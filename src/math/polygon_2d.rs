use super::{Point2, EARTH_RADIUS_M};

/// Computes the signed area of a polygon in a local plane (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Projects `(latitude, longitude)` degree pairs into an equirectangular
/// local plane in meters: `x = R·lng·cos(mean_lat)`, `y = R·lat` (angles in
/// radians).
///
/// Scaling longitude by the cosine of the mean latitude partially corrects
/// meridian convergence. The projection holds for small extents
/// (sub-kilometer plots); distortion grows with size.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn project_equirectangular(positions: &[(f64, f64)]) -> Vec<Point2> {
    if positions.is_empty() {
        return Vec::new();
    }

    let mean_lat = positions
        .iter()
        .map(|&(lat, _)| lat.to_radians())
        .sum::<f64>()
        / positions.len() as f64;
    let lng_scale = mean_lat.cos();

    positions
        .iter()
        .map(|&(lat, lng)| {
            Point2::new(
                EARTH_RADIUS_M * lng.to_radians() * lng_scale,
                EARTH_RADIUS_M * lat.to_radians(),
            )
        })
        .collect()
}
