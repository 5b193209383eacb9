use crate::boundary::{Boundary, GeoPoint};
use crate::error::{PlotGeoError, Result};

/// Computes the centroid as the arithmetic mean of all vertex positions.
///
/// A planar average in degree space, not a spherical centroid; adequate for
/// the small extents farm plots cover.
///
/// # Errors
///
/// Returns `PlotGeoError::InsufficientVertices` for an empty boundary.
#[allow(clippy::cast_precision_loss)]
pub fn centroid(boundary: &Boundary) -> Result<GeoPoint> {
    if boundary.is_empty() {
        return Err(PlotGeoError::InsufficientVertices {
            required: 1,
            actual: 0,
        });
    }

    let n = boundary.len() as f64;
    let (lat_sum, lng_sum) = boundary
        .vertices()
        .iter()
        .fold((0.0, 0.0), |(lat, lng), v| {
            (lat + v.latitude, lng + v.longitude)
        });

    Ok(GeoPoint::new(lat_sum / n, lng_sum / n))
}
