use super::require_polygon;
use crate::boundary::Boundary;
use crate::error::Result;
use crate::math::polygon_2d::{project_equirectangular, signed_area};
use crate::math::SQ_METERS_PER_ACRE;

/// Computes the enclosed area in acres.
///
/// Vertices are projected into an equirectangular local plane, the shoelace
/// formula gives the signed planar area, and the absolute value is converted
/// at 1 acre = 4046.8564224 m². Taking the absolute value makes the result
/// independent of winding direction.
///
/// The projection is a documented approximation for small (sub-kilometer)
/// plots, not a geodesic polygon area.
///
/// # Errors
///
/// Returns `PlotGeoError::InsufficientVertices` when the boundary has fewer
/// than three vertices.
pub fn area_acres(boundary: &Boundary) -> Result<f64> {
    require_polygon(boundary)?;

    let plane = project_equirectangular(&boundary.positions());
    Ok(signed_area(&plane).abs() / SQ_METERS_PER_ACRE)
}
