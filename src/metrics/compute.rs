use super::{area_acres, centroid, perimeter_and_edges, require_polygon, PlotMetrics};
use crate::boundary::{Boundary, Vertex};
use crate::error::Result;

/// Computes the full metrics record for a plot's vertex set.
///
/// The single entry point for callers: orders the vertices, validates the
/// closed-polygon minimum, then derives centroid, perimeter with per-edge
/// records, and area. Returns either a fully populated record or a single
/// failure, never partial results.
///
/// # Errors
///
/// Returns `PlotGeoError::InsufficientVertices` when fewer than three
/// vertices are supplied.
pub fn compute_metrics(vertices: &[Vertex]) -> Result<PlotMetrics> {
    let boundary = Boundary::from_vertices(vertices);
    require_polygon(&boundary)?;

    let centroid = centroid(&boundary)?;
    let (perimeter_meters, edges) = perimeter_and_edges(&boundary)?;
    let area_acres = area_acres(&boundary)?;

    Ok(PlotMetrics {
        centroid,
        perimeter_meters,
        area_acres,
        edges,
    })
}
