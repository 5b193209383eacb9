mod area;
mod centroid;
mod compute;
mod perimeter;

pub use area::area_acres;
pub use centroid::centroid;
pub use compute::compute_metrics;
pub use perimeter::perimeter_and_edges;

use serde::Serialize;

use crate::boundary::{Boundary, GeoPoint, MIN_POLYGON_VERTICES};
use crate::error::{PlotGeoError, Result};

/// One edge of the boundary polygon, between consecutive canonical vertices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundaryEdge {
    /// Index of the edge's start vertex in the canonical sequence.
    pub from_index: usize,
    /// Index of the edge's end vertex in the canonical sequence.
    pub to_index: usize,
    /// Great-circle length in meters.
    pub length_meters: f64,
    /// Arithmetic midpoint in degree space, where a map layer places the
    /// edge's distance label.
    pub midpoint: GeoPoint,
}

/// Derived metrics for one plot boundary.
///
/// A pure function of its vertex set: recomputed on demand and discarded,
/// never stored apart from the vertices it was derived from.
#[derive(Debug, Clone, Serialize)]
pub struct PlotMetrics {
    /// Arithmetic mean position of all boundary vertices.
    pub centroid: GeoPoint,
    /// Sum of great-circle edge lengths in meters.
    pub perimeter_meters: f64,
    /// Enclosed area in acres (projected shoelace, absolute value).
    pub area_acres: f64,
    /// Per-edge lengths in canonical order, wrap-around edge last.
    pub edges: Vec<BoundaryEdge>,
}

/// Rejects boundaries below the closed-polygon minimum.
fn require_polygon(boundary: &Boundary) -> Result<()> {
    let actual = boundary.len();
    if actual < MIN_POLYGON_VERTICES {
        return Err(PlotGeoError::InsufficientVertices {
            required: MIN_POLYGON_VERTICES,
            actual,
        });
    }
    Ok(())
}
