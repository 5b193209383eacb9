use serde::Serialize;

use crate::boundary::Boundary;
use crate::error::Result;
use crate::metrics::PlotMetrics;

/// GeoJSON `Feature` wrapping one plot boundary and its derived metrics.
#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: &'static str,
    pub geometry: PolygonGeometry,
    pub properties: FeatureProperties,
}

/// GeoJSON `Polygon` geometry: a single closed ring of
/// `[longitude, latitude]` positions.
#[derive(Debug, Clone, Serialize)]
pub struct PolygonGeometry {
    #[serde(rename = "type")]
    pub geometry_type: &'static str,
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

/// Properties carried on the feature, matching the fields dashboard
/// indicators read.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureProperties {
    pub plot_id: String,
    pub plot_name: String,
    pub area_acres: f64,
    pub perimeter_meters: f64,
}

/// Builds the GeoJSON feature for a boundary and its computed metrics.
///
/// Ring positions follow the canonical vertex order as
/// `[longitude, latitude]` and the ring is explicitly closed by repeating
/// the first position at the end.
#[must_use]
pub fn feature(
    plot_id: &str,
    plot_name: &str,
    boundary: &Boundary,
    metrics: &PlotMetrics,
) -> Feature {
    let mut ring: Vec<[f64; 2]> = boundary
        .vertices()
        .iter()
        .map(|v| [v.longitude, v.latitude])
        .collect();
    if let Some(&first) = ring.first() {
        ring.push(first);
    }

    Feature {
        feature_type: "Feature",
        geometry: PolygonGeometry {
            geometry_type: "Polygon",
            coordinates: vec![ring],
        },
        properties: FeatureProperties {
            plot_id: plot_id.to_owned(),
            plot_name: plot_name.to_owned(),
            area_acres: metrics.area_acres,
            perimeter_meters: metrics.perimeter_meters,
        },
    }
}

/// Serializes the feature as pretty-printed JSON (2-space indent).
///
/// # Errors
///
/// Returns `PlotGeoError::Serialize` if JSON encoding fails.
pub fn feature_json(
    plot_id: &str,
    plot_name: &str,
    boundary: &Boundary,
    metrics: &PlotMetrics,
) -> Result<String> {
    Ok(serde_json::to_string_pretty(&feature(
        plot_id, plot_name, boundary, metrics,
    ))?)
}
