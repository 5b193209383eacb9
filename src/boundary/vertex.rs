use serde::{Deserialize, Serialize};

/// A single GPS vertex on a plot boundary.
///
/// `order_index`, when present, gives the vertex's position in the intended
/// winding sequence; storage guarantees no ordering of its own. Latitude and
/// longitude are degrees, already parsed to numbers by the caller and
/// expected in [-90, 90] / [-180, 180]. Out-of-range values are accepted
/// arithmetically but produce geometrically meaningless results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub order_index: Option<u32>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Vertex {
    /// Creates a vertex with an explicit position in the winding sequence.
    #[must_use]
    pub fn new(order_index: u32, latitude: f64, longitude: f64) -> Self {
        Self {
            order_index: Some(order_index),
            latitude,
            longitude,
        }
    }

    /// Creates a vertex with no recorded winding position.
    #[must_use]
    pub fn unordered(latitude: f64, longitude: f64) -> Self {
        Self {
            order_index: None,
            latitude,
            longitude,
        }
    }
}

/// A plain GPS position in degrees (centroid, edge midpoints).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a new position.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}
