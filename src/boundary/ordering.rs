use super::Vertex;

/// Returns the boundary's vertices in canonical winding order.
///
/// Ascending stable sort on `order_index`; vertices without an index keep
/// their original relative order after all indexed ones (tie-break: stable
/// sort, nulls last). The input is left untouched, and re-ordering an
/// already-ordered sequence returns it unchanged.
#[must_use]
pub fn order_vertices(vertices: &[Vertex]) -> Vec<Vertex> {
    let mut ordered = vertices.to_vec();
    ordered.sort_by_key(|v| match v.order_index {
        Some(index) => (false, index),
        None => (true, 0),
    });
    ordered
}

/// A plot boundary with vertices held in canonical winding order.
///
/// Construction applies [`order_vertices`]; the ordering invariant holds for
/// the lifetime of the value.
#[derive(Debug, Clone)]
pub struct Boundary {
    vertices: Vec<Vertex>,
}

impl Boundary {
    /// Builds a boundary from vertices in any order.
    #[must_use]
    pub fn from_vertices(vertices: &[Vertex]) -> Self {
        Self {
            vertices: order_vertices(vertices),
        }
    }

    /// Returns the vertices in canonical order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns whether the boundary has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `(latitude, longitude)` pairs in canonical order.
    #[must_use]
    pub fn positions(&self) -> Vec<(f64, f64)> {
        self.vertices
            .iter()
            .map(|v| (v.latitude, v.longitude))
            .collect()
    }
}
