mod ordering;
mod vertex;

pub use ordering::{order_vertices, Boundary};
pub use vertex::{GeoPoint, Vertex};

/// A closed polygon needs at least this many vertices; below it no boundary
/// metrics are computable.
pub const MIN_POLYGON_VERTICES: usize = 3;
