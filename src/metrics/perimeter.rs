use super::{require_polygon, BoundaryEdge};
use crate::boundary::{Boundary, GeoPoint};
use crate::error::Result;
use crate::math::haversine::{haversine_distance_m, segment_midpoint_deg};

/// Computes the boundary's perimeter and its per-edge records.
///
/// Walks consecutive vertex pairs including the wrap-around edge from the
/// last vertex back to the first; each edge carries its great-circle length
/// and degree-space midpoint. The perimeter is the sum of edge lengths.
///
/// # Errors
///
/// Returns `PlotGeoError::InsufficientVertices` when the boundary has fewer
/// than three vertices; two points bound no polygon, so a lone segment is
/// not accepted as a perimeter.
pub fn perimeter_and_edges(boundary: &Boundary) -> Result<(f64, Vec<BoundaryEdge>)> {
    require_polygon(boundary)?;

    let vertices = boundary.vertices();
    let n = vertices.len();
    let mut perimeter = 0.0;
    let mut edges = Vec::with_capacity(n);

    for i in 0..n {
        let j = (i + 1) % n;
        let (a, b) = (&vertices[i], &vertices[j]);
        let length_meters =
            haversine_distance_m(a.latitude, a.longitude, b.latitude, b.longitude);
        let (mid_lat, mid_lng) =
            segment_midpoint_deg(a.latitude, a.longitude, b.latitude, b.longitude);

        perimeter += length_meters;
        edges.push(BoundaryEdge {
            from_index: i,
            to_index: j,
            length_meters,
            midpoint: GeoPoint::new(mid_lat, mid_lng),
        });
    }

    Ok((perimeter, edges))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::boundary::Vertex;
    use crate::error::PlotGeoError;

    fn square_0_001_deg() -> Boundary {
        Boundary::from_vertices(&[
            Vertex::new(0, 0.0, 0.0),
            Vertex::new(1, 0.0, 0.001),
            Vertex::new(2, 0.001, 0.001),
            Vertex::new(3, 0.001, 0.0),
        ])
    }

    #[test]
    fn square_perimeter_is_four_sides() {
        let (perimeter, edges) = perimeter_and_edges(&square_0_001_deg()).unwrap();
        let side = haversine_distance_m(0.0, 0.0, 0.0, 0.001);
        assert!(
            (perimeter - 4.0 * side).abs() < 1e-6,
            "perimeter={perimeter} side={side}"
        );
        assert_eq!(edges.len(), 4);
    }

    #[test]
    fn edges_cover_the_ring_and_wrap_around() {
        let (_, edges) = perimeter_and_edges(&square_0_001_deg()).unwrap();
        let pairs: Vec<_> = edges.iter().map(|e| (e.from_index, e.to_index)).collect();
        assert_eq!(pairs, vec![(0, 1), (1, 2), (2, 3), (3, 0)]);
    }

    #[test]
    fn edge_midpoints_bisect_in_degree_space() {
        let (_, edges) = perimeter_and_edges(&square_0_001_deg()).unwrap();
        // First edge runs (0,0) → (0,0.001).
        assert!((edges[0].midpoint.latitude).abs() < 1e-12);
        assert!((edges[0].midpoint.longitude - 0.0005).abs() < 1e-12);
        // Wrap-around edge runs (0.001,0) → (0,0).
        assert!((edges[3].midpoint.latitude - 0.0005).abs() < 1e-12);
        assert!((edges[3].midpoint.longitude).abs() < 1e-12);
    }

    #[test]
    fn perimeter_is_winding_invariant() {
        let reversed = Boundary::from_vertices(&[
            Vertex::new(0, 0.001, 0.0),
            Vertex::new(1, 0.001, 0.001),
            Vertex::new(2, 0.0, 0.001),
            Vertex::new(3, 0.0, 0.0),
        ]);
        let (forward, _) = perimeter_and_edges(&square_0_001_deg()).unwrap();
        let (backward, _) = perimeter_and_edges(&reversed).unwrap();
        assert!(
            (forward - backward).abs() < 1e-9,
            "forward={forward} backward={backward}"
        );
    }

    #[test]
    fn two_vertices_are_rejected() {
        // A lone segment has a length but no perimeter.
        let boundary =
            Boundary::from_vertices(&[Vertex::new(0, 0.0, 0.0), Vertex::new(1, 0.0, 0.001)]);
        let err = perimeter_and_edges(&boundary).unwrap_err();
        assert!(matches!(
            err,
            PlotGeoError::InsufficientVertices {
                required: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn collinear_points_double_the_longest_span() {
        let boundary = Boundary::from_vertices(&[
            Vertex::new(0, 0.0, 0.0),
            Vertex::new(1, 0.001, 0.0),
            Vertex::new(2, 0.002, 0.0),
        ]);
        let (perimeter, _) = perimeter_and_edges(&boundary).unwrap();
        let longest = haversine_distance_m(0.0, 0.0, 0.002, 0.0);
        assert!(
            (perimeter - 2.0 * longest).abs() < 1e-9,
            "perimeter={perimeter} longest={longest}"
        );
    }
}
