use crate::float_types::Real;
use crate::mesh::CamMesh;
use nalgebra::Point3;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct QuantizedPoint(i64, i64, i64);

// positions are snapped to a 1e-7 grid before edges are compared
const QUANTIZATION_FACTOR: Real = 1e7;

fn quantize_point(p: &Point3<Real>) -> QuantizedPoint {
    QuantizedPoint(
        (p.x * QUANTIZATION_FACTOR).round() as i64,
        (p.y * QUANTIZATION_FACTOR).round() as i64,
        (p.z * QUANTIZATION_FACTOR).round() as i64,
    )
}

impl CamMesh {
    /// Count how often every directed edge is walked by the triangles.
    fn directed_edge_counts(&self) -> HashMap<(QuantizedPoint, QuantizedPoint), u32> {
        let mut edge_counts = HashMap::with_capacity(self.triangles.len() * 3);
        for tri in &self.triangles {
            let [p0, p1, p2] = tri.positions.map(|p| quantize_point(&p));
            for edge in [(p0, p1), (p1, p2), (p2, p0)] {
                *edge_counts.entry(edge).or_insert(0) += 1;
            }
        }
        edge_counts
    }

    /// Checks if the mesh is closed
    ///
    /// ### Returns
    /// Returns `true` if every undirected edge appears exactly 2 times
    pub fn is_closed(&self) -> bool {
        if self.triangles.is_empty() {
            return false;
        }

        let mut undirected: HashMap<(QuantizedPoint, QuantizedPoint), u32> = HashMap::new();
        for ((a, b), count) in self.directed_edge_counts() {
            let key = if a < b { (a, b) } else { (b, a) };
            *undirected.entry(key).or_insert(0) += count;
        }

        // For a closed surface (with no boundary), each edge should appear exactly 2 times.
        undirected.values().all(|&count| count == 2)
    }

    /// Checks that neighbouring triangles agree on orientation: every directed
    /// edge is walked once, and its reverse once.
    pub fn is_consistently_oriented(&self) -> bool {
        let directed = self.directed_edge_counts();
        directed
            .iter()
            .all(|(&(a, b), &count)| count == 1 && directed.get(&(b, a)) == Some(&1))
    }
}
