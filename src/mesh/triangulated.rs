use crate::mesh::CamMesh;
use crate::mesh::vertex::Vertex;
use crate::triangulated::Triangulated3D;

impl Triangulated3D for CamMesh {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        for tri in &self.triangles {
            let normal = tri.normal();
            f(tri.positions.map(|pos| Vertex::new(pos, normal)));
        }
    }

    fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}
