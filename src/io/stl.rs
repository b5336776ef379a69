use crate::io::IoError;
use crate::triangulated::Triangulated3D;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;
use tracing::info;

/// Export to ASCII STL
/// Convert this shape to an **ASCII STL** string with the given `name`.
///
/// ```rust
/// # use linkcams::{coordinate::Coordinate, mesh::CamMesh, io::stl::to_stl_ascii};
/// let square = [
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(1.0, 0.0),
///     Coordinate::new(1.0, 1.0),
///     Coordinate::new(0.0, 1.0),
/// ];
/// let mesh = CamMesh::extrude(&square, 1.0).unwrap();
/// let text = to_stl_ascii(&mesh, "block");
/// assert!(text.starts_with("solid block"));
/// ```
pub fn to_stl_ascii<T: Triangulated3D>(shape: &T, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    shape.visit_triangles(|tri| {
        let n = tri[0].normal;
        out.push_str(&format!(
            "  facet normal {:.6} {:.6} {:.6}\n",
            n.x, n.y, n.z
        ));
        out.push_str("    outer loop\n");
        for v in &tri {
            let p = v.pos;
            out.push_str(&format!(
                "      vertex {:.6} {:.6} {:.6}\n",
                p.x, p.y, p.z
            ));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    });

    out.push_str(&format!("endsolid {name}\n"));
    out
}

/// Export to BINARY STL (returns `Vec<u8>`)
///
/// Coordinates are narrowed to `f32`, as the format requires.
pub fn to_stl_binary<T: Triangulated3D>(shape: &T) -> std::io::Result<Vec<u8>> {
    let triangles = stl_triangles(shape);
    let mut cursor = Cursor::new(Vec::new());
    stl_io::write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

/// Write `shape` as a binary STL file at `path`, creating or truncating it.
///
/// The file is complete and closed when this returns `Ok`.
pub fn write_mesh<T: Triangulated3D>(shape: &T, path: impl AsRef<Path>) -> Result<(), IoError> {
    let path = path.as_ref();
    let triangles = stl_triangles(shape);
    let mut out = BufWriter::new(File::create(path)?);
    stl_io::write_stl(&mut out, triangles.iter())?;
    out.flush()?;
    info!(path = %path.display(), triangles = triangles.len(), "wrote STL");
    Ok(())
}

/// Read an ASCII or binary STL file back into an indexed mesh.
pub fn read_stl(path: impl AsRef<Path>) -> Result<stl_io::IndexedMesh, IoError> {
    let mut reader = BufReader::new(File::open(path)?);
    Ok(stl_io::read_stl(&mut reader)?)
}

fn stl_triangles<T: Triangulated3D>(shape: &T) -> Vec<stl_io::Triangle> {
    use stl_io::{Normal, Triangle, Vertex};

    let mut triangles = Vec::with_capacity(shape.triangle_count());
    shape.visit_triangles(|tri| {
        let n = tri[0].normal;
        triangles.push(Triangle {
            normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
            vertices: tri.map(|v| {
                let p = v.pos;
                Vertex::new([p.x as f32, p.y as f32, p.z as f32])
            }),
        });
    });
    triangles
}
