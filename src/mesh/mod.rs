//! `CamMesh`: the extruded, triangulated solid of one cam.
//!
//! Building the triangle list is pure; writing it out is left to
//! [`io::stl`](crate::io::stl).

use crate::coordinate::Coordinate;
use crate::errors::CamError;
use crate::float_types::{Real, tolerance};
use geo::{Area, LineString, Polygon as GeoPolygon};
use nalgebra::{Point2, Point3, Vector3};
use tracing::debug;

pub mod manifold;
pub mod triangulate;
pub mod triangulated;
pub mod vertex;

/// One facet of a [`CamMesh`], wound counter-clockwise seen from outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub positions: [Point3<Real>; 3],
}

impl Triangle {
    pub const fn new(a: Point3<Real>, b: Point3<Real>, c: Point3<Real>) -> Self {
        Triangle { positions: [a, b, c] }
    }

    /// Unit facet normal from the winding; zero for a degenerate triangle.
    pub fn normal(&self) -> Vector3<Real> {
        let [a, b, c] = self.positions;
        let n = (b - a).cross(&(c - a));
        n.try_normalize(Real::EPSILON).unwrap_or_else(Vector3::zeros)
    }
}

/// A closed triangle mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CamMesh {
    pub triangles: Vec<Triangle>,
}

impl CamMesh {
    pub const fn from_triangles(triangles: Vec<Triangle>) -> Self {
        CamMesh { triangles }
    }

    /// **Linear extrusion of a cam silhouette**
    ///
    /// Builds a prism of height `thickness` over the closed polygon `profile`:
    ///
    /// 1. **Bottom cap** at `z = 0`, normal `-z`
    /// 2. **Top cap** at `z = thickness`, normal `+z`
    /// 3. **Side wall**, two triangles per polygon edge, normals pointing away
    ///    from the polygon interior
    ///
    /// The profile may be given in either winding; it is reoriented
    /// counter-clockwise first. Consecutive duplicate points (including a
    /// repeated first point at the end) are dropped. For `n` remaining points
    /// the mesh has `2n` wall triangles and `n - 2` triangles per cap.
    ///
    /// # Errors
    /// - [`CamError::DegenerateProfile`] with fewer than 3 distinct points, or
    ///   when the ring encloses no area (collinear points, or a profile that
    ///   walks out and back along the same line)
    /// - [`CamError::InvalidParameter`] for a non-positive or non-finite
    ///   thickness, or a non-finite profile point
    pub fn extrude(profile: &[Coordinate], thickness: Real) -> Result<CamMesh, CamError> {
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(CamError::InvalidParameter(format!(
                "cam thickness must be positive, got {thickness}"
            )));
        }
        if let Some(bad) = profile.iter().find(|c| !c.is_finite()) {
            return Err(CamError::InvalidParameter(format!(
                "cam profile contains a non-finite point {bad}"
            )));
        }

        let (ring, area) = counter_clockwise_ring(profile);
        if ring.len() < 3 || area <= tolerance() {
            return Err(CamError::DegenerateProfile { points: ring.len() });
        }

        let caps = triangulate::triangulate_ring(&ring);
        let n = ring.len();
        let lift = |z: Real| -> Vec<Point3<Real>> {
            ring.iter().map(|&p| Coordinate::from(p).to_point3(z)).collect()
        };
        let (bottom, top) = (lift(0.0), lift(thickness));

        let mut triangles = Vec::with_capacity(2 * n + 2 * caps.len());

        // bottom, reversed so it faces -z
        for &[a, b, c] in &caps {
            triangles.push(Triangle::new(bottom[c], bottom[b], bottom[a]));
        }
        // top
        for &[a, b, c] in &caps {
            triangles.push(Triangle::new(top[a], top[b], top[c]));
        }
        // sides
        for i in 0..n {
            let j = (i + 1) % n;
            triangles.push(Triangle::new(bottom[i], bottom[j], top[j]));
            triangles.push(Triangle::new(bottom[i], top[j], top[i]));
        }

        debug!(
            vertices = n,
            cap_triangles = caps.len(),
            triangles = triangles.len(),
            thickness,
            "extruded cam profile"
        );
        Ok(CamMesh { triangles })
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Axis-aligned bounds as `(mins, maxs)`, `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(Point3<Real>, Point3<Real>)> {
        let mut points = self.triangles.iter().flat_map(|t| t.positions);
        let first = points.next()?;
        Some(points.fold((first, first), |(mins, maxs), p| {
            (mins.inf(&p), maxs.sup(&p))
        }))
    }

    /// Enclosed volume by the divergence theorem; positive when the facets face outward.
    pub fn signed_volume(&self) -> Real {
        self.triangles
            .iter()
            .map(|t| {
                let [a, b, c] = t.positions;
                a.coords.dot(&b.coords.cross(&c.coords)) / 6.0
            })
            .sum()
    }
}

/// Drop consecutive duplicates and return the ring counter-clockwise, along
/// with the area it encloses.
fn counter_clockwise_ring(profile: &[Coordinate]) -> (Vec<Point2<Real>>, Real) {
    let eps = tolerance();
    let mut ring: Vec<Point2<Real>> = Vec::with_capacity(profile.len());
    for c in profile {
        let p = Point2::new(c.x, c.y);
        if ring.last().is_none_or(|last| (p - last).norm() > eps) {
            ring.push(p);
        }
    }
    while ring.len() > 1 && (ring[0] - ring[ring.len() - 1]).norm() <= eps {
        ring.pop();
    }

    if ring.len() < 3 {
        return (ring, 0.0);
    }

    let outline: LineString<Real> = ring.iter().map(|p| geo::Coord { x: p.x, y: p.y }).collect();
    let signed_area = GeoPolygon::new(outline, vec![]).signed_area();
    if signed_area < 0.0 {
        ring.reverse();
    }
    (ring, signed_area.abs())
}
