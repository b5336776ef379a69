//! Cap triangulation for cam silhouettes.
//!
//! The side wall of an extruded cam uses every silhouette vertex, so the caps
//! have to as well or the solid leaks along T-junctions. `geo`'s earcut is
//! tried first; it discards collinear vertices (interpolated profiles are
//! full of them), in which case an ear clipper that keeps every vertex takes
//! over. Either way the result is `n - 2` triangles over the ring indices.

use crate::float_types::Real;
use geo::{Coord, LineString, Polygon as GeoPolygon, TriangulateEarcut};
use nalgebra::Point2;
use std::collections::HashSet;
use tracing::debug;

/// Triangulate a counter-clockwise ring without consecutive duplicates.
///
/// Every returned triangle lists its ring indices in ascending order, which
/// keeps it wound the same way as the ring.
pub fn triangulate_ring(ring: &[Point2<Real>]) -> Vec<[usize; 3]> {
    if ring.len() < 3 {
        return Vec::new();
    }

    if let Some(triangles) = earcut(ring) {
        return triangles;
    }

    debug!(vertices = ring.len(), "earcut skipped ring vertices, ear clipping instead");
    ear_clip(ring)
}

fn earcut(ring: &[Point2<Real>]) -> Option<Vec<[usize; 3]>> {
    let n = ring.len();
    let coords: Vec<Coord<Real>> = ring.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
    let polygon = GeoPolygon::new(LineString::new(coords), vec![]);
    let triangulation = polygon.earcut_triangles_raw();

    // earcut may or may not carry the ring's closing coordinate; either way index n is vertex 0
    let flattened = triangulation.vertices.len() / 2;
    if flattened != n && flattened != n + 1 {
        return None;
    }

    let triangles: Vec<[usize; 3]> = triangulation
        .triangle_indices
        .chunks_exact(3)
        .map(|tri| ascending([tri[0] % n, tri[1] % n, tri[2] % n]))
        .collect();

    covers_ring(&triangles, n).then_some(triangles)
}

/// Clip ears until a single triangle is left. When no clean ear exists
/// (self-intersecting input) the most convex corner is clipped anyway, so this
/// always terminates with `n - 2` triangles.
fn ear_clip(ring: &[Point2<Real>]) -> Vec<[usize; 3]> {
    let mut remaining: Vec<usize> = (0..ring.len()).collect();
    let mut triangles = Vec::with_capacity(ring.len() - 2);
    let mut start = 0;

    while remaining.len() > 3 {
        let m = remaining.len();
        let ear = (0..m)
            .map(|offset| (start + offset) % m)
            .find(|&k| is_ear(ring, &remaining, k))
            .unwrap_or_else(|| {
                (0..m)
                    .max_by(|&i, &j| {
                        corner_turn(ring, &remaining, i).total_cmp(&corner_turn(ring, &remaining, j))
                    })
                    .unwrap_or(0)
            });

        let [a, b, c] = corner(&remaining, ear);
        triangles.push(ascending([a, b, c]));
        remaining.remove(ear);
        start = ear % remaining.len();
    }

    triangles.push(ascending([remaining[0], remaining[1], remaining[2]]));
    triangles
}

fn corner(remaining: &[usize], k: usize) -> [usize; 3] {
    let m = remaining.len();
    [remaining[(k + m - 1) % m], remaining[k], remaining[(k + 1) % m]]
}

fn cross(a: &Point2<Real>, b: &Point2<Real>, c: &Point2<Real>) -> Real {
    (b - a).perp(&(c - a))
}

fn corner_turn(ring: &[Point2<Real>], remaining: &[usize], k: usize) -> Real {
    let [a, b, c] = corner(remaining, k);
    cross(&ring[a], &ring[b], &ring[c])
}

fn is_ear(ring: &[Point2<Real>], remaining: &[usize], k: usize) -> bool {
    let [a, b, c] = corner(remaining, k);
    let (pa, pb, pc) = (&ring[a], &ring[b], &ring[c]);
    if cross(pa, pb, pc) <= 0.0 {
        return false;
    }

    remaining.iter().all(|&i| {
        if i == a || i == b || i == c {
            return true;
        }
        let p = &ring[i];
        if p == pa || p == pb || p == pc {
            return true;
        }
        // inside or on the candidate triangle blocks it
        !(cross(pa, pb, p) >= 0.0 && cross(pb, pc, p) >= 0.0 && cross(pc, pa, p) >= 0.0)
    })
}

const fn ascending([a, b, c]: [usize; 3]) -> [usize; 3] {
    let (a, b) = if a > b { (b, a) } else { (a, b) };
    let (b, c) = if b > c { (c, b) } else { (b, c) };
    let (a, b) = if a > b { (b, a) } else { (a, b) };
    [a, b, c]
}

/// True when `triangles` tile the ring: `n - 2` of them, each ring edge used
/// once in ring direction, each diagonal used once in each direction.
fn covers_ring(triangles: &[[usize; 3]], n: usize) -> bool {
    if triangles.len() + 2 != n {
        return false;
    }

    let mut directed = HashSet::with_capacity(triangles.len() * 3);
    for &[a, b, c] in triangles {
        if a == b || b == c {
            return false;
        }
        for edge in [(a, b), (b, c), (c, a)] {
            if !directed.insert(edge) {
                return false;
            }
        }
    }

    let closed = directed.iter().all(|&(from, to)| {
        if to == (from + 1) % n {
            !directed.contains(&(to, from))
        } else if from == (to + 1) % n {
            // a ring edge walked backwards
            false
        } else {
            directed.contains(&(to, from))
        }
    });

    closed && (0..n).all(|i| directed.contains(&(i, (i + 1) % n)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(points: &[[Real; 2]]) -> Vec<Point2<Real>> {
        points.iter().map(|&[x, y]| Point2::new(x, y)).collect()
    }

    #[test]
    fn square_gives_two_triangles() {
        let square = ring(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        let triangles = triangulate_ring(&square);
        assert_eq!(triangles.len(), 2);
        assert!(covers_ring(&triangles, 4));
    }

    #[test]
    fn collinear_vertices_are_kept() {
        // a square with midpoints on every side
        let square = ring(&[
            [0.0, 0.0],
            [1.0, 0.0],
            [2.0, 0.0],
            [2.0, 1.0],
            [2.0, 2.0],
            [1.0, 2.0],
            [0.0, 2.0],
            [0.0, 1.0],
        ]);
        let triangles = triangulate_ring(&square);
        assert_eq!(triangles.len(), 6);
        assert!(covers_ring(&triangles, 8));
        for tri in &triangles {
            let [a, b, c] = tri.map(|i| square[i]);
            assert!(cross(&a, &b, &c) > 0.0, "triangle {tri:?} is not counter-clockwise");
        }
    }

    #[test]
    fn concave_ring_avoids_the_notch() {
        // an L shape
        let l_shape = ring(&[
            [0.0, 0.0],
            [2.0, 0.0],
            [2.0, 1.0],
            [1.0, 1.0],
            [1.0, 2.0],
            [0.0, 2.0],
        ]);
        let triangles = ear_clip(&l_shape);
        assert!(covers_ring(&triangles, 6));
        let area: Real = triangles
            .iter()
            .map(|tri| {
                let [a, b, c] = tri.map(|i| l_shape[i]);
                cross(&a, &b, &c) * 0.5
            })
            .sum();
        assert!((area - 3.0).abs() < 1e-12);
    }

    #[test]
    fn ascending_sorts_any_order() {
        assert_eq!(ascending([2, 0, 1]), [0, 1, 2]);
        assert_eq!(ascending([5, 9, 3]), [3, 5, 9]);
        assert_eq!(ascending([1, 2, 3]), [1, 2, 3]);
    }

    #[test]
    fn covers_ring_rejects_gaps() {
        // two copies of the same triangle over a square
        assert!(!covers_ring(&[[0, 1, 2], [0, 1, 2]], 4));
        assert!(!covers_ring(&[[0, 1, 2]], 4));
    }
}
