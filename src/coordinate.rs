//! The planar `Coordinate` shared by paths, pivots and cam profiles.

use crate::float_types::Real;
use nalgebra::{Point2, Point3};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A point in the drawing plane, or a point of a cam silhouette.
///
/// Which of the two it is depends on where it came from: paths and pivots
/// are in drawing units, the output of [`convert_coord`](crate::linkage::convert_coord)
/// is a cam-surface coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: Real,
    pub y: Real,
}

impl Coordinate {
    pub const fn new(x: Real, y: Real) -> Self {
        Coordinate { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Coordinate) -> Real {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Linear interpolation between `self` (`t = 0`) and `other` (`t = 1`).
    pub fn lerp(&self, other: &Coordinate, t: Real) -> Coordinate {
        Coordinate::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Lift onto the plane `z`.
    pub fn to_point3(self, z: Real) -> Point3<Real> {
        Point3::new(self.x, self.y, z)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<[Real; 2]> for Coordinate {
    fn from([x, y]: [Real; 2]) -> Self {
        Coordinate::new(x, y)
    }
}

impl From<Point2<Real>> for Coordinate {
    fn from(p: Point2<Real>) -> Self {
        Coordinate::new(p.x, p.y)
    }
}

impl From<Coordinate> for Point2<Real> {
    fn from(c: Coordinate) -> Self {
        Point2::new(c.x, c.y)
    }
}

impl From<Coordinate> for geo::Coord<Real> {
    fn from(c: Coordinate) -> Self {
        geo::Coord { x: c.x, y: c.y }
    }
}
