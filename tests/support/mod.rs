//! Test support library
//! Provides fixture paths and float helpers for the integration tests.

#![allow(dead_code)]

use linkcams::{coordinate::Coordinate, float_types::Real};
use std::path::PathBuf;

/// Path of a file under `tests/data`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join(name)
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Index of the mirror image of point `k` in the symmetric star fixture,
/// whose point 0 sits on the axis and points `k` and `len - k` mirror each other.
pub fn mirror_index(k: usize, len: usize) -> usize {
    (len - k) % len
}

pub fn coords(points: &[[Real; 2]]) -> Vec<Coordinate> {
    points.iter().map(|&p| Coordinate::from(p)).collect()
}
