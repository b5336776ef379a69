//! Scaling and resampling of cyclic coordinate sequences.
//!
//! Every sequence handled here is a closed loop: the segment from the last
//! point back to the first is as much part of it as any other.

use crate::coordinate::Coordinate;
use crate::float_types::Real;

/// Multiply every `x` by `x_factor` and every `y` by `y_factor`.
pub fn scale(points: &[Coordinate], x_factor: Real, y_factor: Real) -> Vec<Coordinate> {
    points
        .iter()
        .map(|p| Coordinate::new(p.x * x_factor, p.y * y_factor))
        .collect()
}

/// Split every segment of the loop into `n` equal pieces.
///
/// The output starts at `points[0]`, keeps the input order and ends with the
/// points placed on the closing segment (last -> first), so for `n >= 1` its
/// length is `points.len() * n`. `n` of 0 or 1 returns the input unchanged.
///
/// ```
/// use linkcams::{coordinate::Coordinate, resample::interpolate};
/// let line = [Coordinate::new(10.0, 100.0), Coordinate::new(20.0, 200.0)];
/// let out = interpolate(&line, 2);
/// assert_eq!(out.len(), 4);
/// assert_eq!(out[1], Coordinate::new(15.0, 150.0));
/// assert_eq!(out[3], Coordinate::new(15.0, 150.0));
/// ```
pub fn interpolate(points: &[Coordinate], n: usize) -> Vec<Coordinate> {
    if n <= 1 || points.is_empty() {
        return points.to_vec();
    }

    let count = points.len();
    let mut out = Vec::with_capacity(count * n);
    for (i, start) in points.iter().enumerate() {
        let end = &points[(i + 1) % count];
        out.push(*start);
        for k in 1..n {
            out.push(start.lerp(end, k as Real / n as Real));
        }
    }
    out
}
