//! Scalar type, constants and the crate-wide tolerance.

/// Our Real scalar type.
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Lazily-initialized tolerance used across the crate.
/// Defaults to `1e-6`, but can be overridden:
///  1) **Build-time**: set env var `LINKCAMS_TOLERANCE` (e.g. `LINKCAMS_TOLERANCE=1e-9 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before using the library
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    1e-6
}

/// Returns the current tolerance.
/// If not set yet, it tries `LINKCAMS_TOLERANCE` and falls back to the default.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("LINKCAMS_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

/// π/2
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;
