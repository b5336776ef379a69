//! Turn a closed 2D path into the two cams of a linkage drawing machine.
//!
//! Two cams turn on fixed pivots below the drawing. Each drives a two-link
//! arm; the arms meet at the pen. Given the path the pen must trace, this
//! crate works out the cam surfaces and writes each cam as a solid STL.
//!
//! # Pipeline
//! - [`resample`]: scale the path, resample profiles as closed loops
//! - [`linkage`]: two-link inverse kinematics and pivot placement
//! - [`mesh`]: extrude a cam silhouette into a closed triangle mesh
//! - [`cams`]: the whole job, from CSV path to two STL files
//! - [`io`]: CSV coordinates and STL meshes
//!
//! # Features
//! - **parallel**: solve the left and right cams concurrently with rayon
//!
//! ```no_run
//! use linkcams::cams::{CamJob, create_cams};
//! # fn main() -> Result<(), linkcams::errors::CamError> {
//! create_cams("star_path.csv", "left.stl", "right.stl", &CamJob::default())?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod cams;
pub mod coordinate;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod linkage;
pub mod mesh;
pub mod resample;
pub mod triangulated;

pub use cams::{CamJob, CamPair, CamProfile, Side, create_cams, write_cam};
pub use coordinate::Coordinate;
pub use errors::CamError;
pub use linkage::{Branch, LinkGeometry, convert_coord, get_cam_centers};
pub use mesh::CamMesh;

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr
/// - RUST_LOG environment variable support, `info` otherwise
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}
