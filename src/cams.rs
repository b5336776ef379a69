//! Path in, two cam solids out.
//!
//! ```text
//! path csv -> scale -> pivots -> per side: convert_coord -> interpolate -> extrude -> stl
//! ```
//!
//! Each side runs its own pipeline; the left side runs first and the first
//! failure aborts the job. A file already written by the left side is left
//! in place.

use crate::coordinate::Coordinate;
use crate::errors::CamError;
use crate::float_types::Real;
use crate::io::{csv::read_coords_csv, stl::write_mesh};
use crate::linkage::{Branch, LinkGeometry, convert_coord, get_cam_centers};
use crate::mesh::CamMesh;
use crate::resample::{interpolate, scale};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Thickness used by [`write_cam`].
pub const DEFAULT_THICKNESS: Real = 3000.0;

/// All parameters of one cam-generation job.
///
/// Lengths are in the units of the scaled path. Missing fields of a JSON job
/// file fall back to [`CamJob::default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CamJob {
    /// Pieces each profile segment is split into (0 or 1 leaves it as is)
    pub interpolation: usize,
    pub x_scale: Real,
    pub y_scale: Real,
    pub proximal_len: Real,
    pub distal_len: Real,
    /// Radius at which the follower meets the cam
    pub height: Real,
    /// Extrusion depth of each cam
    pub thickness: Real,
}

impl Default for CamJob {
    fn default() -> Self {
        CamJob {
            interpolation: 5,
            x_scale: 0.045,
            y_scale: 0.045,
            proximal_len: 43500.0,
            distal_len: 32300.0,
            height: 7060.0,
            thickness: DEFAULT_THICKNESS,
        }
    }
}

impl CamJob {
    pub const fn geometry(&self) -> LinkGeometry {
        LinkGeometry::new(self.proximal_len, self.distal_len, self.height)
    }

    /// Reject parameters no linkage can be built from.
    pub fn validate(&self) -> Result<(), CamError> {
        let positive = [
            ("proximal_len", self.proximal_len),
            ("distal_len", self.distal_len),
            ("height", self.height),
            ("thickness", self.thickness),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CamError::InvalidParameter(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        for (name, value) in [("x_scale", self.x_scale), ("y_scale", self.y_scale)] {
            if !value.is_finite() {
                return Err(CamError::InvalidParameter(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Which cam of the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The left arm bends one way, the right arm the mirrored way.
    pub const fn branch(self) -> Branch {
        match self {
            Side::Left => Branch::Primary,
            Side::Right => Branch::Alternate,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// The interpolated silhouette of one cam, ready to extrude.
#[derive(Debug, Clone, PartialEq)]
pub struct CamProfile {
    pub side: Side,
    pub pivot: Coordinate,
    pub points: Vec<Coordinate>,
}

impl CamProfile {
    /// Solve every path point for `side` and resample the result.
    pub fn solve(
        path: &[Coordinate],
        pivot: Coordinate,
        geometry: &LinkGeometry,
        side: Side,
        interpolation: usize,
    ) -> Result<CamProfile, CamError> {
        let surface = path
            .iter()
            .map(|&target| {
                convert_coord(
                    target,
                    pivot,
                    geometry.proximal_len,
                    geometry.distal_len,
                    geometry.height,
                    side.branch(),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let points = interpolate(&surface, interpolation);
        debug!(%side, path_points = path.len(), profile_points = points.len(), "solved cam profile");
        Ok(CamProfile { side, pivot, points })
    }

    pub fn to_mesh(&self, thickness: Real) -> Result<CamMesh, CamError> {
        CamMesh::extrude(&self.points, thickness)
    }
}

/// Both cams of a job.
#[derive(Debug, Clone, PartialEq)]
pub struct CamPair {
    pub left: CamProfile,
    pub right: CamProfile,
}

/// Scale `path`, place the pivots and solve both profiles, without touching
/// the filesystem.
pub fn build_profiles(path: &[Coordinate], job: &CamJob) -> Result<CamPair, CamError> {
    let (scaled, (left_pivot, right_pivot)) = prepare(path, job)?;
    let geometry = job.geometry();

    let solve = |pivot, side| CamProfile::solve(&scaled, pivot, &geometry, side, job.interpolation);

    #[cfg(feature = "parallel")]
    let (left, right) = rayon::join(|| solve(left_pivot, Side::Left), || solve(right_pivot, Side::Right));

    #[cfg(not(feature = "parallel"))]
    let (left, right) = (solve(left_pivot, Side::Left), solve(right_pivot, Side::Right));

    Ok(CamPair { left: left?, right: right? })
}

/// Read the path at `input_csv`, build both cams and write them as STL to
/// `left_output` and `right_output`.
///
/// Returns the two profiles so callers can keep or dump them.
pub fn create_cams(
    input_csv: impl AsRef<Path>,
    left_output: impl AsRef<Path>,
    right_output: impl AsRef<Path>,
    job: &CamJob,
) -> Result<CamPair, CamError> {
    let path = read_coords_csv(input_csv.as_ref())?;
    let (scaled, (left_pivot, right_pivot)) = prepare(&path, job)?;
    let geometry = job.geometry();

    let write_side = |side: Side, pivot: Coordinate, output: &Path| -> Result<CamProfile, CamError> {
        let profile = CamProfile::solve(&scaled, pivot, &geometry, side, job.interpolation)?;
        write_mesh(&profile.to_mesh(job.thickness)?, output)?;
        info!(%side, %pivot, output = %output.display(), "cam written");
        Ok(profile)
    };

    let left = write_side(Side::Left, left_pivot, left_output.as_ref())?;
    let right = write_side(Side::Right, right_pivot, right_output.as_ref())?;
    Ok(CamPair { left, right })
}

/// Extrude `profile` by [`DEFAULT_THICKNESS`] and write it to `output`.
pub fn write_cam(profile: &[Coordinate], output: impl AsRef<Path>) -> Result<(), CamError> {
    write_cam_with_thickness(profile, output, DEFAULT_THICKNESS)
}

/// Extrude `profile` by `thickness` and write it to `output`.
pub fn write_cam_with_thickness(
    profile: &[Coordinate],
    output: impl AsRef<Path>,
    thickness: Real,
) -> Result<(), CamError> {
    let mesh = CamMesh::extrude(profile, thickness)?;
    write_mesh(&mesh, output)?;
    Ok(())
}

fn prepare(
    path: &[Coordinate],
    job: &CamJob,
) -> Result<(Vec<Coordinate>, (Coordinate, Coordinate)), CamError> {
    job.validate()?;
    if path.len() < 2 {
        return Err(CamError::InvalidParameter(format!(
            "a path needs at least 2 points, got {}",
            path.len()
        )));
    }

    let scaled = scale(path, job.x_scale, job.y_scale);
    let pivots = get_cam_centers(&scaled, job.height, job.proximal_len, job.distal_len);
    debug!(left = %pivots.0, right = %pivots.1, "placed cam pivots");
    Ok((scaled, pivots))
}
