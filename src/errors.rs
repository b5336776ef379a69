//! Errors reported by the cam pipeline

use crate::coordinate::Coordinate;
use crate::float_types::Real;
use crate::io::IoError;

/// Every way a cam job can fail.
///
/// Nothing in the pipeline recovers from these; the first one aborts the job.
#[derive(Debug, thiserror::Error)]
pub enum CamError {
    /// The arm cannot reach `target` from `pivot`: the reach lies outside
    /// `[min_reach, max_reach]`.
    #[error(
        "(UnreachableTarget) target {target} is {reach} from pivot {pivot}, \
         outside the linkage range [{min_reach}, {max_reach}]"
    )]
    UnreachableTarget {
        target: Coordinate,
        pivot: Coordinate,
        reach: Real,
        min_reach: Real,
        max_reach: Real,
    },

    /// A cam silhouette needs at least three distinct points enclosing an area
    #[error(
        "(DegenerateProfile) a cam profile needs at least 3 distinct points enclosing an area, \
         got {points} points"
    )]
    DegenerateProfile { points: usize },

    /// A job parameter is out of its valid range
    #[error("(InvalidParameter) {0}")]
    InvalidParameter(String),

    /// Reading the path or writing a mesh failed
    #[error("(IOFailure) {0}")]
    Io(#[from] IoError),
}

impl From<std::io::Error> for CamError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(IoError::StdIo(value))
    }
}
