//! Two-link inverse kinematics and pivot placement.
//!
//! Each cam sits on a pivot and drives a proximal link; a distal link joins
//! the proximal link's elbow to the pen. Given where the pen has to be,
//! [`solve_arm`] finds the arm pose and [`convert_coord`] turns that pose into
//! the point of the cam surface the follower must ride on.

use crate::coordinate::Coordinate;
use crate::errors::CamError;
use crate::float_types::{FRAC_PI_2, Real, tolerance};
use geo::{BoundingRect, LineString};
use serde::{Deserialize, Serialize};

/// Which of the two elbow configurations the arm resolves to.
///
/// The left cam uses [`Branch::Primary`] (elbow counter-clockwise of the
/// pivot->target line), the right cam its mirror image [`Branch::Alternate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Branch {
    #[default]
    Primary,
    Alternate,
}

impl From<bool> for Branch {
    /// `true` selects the alternate branch.
    fn from(use_alt_branch: bool) -> Self {
        if use_alt_branch {
            Branch::Alternate
        } else {
            Branch::Primary
        }
    }
}

impl Branch {
    /// +1 for the primary branch, -1 for the alternate one.
    const fn sign(self) -> Real {
        match self {
            Branch::Primary => 1.0,
            Branch::Alternate => -1.0,
        }
    }
}

/// Link lengths and follower height shared by both sides of a job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkGeometry {
    /// Pivot to elbow
    pub proximal_len: Real,
    /// Elbow to pen
    pub distal_len: Real,
    /// Radius at which the follower meets the cam
    pub height: Real,
}

impl LinkGeometry {
    pub const fn new(proximal_len: Real, distal_len: Real, height: Real) -> Self {
        LinkGeometry { proximal_len, distal_len, height }
    }

    /// Shortest pivot-to-pen distance the arm can fold to.
    pub fn min_reach(&self) -> Real {
        (self.proximal_len - self.distal_len).abs()
    }

    /// Longest pivot-to-pen distance, arm fully stretched.
    pub fn max_reach(&self) -> Real {
        self.proximal_len + self.distal_len
    }

    /// Pivot-to-pen distance with the elbow at a right angle.
    pub fn square_reach(&self) -> Real {
        self.proximal_len.hypot(self.distal_len)
    }
}

/// A solved arm. Angles are in radians; use the `_deg` accessors for degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmPose {
    /// Pivot-to-target distance
    pub reach: Real,
    /// Direction of the pivot->target line
    pub base_angle: Real,
    /// Angle between the pivot->target line and the proximal link
    pub shoulder_offset: Real,
    /// Interior angle at the elbow, between the two links
    pub elbow_angle: Real,
    /// Direction of the proximal link
    pub link_angle: Real,
    /// Elbow position in the drawing plane
    pub elbow: Coordinate,
}

impl ArmPose {
    pub fn link_angle_deg(&self) -> Real {
        self.link_angle.to_degrees()
    }

    pub fn elbow_angle_deg(&self) -> Real {
        self.elbow_angle.to_degrees()
    }

    /// Rotation of the proximal link away from the pivot's vertical.
    pub fn swing(&self) -> Real {
        self.link_angle - FRAC_PI_2
    }
}

/// Solve the two-link arm rooted at `pivot` so the pen lands on `target`.
///
/// Fails with [`CamError::UnreachableTarget`] when the target is closer than
/// `|proximal - distal|`, farther than `proximal + distal`, or on the pivot.
pub fn solve_arm(
    target: Coordinate,
    pivot: Coordinate,
    geometry: &LinkGeometry,
    branch: Branch,
) -> Result<ArmPose, CamError> {
    let a = geometry.proximal_len;
    let b = geometry.distal_len;
    let dx = target.x - pivot.x;
    let dy = target.y - pivot.y;
    let reach = dx.hypot(dy);

    let eps = tolerance();
    let (min_reach, max_reach) = (geometry.min_reach(), geometry.max_reach());
    if !reach.is_finite() || reach <= eps || reach > max_reach + eps || reach < min_reach - eps {
        return Err(CamError::UnreachableTarget {
            target,
            pivot,
            reach,
            min_reach,
            max_reach,
        });
    }

    // law of cosines; clamped since a target on the reach limits can land a hair outside [-1, 1]
    let cos_shoulder = ((a * a + reach * reach - b * b) / (2.0 * a * reach)).clamp(-1.0, 1.0);
    let cos_elbow = ((a * a + b * b - reach * reach) / (2.0 * a * b)).clamp(-1.0, 1.0);
    let shoulder_offset = cos_shoulder.acos();
    let elbow_angle = cos_elbow.acos();

    let base_angle = dy.atan2(dx);
    let link_angle = base_angle + branch.sign() * shoulder_offset;
    let elbow = Coordinate::new(
        pivot.x + a * link_angle.cos(),
        pivot.y + a * link_angle.sin(),
    );

    Ok(ArmPose {
        reach,
        base_angle,
        shoulder_offset,
        elbow_angle,
        link_angle,
        elbow,
    })
}

/// Map a pen position to the cam-surface point that produces it.
///
/// The result is a planar point in the cam's own frame, used as-is as a
/// silhouette vertex. In polar terms it sits at radius `reach - height` from
/// the cam axis. Its angle is the proximal link's swing away from the pivot's
/// vertical, taken as an arc at radius `height` and wrapped onto that circle.
///
/// The radius is signed per branch, `height - reach` on the primary branch and
/// `reach - height` on the alternate one, so a path mirrored about `x = 0`,
/// solved from mirrored pivots, gives a cam mirrored about its `y` axis.
pub fn convert_coord(
    target: Coordinate,
    pivot: Coordinate,
    proximal_len: Real,
    distal_len: Real,
    height: Real,
    branch: Branch,
) -> Result<Coordinate, CamError> {
    let geometry = LinkGeometry::new(proximal_len, distal_len, height);
    let pose = solve_arm(target, pivot, &geometry, branch)?;

    let radius = pose.reach - height;
    // a follower on the axis has no direction to turn through
    if radius.abs() <= tolerance() {
        return Ok(Coordinate::new(0.0, 0.0));
    }

    let angle = -height * pose.swing() / radius;
    let signed_radius = -branch.sign() * radius;
    Ok(Coordinate::new(
        signed_radius * angle.cos(),
        signed_radius * angle.sin(),
    ))
}

/// Place the left and right pivots for a path.
///
/// The pivots share one `y` and sit at `x = ∓proximal_len / 2`. That `y` is
/// the lower of two limits: the height from which the centre of the path's
/// bounding box lies at the arm's square-elbow reach, and `height` below the
/// lowest point of the path so the cams clear the drawing.
pub fn get_cam_centers(
    path: &[Coordinate],
    height: Real,
    proximal_len: Real,
    distal_len: Real,
) -> (Coordinate, Coordinate) {
    let geometry = LinkGeometry::new(proximal_len, distal_len, height);
    let half_span = proximal_len / 2.0;

    let outline: LineString<Real> = path.iter().map(|&c| geo::Coord::from(c)).collect();
    let (center_y, min_y) = match outline.bounding_rect() {
        Some(rect) => ((rect.min().y + rect.max().y) * 0.5, rect.min().y),
        None => (0.0, 0.0),
    };

    let square = geometry.square_reach();
    let rise = (square * square - half_span * half_span).max(0.0).sqrt();
    let y = (center_y - rise).min(min_y - height);

    (Coordinate::new(-half_span, y), Coordinate::new(half_span, y))
}
