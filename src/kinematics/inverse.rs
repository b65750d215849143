//! Analytical inverse kinematics.
//!
//! The coxa joint is solved in the horizontal plane; femur and tibia form a
//! planar two-link chain in the vertical plane through the coxa bearing, solved
//! with the law of cosines (elbow-up branch).

use libm::{acos, atan2, sqrt};

use crate::config::units::Degrees;
use crate::config::ServoRange;
use crate::error::UnreachableError;

use super::types::{JointAngles, LegDimensions, Position3D};
use super::workspace::ReachLimits;

/// Solve joint angles that place the foot at `target`.
///
/// Angles are returned in servo convention (see [`JointAngles`]) and clamped
/// to [`ServoRange::STANDARD`]. Targets that need a coxa bearing beyond
/// +/-90 degrees, or a femur elevation outside +/-90 degrees, come back
/// saturated; [`solve_fk`](super::solve_fk) will then not reproduce `target`.
///
/// # Errors
///
/// - [`UnreachableError::TooFar`] if the reach from the femur joint exceeds
///   `femur_length + tibia_length`
/// - [`UnreachableError::TooClose`] if it is below
///   `|femur_length - tibia_length|`, or exactly zero
pub fn solve_ik(target: Position3D, dims: LegDimensions) -> Result<JointAngles, UnreachableError> {
    let coxa_bearing = atan2(target.y, target.x);
    let (horizontal, vertical) = sagittal_offset(target, &dims);
    let reach = sqrt(horizontal * horizontal + vertical * vertical);

    ReachLimits::from_dimensions(&dims).check(reach)?;

    Ok(solve_chain(coxa_bearing, horizontal, vertical, reach, &dims))
}

/// Solve for `target` pulled onto the workspace boundary when out of reach.
///
/// Equivalent to solving [`clamp_to_workspace`](super::clamp_to_workspace)'s
/// result, but uses the exact boundary reach so rounding in the projected
/// position can never push it back outside.
///
/// # Errors
///
/// Fails only when there is no direction to clamp along:
/// [`UnreachableError::TooClose`] when the target sits exactly on the femur
/// joint of a leg with equal femur and tibia lengths, and
/// [`UnreachableError::TooFar`] for a NaN target.
pub fn solve_ik_clamped(
    target: Position3D,
    dims: LegDimensions,
) -> Result<JointAngles, UnreachableError> {
    let limits = ReachLimits::from_dimensions(&dims);
    let coxa_bearing = atan2(target.y, target.x);
    let (horizontal, vertical) = sagittal_offset(target, &dims);
    let reach = sqrt(horizontal * horizontal + vertical * vertical);

    let clamped = limits.clamp(reach);
    if let Err(e) = limits.check(reach) {
        if reach.is_nan() || clamped <= 0.0 {
            return Err(e);
        }
    }

    Ok(solve_chain(coxa_bearing, horizontal, vertical, clamped, &dims))
}

/// Offset of `target` from the femur joint in the leg's vertical plane.
///
/// Returns `(horizontal, vertical)`; horizontal is negative when the target is
/// closer to the coxa axis than the coxa segment is long.
pub(crate) fn sagittal_offset(target: Position3D, dims: &LegDimensions) -> (f64, f64) {
    let xy_distance = sqrt(target.x * target.x + target.y * target.y);
    (xy_distance - dims.coxa_length, target.z)
}

/// Law-of-cosines solve for a reach already known to be spannable.
fn solve_chain(
    coxa_bearing: f64,
    horizontal: f64,
    vertical: f64,
    reach: f64,
    dims: &LegDimensions,
) -> JointAngles {
    let femur = dims.femur_length;
    let tibia = dims.tibia_length;

    let cos_tibia = (femur * femur + tibia * tibia - reach * reach) / (2.0 * femur * tibia);
    let tibia_interior = acos(clamp_unit(cos_tibia));

    let elevation = atan2(vertical, horizontal);
    let cos_femur_offset = (femur * femur + reach * reach - tibia * tibia) / (2.0 * femur * reach);
    let femur_angle = elevation + acos(clamp_unit(cos_femur_offset));

    let servo = ServoRange::STANDARD;
    JointAngles {
        coxa: servo.clamp(Degrees::from_radians(coxa_bearing) + Degrees::RIGHT),
        femur: servo.clamp(Degrees::from_radians(femur_angle) + Degrees::RIGHT),
        tibia: servo.clamp(Degrees::STRAIGHT - Degrees::from_radians(tibia_interior)),
    }
}

/// Rounding at the reach boundary can leave a cosine just outside [-1, 1].
#[inline]
fn clamp_unit(value: f64) -> f64 {
    value.max(-1.0).min(1.0)
}
