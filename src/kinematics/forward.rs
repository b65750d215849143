//! Forward kinematics.

use core::f64::consts::PI;

use libm::{cos, sin};

use crate::config::units::Degrees;

use super::types::{JointAngles, LegDimensions, Position3D};

/// Compute the foot position produced by `angles`.
///
/// Undoes the servo convention applied by [`solve_ik`](super::solve_ik)
/// (the 90 degree coxa/femur offset and the `180 - interior` tibia mapping)
/// and chains the three segments. Defined for any input; angles outside
/// `[0, 180]` are not rejected.
pub fn solve_fk(angles: JointAngles, dims: LegDimensions) -> Position3D {
    let coxa = (angles.coxa - Degrees::RIGHT).to_radians();
    let femur = (angles.femur - Degrees::RIGHT).to_radians();
    let tibia_interior = (Degrees::STRAIGHT - angles.tibia).to_radians();

    // Tibia direction relative to the horizontal
    let tibia_absolute = femur + tibia_interior - PI;

    let horizontal = dims.femur_length * cos(femur) + dims.tibia_length * cos(tibia_absolute);
    let vertical = dims.femur_length * sin(femur) + dims.tibia_length * sin(tibia_absolute);

    let radial = dims.coxa_length + horizontal;

    Position3D::new(radial * cos(coxa), radial * sin(coxa), vertical)
}
