//! Value types crossing the kinematics boundary.

use libm::sqrt;
use serde::Deserialize;

use crate::config::units::Degrees;

/// Foot position in the leg's local frame.
///
/// The origin sits at the coxa joint, x points outward along the neutral coxa
/// bearing and z points up. Units are whatever the [`LegDimensions`] use
/// (millimetres throughout this crate's docs and tests).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position3D {
    /// Outward component.
    pub x: f64,
    /// Sideways component.
    pub y: f64,
    /// Vertical component.
    pub z: f64,
}

impl Position3D {
    /// Create a new position.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another position.
    #[inline]
    pub fn distance_to(&self, other: &Position3D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        sqrt(dx * dx + dy * dy + dz * dz)
    }
}

/// Servo-ready joint angles.
///
/// Coxa and femur are centred on 90 degrees; tibia is measured as
/// `180 - interior knee angle`. Every angle returned by the solver lies in
/// [`ServoRange::STANDARD`](crate::config::ServoRange::STANDARD).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JointAngles {
    /// Hip rotation in the horizontal plane.
    pub coxa: Degrees,
    /// Upper leg elevation.
    pub femur: Degrees,
    /// Knee angle.
    pub tibia: Degrees,
}

impl JointAngles {
    /// Create joint angles from raw degree values.
    #[inline]
    pub const fn new(coxa: f64, femur: f64, tibia: f64) -> Self {
        Self {
            coxa: Degrees(coxa),
            femur: Degrees(femur),
            tibia: Degrees(tibia),
        }
    }

    /// Angles as an array in proximal-to-distal order.
    #[inline]
    pub fn to_array(self) -> [Degrees; 3] {
        [self.coxa, self.femur, self.tibia]
    }
}

/// Segment lengths of a 3-DOF leg.
///
/// All lengths must be positive. The solver does not check this; configuration
/// loading does.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LegDimensions {
    /// Hip segment, from coxa joint to femur joint.
    pub coxa_length: f64,
    /// Upper leg, from femur joint to tibia joint.
    pub femur_length: f64,
    /// Lower leg, from tibia joint to foot.
    pub tibia_length: f64,
}

impl LegDimensions {
    /// Create new leg dimensions.
    #[inline]
    pub const fn new(coxa_length: f64, femur_length: f64, tibia_length: f64) -> Self {
        Self {
            coxa_length,
            femur_length,
            tibia_length,
        }
    }

    /// Length of the fully extended femur + tibia chain.
    #[inline]
    pub fn extension(&self) -> f64 {
        self.femur_length + self.tibia_length
    }
}
