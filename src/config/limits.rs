//! Servo range and reach policy.

use serde::Deserialize;

use super::units::Degrees;

/// Policy for targets outside the leg's workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum ReachPolicy {
    /// Reject unreachable targets with an error.
    #[default]
    Reject,
    /// Pull the target back onto the nearest workspace boundary.
    Clamp,
}

/// Valid angular range of a hobby servo.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServoRange {
    /// Minimum commanded angle.
    pub min: Degrees,
    /// Maximum commanded angle.
    pub max: Degrees,
}

impl ServoRange {
    /// The 0-180 degree range every joint output is clamped to.
    pub const STANDARD: Self = Self {
        min: Degrees(0.0),
        max: Degrees(180.0),
    };

    /// Create a new servo range.
    pub const fn new(min: Degrees, max: Degrees) -> Self {
        Self { min, max }
    }

    /// Check if the range is valid (min < max).
    pub fn is_valid(&self) -> bool {
        self.min.0 < self.max.0
    }

    /// Check if an angle is within range.
    pub fn contains(&self, angle: Degrees) -> bool {
        angle.0 >= self.min.0 && angle.0 <= self.max.0
    }

    /// Saturate an angle into the range. NaN saturates to `min`.
    pub fn clamp(&self, angle: Degrees) -> Degrees {
        if !(angle.0 >= self.min.0) {
            self.min
        } else if angle.0 > self.max.0 {
            self.max
        } else {
            angle
        }
    }
}

impl Default for ServoRange {
    fn default() -> Self {
        Self::STANDARD
    }
}
