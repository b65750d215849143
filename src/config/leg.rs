//! Leg and body configuration from TOML.

use serde::Deserialize;

use crate::kinematics::LegDimensions;

use super::units::Degrees;

/// Per-leg configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct LegConfig {
    /// Bearing of the coxa joint around the body centre, counter-clockwise
    /// from the body's forward (x) axis.
    #[serde(rename = "mount_angle_deg")]
    pub mount_angle: Degrees,

    /// Segment lengths overriding the hexapod-wide dimensions.
    #[serde(default)]
    pub dimensions: Option<LegDimensions>,
}

impl LegConfig {
    /// Create a leg mounted at `mount_angle` using the shared dimensions.
    pub fn new(mount_angle: Degrees) -> Self {
        Self {
            mount_angle,
            dimensions: None,
        }
    }

    /// Segment lengths for this leg, falling back to `shared`.
    pub fn effective_dimensions(&self, shared: &LegDimensions) -> LegDimensions {
        self.dimensions.unwrap_or(*shared)
    }
}

/// Body geometry shared by all legs.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BodyConfig {
    /// Distance from the body centre to each coxa joint.
    #[serde(default)]
    pub radius: f64,

    /// Standing height of the body above the ground.
    #[serde(default = "default_height")]
    pub height: f64,

    /// Horizontal distance from the body centre to each foot when standing.
    #[serde(default = "default_stance_reach")]
    pub stance_reach: f64,
}

fn default_height() -> f64 {
    60.0
}

fn default_stance_reach() -> f64 {
    100.0
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            radius: 0.0,
            height: default_height(),
            stance_reach: default_stance_reach(),
        }
    }
}
