//! Hexapod configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use crate::kinematics::LegDimensions;

use super::leg::{BodyConfig, LegConfig};
use super::limits::ReachPolicy;

/// Maximum number of legs in one configuration.
pub const MAX_LEGS: usize = 8;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct HexapodConfig {
    /// Segment lengths shared by every leg without an override.
    pub dimensions: LegDimensions,

    /// Body geometry.
    #[serde(default)]
    pub body: BodyConfig,

    /// What legs do with unreachable targets.
    #[serde(default)]
    pub reach_policy: ReachPolicy,

    /// Named leg configurations.
    #[serde(default)]
    pub legs: FnvIndexMap<String<32>, LegConfig, MAX_LEGS>,
}

impl HexapodConfig {
    /// Create a configuration with no legs.
    pub fn new(dimensions: LegDimensions) -> Self {
        Self {
            dimensions,
            body: BodyConfig::default(),
            reach_policy: ReachPolicy::default(),
            legs: FnvIndexMap::new(),
        }
    }

    /// Get a leg configuration by name.
    pub fn leg(&self, name: &str) -> Option<&LegConfig> {
        self.legs
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Segment lengths for a named leg, honouring per-leg overrides.
    pub fn dimensions_for(&self, name: &str) -> Option<LegDimensions> {
        self.leg(name)
            .map(|leg| leg.effective_dimensions(&self.dimensions))
    }

    /// List all leg names.
    pub fn leg_names(&self) -> impl Iterator<Item = &str> {
        self.legs.keys().map(|s| s.as_str())
    }
}
