//! A configured leg mounted on the hexapod body.

use heapless::String;
use libm::{cos, sin};

use crate::config::units::Degrees;
use crate::config::{HexapodConfig, ReachPolicy};
use crate::error::{ConfigError, Error, Result};
use crate::kinematics::{self, JointAngles, LegDimensions, Position3D, ReachLimits};

/// One leg: segment lengths, where it is mounted, and how it treats
/// unreachable targets.
///
/// The leg frame has its origin at the coxa joint and its x axis pointing
/// radially outward from the body centre. The body frame has its origin at the
/// body centre with z up; a leg mounted at angle `a` and radius `r` has its
/// coxa joint at `r * (cos a, sin a, 0)`.
#[derive(Debug, Clone)]
pub struct Leg {
    name: String<32>,
    dimensions: LegDimensions,
    mount_angle: Degrees,
    mount_radius: f64,
    stance_reach: f64,
    stance_height: f64,
    policy: ReachPolicy,
}

impl Leg {
    /// Create a leg at the body centre with default stance and reject policy.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NameTooLong` if `name` exceeds 32 characters.
    pub fn new(name: &str, dimensions: LegDimensions) -> Result<Self> {
        let name = String::try_from(name).map_err(|_| Error::Config(ConfigError::NameTooLong))?;
        let body = crate::config::BodyConfig::default();

        Ok(Self {
            name,
            dimensions,
            mount_angle: Degrees(0.0),
            mount_radius: body.radius,
            stance_reach: body.stance_reach,
            stance_height: body.height,
            policy: ReachPolicy::default(),
        })
    }

    /// Build a named leg from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LegNotFound` if no leg with that name is configured.
    pub fn from_config(config: &HexapodConfig, name: &str) -> Result<Self> {
        let leg_config = config.leg(name).ok_or_else(|| {
            Error::Config(ConfigError::LegNotFound(
                String::try_from(name).unwrap_or_default(),
            ))
        })?;

        let dimensions = leg_config.effective_dimensions(&config.dimensions);

        Ok(Self::new(name, dimensions)?
            .with_mount(leg_config.mount_angle, config.body.radius)
            .with_stance(config.body.stance_reach, config.body.height)
            .with_policy(config.reach_policy))
    }

    /// Set the mount bearing and radius.
    pub fn with_mount(mut self, angle: Degrees, radius: f64) -> Self {
        self.mount_angle = angle;
        self.mount_radius = radius;
        self
    }

    /// Set the standing foot reach (from body centre) and body height.
    pub fn with_stance(mut self, reach: f64, height: f64) -> Self {
        self.stance_reach = reach;
        self.stance_height = height;
        self
    }

    /// Set the reach policy.
    pub fn with_policy(mut self, policy: ReachPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Get the leg name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the segment lengths.
    #[inline]
    pub fn dimensions(&self) -> LegDimensions {
        self.dimensions
    }

    /// Get the mount bearing.
    #[inline]
    pub fn mount_angle(&self) -> Degrees {
        self.mount_angle
    }

    /// Get the mount radius.
    #[inline]
    pub fn mount_radius(&self) -> f64 {
        self.mount_radius
    }

    /// Get the reach policy.
    #[inline]
    pub fn policy(&self) -> ReachPolicy {
        self.policy
    }

    /// Reach bounds of this leg's femur/tibia chain.
    #[inline]
    pub fn limits(&self) -> ReachLimits {
        ReachLimits::from_dimensions(&self.dimensions)
    }

    /// Convert a body-frame point into this leg's frame.
    pub fn to_leg_frame(&self, body: Position3D) -> Position3D {
        let (sin_a, cos_a) = self.mount_rotation();
        let dx = body.x - self.mount_radius * cos_a;
        let dy = body.y - self.mount_radius * sin_a;

        Position3D::new(dx * cos_a + dy * sin_a, dy * cos_a - dx * sin_a, body.z)
    }

    /// Convert a point in this leg's frame into the body frame.
    pub fn to_body_frame(&self, leg: Position3D) -> Position3D {
        let (sin_a, cos_a) = self.mount_rotation();

        Position3D::new(
            self.mount_radius * cos_a + leg.x * cos_a - leg.y * sin_a,
            self.mount_radius * sin_a + leg.x * sin_a + leg.y * cos_a,
            leg.z,
        )
    }

    /// Solve joint angles for a target in this leg's frame.
    ///
    /// With [`ReachPolicy::Clamp`] unreachable targets are pulled onto the
    /// workspace boundary instead of failing.
    ///
    /// # Errors
    ///
    /// Returns `Error::Unreachable` if the target cannot be reached under the
    /// leg's policy.
    pub fn solve(&self, target: Position3D) -> Result<JointAngles> {
        match self.policy {
            ReachPolicy::Reject => {
                kinematics::solve_ik(target, self.dimensions).map_err(|e| {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("leg {=str}: rejected target: {}", self.name.as_str(), e);
                    Error::Unreachable(e)
                })
            }
            ReachPolicy::Clamp => {
                #[cfg(feature = "defmt")]
                if !kinematics::is_reachable(target, self.dimensions) {
                    defmt::debug!("leg {=str}: clamping target {}", self.name.as_str(), target);
                }

                kinematics::solve_ik_clamped(target, self.dimensions).map_err(Error::Unreachable)
            }
        }
    }

    /// Solve joint angles for a target in the body frame.
    ///
    /// # Errors
    ///
    /// See [`Leg::solve`].
    pub fn solve_body(&self, target: Position3D) -> Result<JointAngles> {
        self.solve(self.to_leg_frame(target))
    }

    /// Foot position in this leg's frame for the given angles.
    #[inline]
    pub fn forward(&self, angles: JointAngles) -> Position3D {
        kinematics::solve_fk(angles, self.dimensions)
    }

    /// Foot position in the body frame for the given angles.
    #[inline]
    pub fn forward_body(&self, angles: JointAngles) -> Position3D {
        self.to_body_frame(self.forward(angles))
    }

    /// Whether a leg-frame target is reachable without clamping.
    #[inline]
    pub fn is_reachable(&self, target: Position3D) -> bool {
        kinematics::is_reachable(target, self.dimensions)
    }

    /// Maximum horizontal reach from the coxa joint at height `z`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Domain` if `|z|` exceeds the leg's extension.
    pub fn max_reach_at_height(&self, z: f64) -> Result<f64> {
        Ok(kinematics::max_reach_at_height(z, self.dimensions)?)
    }

    /// Default standing foot position in the body frame.
    ///
    /// The foot sits `stance_reach` from the body centre along the mount
    /// bearing, `stance_height` below the body.
    pub fn stance_position(&self) -> Position3D {
        let (sin_a, cos_a) = self.mount_rotation();
        Position3D::new(
            self.stance_reach * cos_a,
            self.stance_reach * sin_a,
            -self.stance_height,
        )
    }

    fn mount_rotation(&self) -> (f64, f64) {
        let a = self.mount_angle.to_radians();
        (sin(a), cos(a))
    }
}
