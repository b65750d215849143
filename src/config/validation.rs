//! Configuration validation.

use crate::error::{ConfigError, Error, Result};
use crate::kinematics::LegDimensions;

use super::HexapodConfig;

/// Validate a hexapod configuration.
///
/// Checks:
/// - Segment lengths are finite and positive (shared and per-leg overrides)
/// - Body radius is non-negative, height finite, stance reach positive
/// - Mount angles are finite
pub fn validate_config(config: &HexapodConfig) -> Result<()> {
    validate_dimensions(&config.dimensions)?;
    validate_body(config)?;

    for (_, leg) in config.legs.iter() {
        if !leg.mount_angle.0.is_finite() {
            return Err(Error::Config(ConfigError::InvalidMountAngle(
                leg.mount_angle.0,
            )));
        }

        if let Some(ref dims) = leg.dimensions {
            validate_dimensions(dims)?;
        }
    }

    Ok(())
}

/// Validate segment lengths.
///
/// The solver assumes every length is positive; this is where that
/// precondition is enforced for configured legs.
pub fn validate_dimensions(dims: &LegDimensions) -> Result<()> {
    let segments = [
        ("coxa", dims.coxa_length),
        ("femur", dims.femur_length),
        ("tibia", dims.tibia_length),
    ];

    for (segment, value) in segments {
        if !(value.is_finite() && value > 0.0) {
            return Err(Error::Config(ConfigError::InvalidSegmentLength {
                segment,
                value,
            }));
        }
    }

    Ok(())
}

fn validate_body(config: &HexapodConfig) -> Result<()> {
    let body = &config.body;

    if !(body.radius.is_finite() && body.radius >= 0.0) {
        return Err(Error::Config(ConfigError::InvalidBodyGeometry {
            field: "radius",
            value: body.radius,
        }));
    }

    if !body.height.is_finite() {
        return Err(Error::Config(ConfigError::InvalidBodyGeometry {
            field: "height",
            value: body.height,
        }));
    }

    if !(body.stance_reach.is_finite() && body.stance_reach > 0.0) {
        return Err(Error::Config(ConfigError::InvalidBodyGeometry {
            field: "stance_reach",
            value: body.stance_reach,
        }));
    }

    Ok(())
}
