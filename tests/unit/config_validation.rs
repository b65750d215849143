//! Unit tests for configuration validation.

use hexapod_kinematics::config::{parse_config, validate_config, HexapodConfig};
use hexapod_kinematics::error::{ConfigError, Error};
use hexapod_kinematics::LegDimensions;

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[dimensions]
coxa_length = 30.0
femur_length = 50.0
tibia_length = 70.0

[body]
radius = 80.0
height = 60.0
stance_reach = 130.0

[legs.middle_right]
mount_angle_deg = 0.0
"#;

    let config: HexapodConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for a zero-length femur.
#[test]
fn test_zero_femur_rejected() {
    let toml_str = r#"
[dimensions]
coxa_length = 30.0
femur_length = 0.0
tibia_length = 70.0
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidSegmentLength { segment: "femur", .. }))
    ));
}

/// Test validation fails for a negative per-leg override.
#[test]
fn test_negative_override_rejected() {
    let toml_str = r#"
[dimensions]
coxa_length = 30.0
femur_length = 50.0
tibia_length = 70.0

[legs.rear_left]
mount_angle_deg = 225.0
dimensions = { coxa_length = -1.0, femur_length = 50.0, tibia_length = 70.0 }
"#;

    let config: HexapodConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidSegmentLength { segment: "coxa", .. }))
    ));
}

/// Test validation fails for a negative body radius.
#[test]
fn test_negative_body_radius_rejected() {
    let toml_str = r#"
[dimensions]
coxa_length = 30.0
femur_length = 50.0
tibia_length = 70.0

[body]
radius = -5.0
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidBodyGeometry { field: "radius", .. }))
    ));
}

/// Test validation fails for a non-finite mount angle.
#[test]
fn test_non_finite_mount_angle_rejected() {
    let toml_str = r#"
[dimensions]
coxa_length = 30.0
femur_length = 50.0
tibia_length = 70.0

[legs.front]
mount_angle_deg = inf
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidMountAngle(_)))
    ));
}

/// Test that a configuration with no legs is valid.
#[test]
fn test_legless_config_is_valid() {
    let config = HexapodConfig::new(LegDimensions::new(30.0, 50.0, 70.0));
    assert!(validate_config(&config).is_ok());
}
