//! Unit tests for TOML configuration parsing.

use hexapod_kinematics::config::{parse_config, HexapodConfig, ReachPolicy};
use hexapod_kinematics::error::{ConfigError, Error};

/// Test parsing shared dimensions and a single leg.
#[test]
fn test_parse_minimal_config() {
    let toml_str = r#"
[dimensions]
coxa_length = 30.0
femur_length = 50.0
tibia_length = 70.0

[legs.middle_right]
mount_angle_deg = 0.0
"#;

    let config: HexapodConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let leg = config.leg("middle_right").expect("Leg not found");

    assert_eq!(config.dimensions.coxa_length, 30.0);
    assert_eq!(config.dimensions.femur_length, 50.0);
    assert_eq!(config.dimensions.tibia_length, 70.0);
    assert_eq!(leg.mount_angle.0, 0.0);
    assert!(leg.dimensions.is_none());
    assert_eq!(config.reach_policy, ReachPolicy::Reject);
}

/// Test that an omitted body table falls back to the standard stance.
#[test]
fn test_body_defaults() {
    let toml_str = r#"
[dimensions]
coxa_length = 30.0
femur_length = 50.0
tibia_length = 70.0
"#;

    let config: HexapodConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.body.radius, 0.0);
    assert_eq!(config.body.height, 60.0);
    assert_eq!(config.body.stance_reach, 100.0);
    assert_eq!(config.leg_names().count(), 0);
}

/// Test parsing a per-leg dimension override.
#[test]
fn test_parse_dimension_override() {
    let toml_str = r#"
[dimensions]
coxa_length = 30.0
femur_length = 50.0
tibia_length = 70.0

[legs.front_left]
mount_angle_deg = 135.0
dimensions = { coxa_length = 25.0, femur_length = 55.0, tibia_length = 75.0 }

[legs.front_right]
mount_angle_deg = 45.0
"#;

    let config: HexapodConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    let left = config.dimensions_for("front_left").expect("Leg not found");
    assert_eq!(left.coxa_length, 25.0);
    assert_eq!(left.tibia_length, 75.0);

    let right = config.dimensions_for("front_right").expect("Leg not found");
    assert_eq!(right, config.dimensions);

    assert!(config.dimensions_for("rear").is_none());
}

/// Test parsing the clamp policy.
#[test]
fn test_parse_clamp_policy() {
    let toml_str = r#"
reach_policy = "clamp"

[dimensions]
coxa_length = 30.0
femur_length = 50.0
tibia_length = 70.0
"#;

    let config = parse_config(toml_str).expect("Failed to parse config");
    assert_eq!(config.reach_policy, ReachPolicy::Clamp);
}

/// Test that an unknown policy name is a parse error.
#[test]
fn test_unknown_policy_rejected() {
    let toml_str = r#"
reach_policy = "wrap"

[dimensions]
coxa_length = 30.0
femur_length = 50.0
tibia_length = 70.0
"#;

    let result = parse_config(toml_str);
    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}

/// Test that missing dimensions are a parse error.
#[test]
fn test_missing_dimensions_rejected() {
    let toml_str = r#"
[legs.middle_right]
mount_angle_deg = 0.0
"#;

    let result: Result<HexapodConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should require shared dimensions");
}

/// Test that more legs than the registry can hold are rejected.
#[test]
fn test_too_many_legs_rejected() {
    let mut toml_str = String::from(
        r#"
[dimensions]
coxa_length = 30.0
femur_length = 50.0
tibia_length = 70.0
"#,
    );
    for i in 0..9 {
        toml_str.push_str(&format!("\n[legs.leg{}]\nmount_angle_deg = {}.0\n", i, i * 40));
    }

    let result: Result<HexapodConfig, _> = toml::from_str(&toml_str);
    assert!(result.is_err(), "Should reject more than eight legs");
}
