//! Example: Configuration-driven leg solving.
//!
//! This example demonstrates how to:
//! - Load hexapod geometry from TOML
//! - Build a LegRegistry for named lookups
//! - Solve the standing pose and a few reach-limit targets
//!
//! Run with: `cargo run --example leg_solver`

use hexapod_kinematics::{
    config::parse_config, max_reach_at_height, solve_ik, Error, LegRegistry, Position3D, Result,
};

fn main() -> Result<()> {
    println!("=== Hexapod Leg Solver Example ===\n");

    // Six legs evenly spaced around a round body.
    let toml_content = r#"
reach_policy = "reject"

[dimensions]
coxa_length = 30.0
femur_length = 50.0
tibia_length = 70.0

[body]
radius = 80.0
height = 60.0
stance_reach = 130.0

[legs.front_right]
mount_angle_deg = 30.0

[legs.middle_right]
mount_angle_deg = 0.0

[legs.rear_right]
mount_angle_deg = -30.0

[legs.rear_left]
mount_angle_deg = 210.0

[legs.middle_left]
mount_angle_deg = 180.0

[legs.front_left]
mount_angle_deg = 150.0
"#;

    let config = parse_config(toml_content)?;
    let registry = LegRegistry::from_config(&config)?;

    println!("Leg Geometry:");
    println!("  Coxa:  {} mm", config.dimensions.coxa_length);
    println!("  Femur: {} mm", config.dimensions.femur_length);
    println!("  Tibia: {} mm", config.dimensions.tibia_length);
    println!("  Body radius: {} mm", config.body.radius);
    println!();

    // Standing pose: one target per leg, in registration order.
    let stance = registry.stance();
    let angles = registry.solve_all(&stance)?;

    println!("Standing Pose:");
    println!("{}", "-".repeat(60));
    for ((name, leg), joint) in registry.iter().zip(angles.iter()) {
        let foot = leg.forward_body(*joint);
        println!(
            "  {:<13} coxa {:6.1}°  femur {:6.1}°  tibia {:6.1}°  foot ({:6.1}, {:6.1}, {:6.1})",
            name,
            joint.coxa.value(),
            joint.femur.value(),
            joint.tibia.value(),
            foot.x,
            foot.y,
            foot.z
        );
    }
    println!();

    // Workspace boundary at a few heights below the coxa joint.
    println!("Maximum Reach:");
    for z in [0.0, -30.0, -60.0, -90.0, -120.0, -150.0] {
        match max_reach_at_height(z, config.dimensions) {
            Ok(reach) => println!("  z = {:6.1} mm -> {:6.1} mm", z, reach),
            Err(e) => println!("  z = {:6.1} mm -> {}", z, e),
        }
    }
    println!();

    // Out-of-range targets fail with a typed error.
    println!("Reach Checks (leg frame):");
    for target in [
        Position3D::new(100.0, 0.0, -60.0),
        Position3D::new(200.0, 0.0, 0.0),
        Position3D::new(30.0, 0.0, 0.0),
    ] {
        match solve_ik(target, config.dimensions) {
            Ok(joint) => println!(
                "  ({:.0}, {:.0}, {:.0}) -> coxa {:.1}°, femur {:.1}°, tibia {:.1}°",
                target.x,
                target.y,
                target.z,
                joint.coxa.value(),
                joint.femur.value(),
                joint.tibia.value()
            ),
            Err(e) => println!(
                "  ({:.0}, {:.0}, {:.0}) -> {}",
                target.x,
                target.y,
                target.z,
                Error::from(e)
            ),
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
