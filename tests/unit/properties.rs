//! Property tests for the geometry core.

use hexapod_kinematics::{
    clamp_to_workspace, is_reachable, max_reach_at_height, solve_fk, solve_ik, solve_ik_clamped,
    JointAngles, LegDimensions, Position3D, ReachLimits, UnreachableError,
};
use proptest::prelude::*;

fn leg_dimensions() -> impl Strategy<Value = LegDimensions> {
    (10.0..50.0f64, 30.0..100.0f64, 30.0..100.0f64)
        .prop_map(|(coxa, femur, tibia)| LegDimensions::new(coxa, femur, tibia))
}

fn any_target() -> impl Strategy<Value = Position3D> {
    (-300.0..300.0f64, -300.0..300.0f64, -300.0..300.0f64)
        .prop_map(|(x, y, z)| Position3D::new(x, y, z))
}

/// Angles strictly inside the servo range, so the solver never saturates.
fn interior_angles() -> impl Strategy<Value = JointAngles> {
    (1.0..179.0f64, 1.0..179.0f64, 1.0..179.0f64)
        .prop_map(|(coxa, femur, tibia)| JointAngles::new(coxa, femur, tibia))
}

fn in_servo_range(angles: JointAngles) -> bool {
    angles
        .to_array()
        .iter()
        .all(|a| (0.0..=180.0).contains(&a.value()))
}

proptest! {
    /// Feet placed by forward kinematics are found again by the solver.
    #[test]
    fn prop_round_trip(dims in leg_dimensions(), angles in interior_angles()) {
        let target = solve_fk(angles, dims);

        // A foot folded back past the coxa axis flips the bearing.
        let radial = (target.x * target.x + target.y * target.y).sqrt();
        prop_assume!(radial > dims.coxa_length * 0.1 && target.x > 0.0);

        let solved = solve_ik(target, dims);
        prop_assert!(solved.is_ok(), "target {:?} rejected: {:?}", target, solved);
        let solved = solved.unwrap();

        // Knees folded back over the femur joint wrap the elevation; the
        // elbow-up branch then saturates the femur servo.
        prop_assume!(solved.femur.value() < 180.0);

        let foot = solve_fk(solved, dims);
        prop_assert!(
            foot.distance_to(&target) < 1e-3,
            "round trip drifted: {:?} -> {:?}",
            target,
            foot
        );
    }

    /// Every successful solve lands in the servo range, however odd the target.
    #[test]
    fn prop_angles_in_servo_range(dims in leg_dimensions(), target in any_target()) {
        if let Ok(angles) = solve_ik(target, dims) {
            prop_assert!(in_servo_range(angles), "{:?}", angles);
        }
        if let Ok(angles) = solve_ik_clamped(target, dims) {
            prop_assert!(in_servo_range(angles), "{:?}", angles);
        }
    }

    /// The solver is a pure function of its inputs.
    #[test]
    fn prop_deterministic(dims in leg_dimensions(), target in any_target()) {
        let first = solve_ik(target, dims);
        let second = solve_ik(target, dims);

        match (first, second) {
            (Ok(a), Ok(b)) => {
                for (x, y) in a.to_array().iter().zip(b.to_array().iter()) {
                    prop_assert_eq!(x.value().to_bits(), y.value().to_bits());
                }
            }
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => prop_assert!(false, "diverged: {:?} vs {:?}", a, b),
        }
    }

    /// Failures classify the reach the same way the workspace limits do.
    #[test]
    fn prop_failure_matches_limits(dims in leg_dimensions(), target in any_target()) {
        let limits = ReachLimits::from_dimensions(&dims);

        match solve_ik(target, dims) {
            Ok(_) => prop_assert!(is_reachable(target, dims)),
            Err(UnreachableError::TooFar { reach, max_reach }) => {
                prop_assert!(reach > max_reach);
                prop_assert_eq!(max_reach, limits.max_reach);
            }
            Err(UnreachableError::TooClose { reach, min_reach }) => {
                prop_assert!(reach < min_reach || reach <= 0.0);
                prop_assert_eq!(min_reach, limits.min_reach);
            }
        }
    }

    /// Maximum reach never grows as the foot moves further from the femur height.
    #[test]
    fn prop_max_reach_monotonic(
        dims in leg_dimensions(),
        a in 0.0..1.0f64,
        b in 0.0..1.0f64,
    ) {
        let extension = dims.extension();
        let (near, far) = if a <= b { (a, b) } else { (b, a) };

        let near_reach = max_reach_at_height(-near * extension, dims).unwrap();
        let far_reach = max_reach_at_height(-far * extension, dims).unwrap();

        prop_assert!(near_reach >= far_reach);
        prop_assert!(far_reach >= dims.coxa_length);
    }

    /// Projected targets are reachable and keep their coxa bearing.
    #[test]
    fn prop_clamp_to_workspace(dims in leg_dimensions(), target in any_target()) {
        // Random targets never land exactly on the femur joint.
        let projected = clamp_to_workspace(target, dims);
        prop_assert!(projected.is_ok(), "{:?}", projected);
        let projected = projected.unwrap();
        let limits = ReachLimits::from_dimensions(&dims);

        let horizontal = (projected.x * projected.x + projected.y * projected.y).sqrt()
            - dims.coxa_length;
        let reach = (horizontal * horizontal + projected.z * projected.z).sqrt();

        prop_assert!(reach <= limits.max_reach + 1e-9);
        prop_assert!(reach >= limits.min_reach - 1e-9);

        if is_reachable(target, dims) {
            prop_assert_eq!(projected, target);
        }
    }
}
