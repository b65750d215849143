//! Kinematics module for hexapod-kinematics.
//!
//! Closed-form inverse and forward kinematics for a coxa/femur/tibia leg, plus
//! reachability and workspace queries. Every function here is pure: no state,
//! no allocation, safe to call from any thread or interrupt context.

mod forward;
mod inverse;
mod types;
mod workspace;

pub use forward::solve_fk;
pub use inverse::{solve_ik, solve_ik_clamped};
pub use types::{JointAngles, LegDimensions, Position3D};
pub use workspace::{clamp_to_workspace, is_reachable, max_reach_at_height, ReachLimits};
