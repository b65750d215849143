//! Leg module for hexapod-kinematics.
//!
//! Configured legs with body-frame transforms and reach-policy-aware solving.

mod mounted;
mod registry;

pub use mounted::Leg;
pub use registry::LegRegistry;
