//! Configuration module for hexapod-kinematics.
//!
//! Provides types for loading and validating leg geometry from TOML files
//! (with `std` feature) or pre-parsed data.

mod leg;
mod limits;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use leg::{BodyConfig, LegConfig};
pub use limits::{ReachPolicy, ServoRange};
pub use system::{HexapodConfig, MAX_LEGS};
pub use validation::{validate_config, validate_dimensions};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Degrees, UnitExt};
