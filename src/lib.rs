//! # hexapod-kinematics
//!
//! Closed-form inverse and forward kinematics for 3-DOF (coxa, femur, tibia)
//! robot legs, with TOML-driven hexapod configuration.
//!
//! ## Features
//!
//! - **Analytical IK**: Law-of-cosines solution, no iteration
//! - **Servo-ready output**: Joint angles in degrees, clamped to 0-180
//! - **Typed failures**: Unreachable targets report whether they are too far or too close
//! - **Workspace queries**: Reachability and maximum reach at a given height
//! - **Configuration-driven**: Define leg geometry and mounting in TOML files
//! - **no_std compatible**: Core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hexapod_kinematics::{solve_ik, solve_fk, LegDimensions, Position3D};
//!
//! let dims = LegDimensions::new(20.0, 60.0, 80.0);
//! let angles = solve_ik(Position3D::new(100.0, 0.0, -40.0), dims)?;
//! let foot = solve_fk(angles, dims);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod error;
pub mod kinematics;
pub mod leg;

// Re-exports for ergonomic API
pub use config::{validate_config, HexapodConfig, LegConfig, ReachPolicy, ServoRange};
pub use error::{ConfigError, DomainError, Error, Result, UnreachableError};
pub use kinematics::{
    clamp_to_workspace, is_reachable, max_reach_at_height, solve_fk, solve_ik, solve_ik_clamped,
    JointAngles, LegDimensions, Position3D, ReachLimits,
};
pub use leg::{Leg, LegRegistry};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::Degrees;
