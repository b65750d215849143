//! Unit types for physical quantities.
//!
//! Joint angles cross the actuator boundary in degrees; the geometry core works
//! in radians internally and converts at the edges.

use core::ops::{Add, Sub};

use serde::Deserialize;

/// Angle in degrees.
///
/// Used for joint angles, mount angles and servo ranges.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    /// Quarter turn, the servo centre.
    pub const RIGHT: Self = Self(90.0);
    /// Half turn.
    pub const STRAIGHT: Self = Self(180.0);

    /// Create a new Degrees value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to radians.
    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Create from radians.
    #[inline]
    pub fn from_radians(radians: f64) -> Self {
        Self(radians.to_degrees())
    }
}

impl Add for Degrees {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Degrees.
    fn degrees(self) -> Degrees;
}

impl UnitExt for f64 {
    #[inline]
    fn degrees(self) -> Degrees {
        Degrees(self)
    }
}
