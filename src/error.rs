//! Error types for hexapod-kinematics.
//!
//! Provides unified error handling across the geometry core, configuration, and leg layer.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all hexapod-kinematics operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Target foot position cannot be reached by the femur/tibia chain
    Unreachable(UnreachableError),
    /// Workspace query outside its mathematical domain
    Domain(DomainError),
    /// Configuration parsing, validation or lookup error
    Config(ConfigError),
}

/// Inverse kinematics failures.
///
/// Both variants carry the reach distance measured from the femur joint so the
/// caller can decide how far to pull the target back.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UnreachableError {
    /// Requested reach exceeds `femur_length + tibia_length`
    TooFar {
        /// Distance from the femur joint to the target
        reach: f64,
        /// Fully extended femur + tibia length
        max_reach: f64,
    },
    /// Requested reach is below `|femur_length - tibia_length|`
    TooClose {
        /// Distance from the femur joint to the target
        reach: f64,
        /// Fully folded femur/tibia span
        min_reach: f64,
    },
}

/// Workspace query errors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DomainError {
    /// `|z_height|` exceeds the fully extended leg
    HeightExceedsExtension {
        /// Requested height
        z_height: f64,
        /// `femur_length + tibia_length`
        extension: f64,
    },
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Leg name not found in configuration or registry
    LegNotFound(heapless::String<32>),
    /// Segment length must be finite and > 0
    InvalidSegmentLength {
        /// Which segment (`coxa`, `femur` or `tibia`)
        segment: &'static str,
        /// Offending value
        value: f64,
    },
    /// Body radius, height or stance reach out of range
    InvalidBodyGeometry {
        /// Offending field
        field: &'static str,
        /// Offending value
        value: f64,
    },
    /// Mount angle must be finite
    InvalidMountAngle(f64),
    /// Leg name exceeds 32 characters
    NameTooLong,
    /// No room left in the leg registry
    RegistryFull,
    /// One target per registered leg is required
    TargetCountMismatch {
        /// Number of registered legs
        expected: usize,
        /// Number of targets supplied
        got: usize,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Unreachable(e) => write!(f, "Unreachable target: {}", e),
            Error::Domain(e) => write!(f, "Domain error: {}", e),
            Error::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl fmt::Display for UnreachableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnreachableError::TooFar { reach, max_reach } => {
                write!(f, "reach {} exceeds maximum {}", reach, max_reach)
            }
            UnreachableError::TooClose { reach, min_reach } => {
                write!(f, "reach {} is below minimum {}", reach, min_reach)
            }
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::HeightExceedsExtension { z_height, extension } => {
                write!(f, "height {} exceeds leg extension {}", z_height, extension)
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::LegNotFound(name) => write!(f, "Leg '{}' not found", name),
            ConfigError::InvalidSegmentLength { segment, value } => {
                write!(f, "Invalid {} length: {}. Must be > 0", segment, value)
            }
            ConfigError::InvalidBodyGeometry { field, value } => {
                write!(f, "Invalid body {}: {}", field, value)
            }
            ConfigError::InvalidMountAngle(v) => write!(f, "Invalid mount angle: {}", v),
            ConfigError::NameTooLong => write!(f, "Leg name too long (max 32 chars)"),
            ConfigError::RegistryFull => write!(f, "Leg registry is full"),
            ConfigError::TargetCountMismatch { expected, got } => {
                write!(f, "Expected {} targets, got {}", expected, got)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

// Conversion impls
impl From<UnreachableError> for Error {
    fn from(e: UnreachableError) -> Self {
        Error::Unreachable(e)
    }
}

impl From<DomainError> for Error {
    fn from(e: DomainError) -> Self {
        Error::Domain(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for UnreachableError {}

#[cfg(feature = "std")]
impl std::error::Error for DomainError {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
