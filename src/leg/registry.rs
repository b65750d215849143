//! Leg registry for named leg lookup.

use heapless::{FnvIndexMap, String, Vec};

use crate::config::{HexapodConfig, MAX_LEGS};
use crate::error::{ConfigError, Error, Result};
use crate::kinematics::{JointAngles, Position3D};

use super::mounted::Leg;

/// Registry for named legs.
///
/// Legs keep their registration order, which is also the order
/// [`LegRegistry::solve_all`] expects targets in.
#[derive(Debug, Default)]
pub struct LegRegistry {
    legs: FnvIndexMap<String<32>, Leg, MAX_LEGS>,
}

impl LegRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            legs: FnvIndexMap::new(),
        }
    }

    /// Build every configured leg, in configuration order.
    ///
    /// # Errors
    ///
    /// Propagates [`Leg::from_config`] failures.
    pub fn from_config(config: &HexapodConfig) -> Result<Self> {
        let mut registry = Self::new();
        for name in config.leg_names() {
            registry.register(Leg::from_config(config, name)?)?;
        }
        Ok(registry)
    }

    /// Register a leg under its own name, replacing any leg with that name.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::RegistryFull` if the registry is full.
    pub fn register(&mut self, leg: Leg) -> Result<()> {
        let name =
            String::try_from(leg.name()).map_err(|_| Error::Config(ConfigError::NameTooLong))?;

        self.legs
            .insert(name, leg)
            .map_err(|_| Error::Config(ConfigError::RegistryFull))?;

        Ok(())
    }

    /// Get a leg by name.
    pub fn get(&self, name: &str) -> Option<&Leg> {
        let name_str = String::try_from(name).ok()?;
        self.legs.get(&name_str)
    }

    /// Get a leg by name, or a `LegNotFound` error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LegNotFound` if no leg has that name.
    pub fn get_or_error(&self, name: &str) -> Result<&Leg> {
        self.get(name).ok_or_else(|| {
            Error::Config(ConfigError::LegNotFound(
                String::try_from(name).unwrap_or_default(),
            ))
        })
    }

    /// Check if a leg exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove a leg by name.
    pub fn remove(&mut self, name: &str) -> Option<Leg> {
        let name_str = String::try_from(name).ok()?;
        self.legs.remove(&name_str)
    }

    /// Get the number of registered legs.
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Get an iterator over leg names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.legs.keys().map(|s| s.as_str())
    }

    /// Get an iterator over legs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Leg)> {
        self.legs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Solve one body-frame target per leg, in registration order.
    ///
    /// Stops at the first leg that cannot reach its target.
    ///
    /// # Errors
    ///
    /// - `ConfigError::TargetCountMismatch` unless exactly one target per leg is given
    /// - `Error::Unreachable` from the first failing leg
    pub fn solve_all(&self, targets: &[Position3D]) -> Result<Vec<JointAngles, MAX_LEGS>> {
        if targets.len() != self.legs.len() {
            return Err(Error::Config(ConfigError::TargetCountMismatch {
                expected: self.legs.len(),
                got: targets.len(),
            }));
        }

        let mut solved = Vec::new();
        for (leg, target) in self.legs.values().zip(targets) {
            solved
                .push(leg.solve_body(*target)?)
                .map_err(|_| Error::Config(ConfigError::RegistryFull))?;
        }
        Ok(solved)
    }

    /// Body-frame standing position of every leg, in registration order.
    pub fn stance(&self) -> Vec<Position3D, MAX_LEGS> {
        self.legs.values().map(Leg::stance_position).collect()
    }
}
