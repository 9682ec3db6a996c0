use std::path::Path;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_fixed_dt() -> f64 {
    1.0 / 60.0
}
const fn default_gravity() -> [f32; 3] {
    [0.0, -9.82, 0.0]
}
const fn default_friction() -> f32 {
    0.0
}

// ---------------------------------------------------------------------------
// Broadphase
// ---------------------------------------------------------------------------

/// Broadphase algorithm selection, fixed at world creation.
///
/// Rapier ships a single broadphase family (multi-layer sweep-and-prune),
/// so the enum currently carries one variant. Keeping the config field
/// explicit means scene files keep working if alternatives appear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Broadphase {
    #[default]
    SweepAndPrune,
}

// ---------------------------------------------------------------------------
// WorldConfig
// ---------------------------------------------------------------------------

/// Simulation world configuration.
///
/// Everything here is read once when the physics world is created and never
/// mutated afterwards: gravity, broadphase strategy, the fixed timestep, and
/// the default contact friction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
pub struct WorldConfig {
    /// Fixed physics timestep in seconds (default: 1/60).
    #[serde(default = "default_fixed_dt")]
    pub fixed_dt: f64,

    /// Gravity vector [x, y, z] in m/s^2 (default: [0, -9.82, 0]).
    #[serde(default = "default_gravity")]
    pub gravity: [f32; 3],

    /// Broadphase strategy (default: sweep-and-prune).
    #[serde(default)]
    pub broadphase: Broadphase,

    /// Friction applied to bodies without an explicit material (default: 0).
    #[serde(default = "default_friction")]
    pub default_friction: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            fixed_dt: default_fixed_dt(),
            gravity: default_gravity(),
            broadphase: Broadphase::default(),
            default_friction: default_friction(),
        }
    }
}

impl WorldConfig {
    /// Load a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on IO failure, parse failure, or invalid
    /// field values.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Parse a configuration from a TOML string and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on parse failure or invalid field values.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values for consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `fixed_dt` is not positive or
    /// `default_friction` is negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fixed_dt <= 0.0 {
            return Err(ConfigError::InvalidFixedDt(self.fixed_dt));
        }
        if self.default_friction < 0.0 {
            return Err(ConfigError::NegativeFriction(self.default_friction));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
