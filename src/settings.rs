//! Session configuration
//!
//! One config covers both the desktop build and the mobile-aware build; the
//! mobile build just turns on orientation input.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_MAZE_DIMENSION;
use crate::error::ConfigError;
use crate::sim::MazeDimension;

/// Game session settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Accept device-orientation tilt (gamma/beta)
    pub enable_mobile_input: bool,
    /// Show the elapsed-time readout
    pub enable_timer_hud: bool,
    /// Maze half-size (grid is 2 * maze_dimension + 1)
    pub maze_dimension: u32,
    /// Fixed seed for reproducible mazes; random when absent
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            enable_mobile_input: false,
            enable_timer_hud: true,
            maze_dimension: DEFAULT_MAZE_DIMENSION,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Settings for the mobile-aware build
    pub fn mobile() -> Self {
        Self {
            enable_mobile_input: true,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<MazeDimension, ConfigError> {
        MazeDimension::new(self.maze_dimension)
    }
}
