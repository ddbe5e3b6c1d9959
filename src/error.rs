//! Configuration errors
//!
//! Nothing in the simulation fails at runtime; the only refusals happen when
//! a caller asks for a maze size or config the game cannot build.

use crate::consts::{MAX_MAZE_DIMENSION, MIN_MAZE_DIMENSION};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Maze dimension {requested} is outside {min}..={max}")]
    DimensionOutOfRange { requested: i64, min: u32, max: u32 },

    #[error("Grid side {0} is not 2d + 1 for a playable dimension d")]
    GridSize(usize),

    #[error("Invalid session config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

impl ConfigError {
    pub(crate) fn dimension(requested: i64) -> Self {
        ConfigError::DimensionOutOfRange {
            requested,
            min: MIN_MAZE_DIMENSION,
            max: MAX_MAZE_DIMENSION,
        }
    }
}
