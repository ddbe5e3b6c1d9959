//! Marble Maze - a tilt-controlled marble maze
//!
//! Core modules:
//! - `sim`: Deterministic simulation (maze carving, axis-separated collision, session state)
//! - `renderer`: Board instances, camera and lighting data for a WebGPU/three.js front end
//! - `platform`: Pointer/orientation/keyboard input mapping
//! - `hud`: Timer and objective readout

pub mod error;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::ConfigError;
pub use settings::SessionConfig;

/// Game configuration constants
pub mod consts {
    /// Maze dimension bounds (grid side is 2 * dimension + 1)
    pub const MIN_MAZE_DIMENSION: u32 = 2;
    pub const MAX_MAZE_DIMENSION: u32 = 11;
    pub const DEFAULT_MAZE_DIMENSION: u32 = 7;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.4;
    /// Separation kept from a wall face after a snap
    pub const EPSILON: f32 = 0.001;
    /// Velocity multiplier on wall impact (invert, keep 20%)
    pub const BOUNCE_DAMPING: f32 = -0.2;
    /// Per-axis velocity cap (world units per tick)
    pub const MAX_SPEED: f32 = 0.2;
    /// Acceleration at 90 degrees of tilt (world units per tick²)
    pub const TILT_ACCELERATION: f32 = 0.01;
    /// Tilt clamp in degrees
    pub const MAX_TILT_DEG: f32 = 45.0;
    /// Debug keyboard nudge step
    pub const NUDGE_STEP: f32 = 0.1;

    /// Camera
    pub const CAMERA_NEAR: f32 = 10.0;
    pub const CAMERA_FAR: f32 = 75.0;
    pub const OVERVIEW_HEIGHT: f32 = 45.0;
    pub const OVERVIEW_FOV_DEG: f32 = 60.0;
    pub const FOLLOW_HEIGHT: f32 = 30.0;
    pub const FOLLOW_FOV_DEG: f32 = 30.0;

    /// Spotlight rig
    pub const SPOTLIGHT_HEIGHT_OFFSET: f32 = 30.0;
    pub const SPOTLIGHT_ANGLE_DEG: f32 = 7.0;
    pub const SPOTLIGHT_PENUMBRA: f32 = 0.8;
    pub const SPOTLIGHT_INTENSITY_FOCUSED: f32 = 512.0;
    pub const SPOTLIGHT_INTENSITY_AMBIENT: f32 = 1.5;
    pub const AMBIENT_INTENSITY_FOCUSED: f32 = 0.1;
    pub const AMBIENT_INTENSITY_AMBIENT: f32 = 0.7;
}

/// Map a world coordinate to a tile index on a grid of side `grid_dim`.
///
/// Tiles are 2 units wide and centred on `2 * i - grid_dim`, so this is the
/// inverse of [`tile_center`]. The result may fall outside the grid.
#[inline]
pub fn world_to_tile(coord: f32, grid_dim: usize) -> i32 {
    ((coord + grid_dim as f32 + 1.0) / 2.0).floor() as i32
}

/// World coordinate of the centre of tile `index`
#[inline]
pub fn tile_center(index: i32, grid_dim: usize) -> f32 {
    (2 * index - grid_dim as i32) as f32
}
