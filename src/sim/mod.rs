//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock reads
//! - Seeded RNG only
//! - Fixed axis order in collision (X, then Z)
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod maze;
pub mod state;
pub mod tick;

pub use collision::{Axis, AxisResolution, resolve_axis};
pub use grid::{Grid, MazeDimension, Tile};
pub use maze::{CarveStats, Direction, DirectionSource, RngDirections, generate, generate_with};
pub use state::{
    Ball, CameraMode, Command, GameSession, LightingMode, Nudge, RngState, SessionEvent,
    SessionPhase, Tilt,
};
pub use tick::tick;
