//! Renderer-facing scene data
//!
//! The board is drawn by an external WebGPU (or three.js) front end; this
//! module produces what it consumes: tile instances, board tilt, camera and
//! lighting rigs.

pub mod board;
pub mod camera;
pub mod lighting;
pub mod vertex;

pub use board::{board_instances, board_rotation, tile_world_position};
pub use camera::CameraRig;
pub use lighting::LightingRig;
pub use vertex::{Palette, TileInstance};

use glam::Vec3;
use serde::Serialize;

use crate::sim::GameSession;

/// Everything that changes frame to frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameView {
    pub ball: Vec3,
    pub board_rotation: Vec3,
    pub camera: CameraRig,
    pub lighting: LightingRig,
}

impl FrameView {
    pub fn capture(session: &GameSession) -> Self {
        let ball = session.ball.world_position();
        Self {
            ball,
            board_rotation: board_rotation(session.tilt),
            camera: CameraRig::for_mode(session.camera_mode, ball),
            lighting: LightingRig::new(session.lighting_mode, ball),
        }
    }
}
