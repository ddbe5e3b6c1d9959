//! Camera framing for the two camera modes

use glam::{Mat4, Vec3};
use serde::Serialize;

use crate::consts::*;
use crate::sim::CameraMode;

/// Camera placement handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
}

impl CameraRig {
    /// Overview looks straight down on the whole board; Follow hovers above
    /// the ball. `ball` is the ball's world position.
    pub fn for_mode(mode: CameraMode, ball: Vec3) -> Self {
        match mode {
            CameraMode::Overview => Self {
                // Nudged off the vertical so look_at has a usable up vector
                eye: Vec3::new(0.0, OVERVIEW_HEIGHT, 0.01),
                target: Vec3::ZERO,
                fov_deg: OVERVIEW_FOV_DEG,
                near: CAMERA_NEAR,
                far: CAMERA_FAR,
            },
            CameraMode::Follow => Self {
                eye: Vec3::new(ball.x, FOLLOW_HEIGHT, ball.z + 0.01),
                target: Vec3::new(ball.x, BALL_RADIUS, ball.z),
                fov_deg: FOLLOW_FOV_DEG,
                near: CAMERA_NEAR,
                far: CAMERA_FAR,
            },
        }
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(self.fov_deg.to_radians(), aspect, self.near, self.far);
        let view = Mat4::look_at_rh(self.eye, self.target, Vec3::Y);
        proj * view
    }
}
