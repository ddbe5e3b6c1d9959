//! Ambient light and the spotlight that follows the ball

use glam::Vec3;
use serde::Serialize;

use crate::consts::*;
use crate::sim::LightingMode;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LightingRig {
    pub ambient_intensity: f32,
    pub spot_intensity: f32,
    pub spot_position: Vec3,
    pub spot_target: Vec3,
    /// Cone half-angle in radians
    pub spot_angle: f32,
    pub spot_penumbra: f32,
}

impl LightingRig {
    pub fn new(mode: LightingMode, ball: Vec3) -> Self {
        let (ambient_intensity, spot_intensity) = match mode {
            LightingMode::Spotlight => (AMBIENT_INTENSITY_FOCUSED, SPOTLIGHT_INTENSITY_FOCUSED),
            LightingMode::Ambient => (AMBIENT_INTENSITY_AMBIENT, SPOTLIGHT_INTENSITY_AMBIENT),
        };
        Self {
            ambient_intensity,
            spot_intensity,
            spot_position: Vec3::new(ball.x, BALL_RADIUS + SPOTLIGHT_HEIGHT_OFFSET, ball.z),
            spot_target: Vec3::new(ball.x, 0.0, ball.z),
            spot_angle: SPOTLIGHT_ANGLE_DEG.to_radians(),
            spot_penumbra: SPOTLIGHT_PENUMBRA,
        }
    }
}
