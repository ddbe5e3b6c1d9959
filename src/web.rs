//! Browser bindings
//!
//! The page owns the canvas, the three.js/WebGPU scene and the DOM event
//! listeners; it forwards input here and reads back board and frame data.

use wasm_bindgen::prelude::*;

use crate::hud::HudSnapshot;
use crate::platform::{command_for_key, orientation_tilt, pointer_tilt};
use crate::renderer::{
    CameraRig, FrameView, LightingRig, Palette, board_instances, board_rotation,
};
use crate::settings::SessionConfig;
use crate::sim::{GameSession, SessionEvent, tick};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Marble Maze starting...");
}

/// Game handle held by the page
#[wasm_bindgen]
pub struct MarbleMaze {
    session: GameSession,
    maze_dirty: bool,
    goal_reached: bool,
}

#[wasm_bindgen]
impl MarbleMaze {
    /// Create a game from an optional JSON `SessionConfig`
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<MarbleMaze, JsError> {
        let mut config = match config_json {
            Some(json) => SessionConfig::from_json(&json)?,
            None => SessionConfig::default(),
        };
        if config.seed.is_none() {
            config.seed = Some(js_sys::Date::now() as u64);
        }
        let mut game = Self {
            session: GameSession::new(config)?,
            maze_dirty: false,
            goal_reached: false,
        };
        game.drain_events();
        Ok(game)
    }

    /// Advance one frame
    pub fn tick(&mut self, dt: f32) {
        tick(&mut self.session, dt);
        self.drain_events();
    }

    fn drain_events(&mut self) {
        for event in self.session.drain_events() {
            match event {
                SessionEvent::MazeRebuilt { .. } => self.maze_dirty = true,
                SessionEvent::GoalReached { .. } => self.goal_reached = true,
            }
        }
    }

    pub fn pointer_tilt(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.session.set_tilt(pointer_tilt(x, y, width, height));
    }

    pub fn orientation_tilt(&mut self, gamma: f32, beta: f32) {
        self.session.set_orientation_tilt(orientation_tilt(gamma, beta));
    }

    /// Handle a `KeyboardEvent.key`; returns whether it was bound
    pub fn key(&mut self, key: &str) -> bool {
        let Some(command) = command_for_key(key) else {
            return false;
        };
        if let Err(e) = self.session.apply(command) {
            log::warn!("{e}");
        }
        self.drain_events();
        true
    }

    /// Tiles per side
    pub fn grid_size(&self) -> usize {
        self.session.grid.size()
    }

    /// Row-major tile codes (1 wall, 0 open, -1 start, -2 goal)
    pub fn tiles(&self) -> Vec<i8> {
        self.session.grid.codes()
    }

    /// Packed `TileInstance` buffer for the board
    pub fn instance_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&board_instances(&self.session.grid)).to_vec()
    }

    /// True once after each maze rebuild
    pub fn take_maze_dirty(&mut self) -> bool {
        std::mem::take(&mut self.maze_dirty)
    }

    /// True once after the goal is reached
    pub fn take_goal_reached(&mut self) -> bool {
        std::mem::take(&mut self.goal_reached)
    }

    pub fn ball_position(&self) -> Vec<f32> {
        self.session.ball.world_position().to_array().to_vec()
    }

    /// Board Euler rotation in radians (x, y, z)
    pub fn board_rotation(&self) -> Vec<f32> {
        board_rotation(self.session.tilt).to_array().to_vec()
    }

    /// `CameraRig` as JSON
    pub fn camera(&self) -> Result<String, JsError> {
        let rig = CameraRig::for_mode(self.session.camera_mode, self.session.ball.world_position());
        Ok(serde_json::to_string(&rig)?)
    }

    /// `LightingRig` as JSON
    pub fn lighting(&self) -> Result<String, JsError> {
        let rig = LightingRig::new(self.session.lighting_mode, self.session.ball.world_position());
        Ok(serde_json::to_string(&rig)?)
    }

    /// Tile, ball and background colors as JSON; `tiles` is indexed by
    /// the instance `kind` code
    pub fn palette(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&Palette::default())?)
    }

    /// Ball, board tilt, camera and lighting as one JSON object
    pub fn frame_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&FrameView::capture(&self.session))?)
    }

    /// Write timer and objective text into `#hud-timer` / `#hud-objective`
    pub fn update_hud(&self) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let hud = HudSnapshot::capture(&self.session);

        if let Some(el) = document.get_element_by_id("hud-timer") {
            match hud.timer_text() {
                Some(text) => {
                    el.set_text_content(Some(&text));
                    let _ = el.set_attribute("class", "hud-item");
                }
                None => {
                    let _ = el.set_attribute("class", "hud-item hidden");
                }
            }
        }

        if let Some(el) = document.get_element_by_id("hud-objective") {
            el.set_text_content(Some(&hud.objective.to_string()));
        }
    }
}
