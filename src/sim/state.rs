//! Session state and core simulation types
//!
//! A `GameSession` owns everything a tick mutates: the grid, the ball, the
//! tilt written by input, the run phase and the timer.

use glam::{Vec2, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::{Grid, MazeDimension, Tile};
use super::maze;
use crate::consts::*;
use crate::error::ConfigError;
use crate::settings::SessionConfig;
use crate::tile_center;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Maze built, ball at start, timer not yet running
    Idle,
    /// Ball rolling, timer running
    Running,
    /// Ticks are no-ops
    Paused,
    /// Goal reached, timer frozen
    Won,
}

/// Board tilt in degrees, clamped to ±MAX_TILT_DEG on both axes
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Tilt {
    pub x_deg: f32,
    pub z_deg: f32,
}

impl Tilt {
    pub fn new(x_deg: f32, z_deg: f32) -> Self {
        Self {
            x_deg: x_deg.clamp(-MAX_TILT_DEG, MAX_TILT_DEG),
            z_deg: z_deg.clamp(-MAX_TILT_DEG, MAX_TILT_DEG),
        }
    }

    /// Per-tick acceleration produced by this tilt
    pub fn acceleration(&self) -> Vec2 {
        Vec2::new(
            TILT_ACCELERATION * self.x_deg.to_radians().sin(),
            TILT_ACCELERATION * self.z_deg.to_radians().sin(),
        )
    }
}

/// The marble.
///
/// `pos.y` holds the stored Z coordinate, which is world Z negated.
/// Velocity and acceleration are in world axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Free-floating vertical offset (debug nudges only)
    pub y: f32,
    pub vel: Vec2,
    pub accel: Vec2,
}

impl Ball {
    /// Ball at rest on the centre of tile `(i, j)`
    pub fn on_tile(i: i32, j: i32, grid_size: usize) -> Self {
        Self {
            pos: Vec2::new(tile_center(i, grid_size), -tile_center(j, grid_size)),
            y: 0.0,
            vel: Vec2::ZERO,
            accel: Vec2::ZERO,
        }
    }

    pub fn world_z(&self) -> f32 {
        -self.pos.y
    }

    /// Centre of the ball in world space
    pub fn world_position(&self) -> Vec3 {
        Vec3::new(self.pos.x, BALL_RADIUS + self.y, self.world_z())
    }
}

/// Camera framing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraMode {
    #[default]
    Overview,
    Follow,
}

impl CameraMode {
    pub fn next(self) -> Self {
        match self {
            CameraMode::Overview => CameraMode::Follow,
            CameraMode::Follow => CameraMode::Overview,
        }
    }
}

/// Scene lighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LightingMode {
    /// Dark board, tight spotlight on the ball
    #[default]
    Spotlight,
    /// Lit board, weak spotlight
    Ambient,
}

impl LightingMode {
    pub fn toggled(self) -> Self {
        match self {
            LightingMode::Spotlight => LightingMode::Ambient,
            LightingMode::Ambient => LightingMode::Spotlight,
        }
    }
}

/// Debug nudge of the ball, bypassing collision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nudge {
    /// Stored Z +step
    Forward,
    /// Stored Z -step
    Back,
    Right,
    Left,
    Up,
    Down,
}

/// Discrete commands from input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    CycleCamera,
    /// Retry: ball back to start, timer cleared, same maze
    ResetRun,
    /// Fresh maze at the current size
    NewLevel,
    /// Grow or shrink the maze by this many cells per side
    ResizeMaze(i32),
    ToggleLighting,
    Nudge(Nudge),
}

/// Signals for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A new grid is in place; board geometry must be rebuilt
    MazeRebuilt { dimension: u32, level: u64 },
    /// Ball reached the goal tile
    GoalReached { elapsed_secs: f32 },
}

/// RNG state: every level is reproducible from the run seed
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub level: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, level: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed.wrapping_add(self.level))
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: SessionConfig,
    pub dimension: MazeDimension,
    pub grid: Grid,
    /// Start and goal tiles as (column, row)
    pub start: (i32, i32),
    pub goal: (i32, i32),
    pub ball: Ball,
    /// Written by input, read once per tick
    pub tilt: Tilt,
    pub phase: SessionPhase,
    /// Phase to return to when unpausing
    resume_phase: SessionPhase,
    /// Seconds spent Running this run
    pub elapsed_secs: f32,
    pub camera_mode: CameraMode,
    pub lighting_mode: LightingMode,
    pub rng_state: RngState,
    events: Vec<SessionEvent>,
}

impl GameSession {
    /// Build a session and its first maze
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        let dimension = config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let rng_state = RngState::new(seed);
        let grid = maze::generate(dimension, &mut rng_state.to_rng());
        log::info!(
            "Session started: {0}x{0} maze, seed {1}",
            dimension.get(),
            seed
        );
        Ok(Self::assemble(config, dimension, grid, rng_state))
    }

    /// Session over a prepared grid. The grid side must be `2d + 1` for a
    /// valid dimension `d`.
    pub fn with_grid(mut config: SessionConfig, grid: Grid) -> Result<Self, ConfigError> {
        let dimension = MazeDimension::new((grid.size().saturating_sub(1) / 2) as u32)
            .ok()
            .filter(|d| d.grid_size() == grid.size())
            .ok_or(ConfigError::GridSize(grid.size()))?;
        config.maze_dimension = dimension.get();
        let rng_state = RngState::new(config.seed.unwrap_or_default());
        Ok(Self::assemble(config, dimension, grid, rng_state))
    }

    fn assemble(
        config: SessionConfig,
        dimension: MazeDimension,
        grid: Grid,
        rng_state: RngState,
    ) -> Self {
        let start = locate(&grid, Tile::Start, (1, 1));
        let last = grid.size() as i32 - 2;
        let goal = locate(&grid, Tile::Goal, (last, last));
        let mut session = Self {
            config,
            dimension,
            ball: Ball::on_tile(start.0, start.1, grid.size()),
            grid,
            start,
            goal,
            tilt: Tilt::default(),
            phase: SessionPhase::Idle,
            resume_phase: SessionPhase::Idle,
            elapsed_secs: 0.0,
            camera_mode: CameraMode::default(),
            lighting_mode: LightingMode::default(),
            rng_state,
            events: Vec::new(),
        };
        session.push_rebuilt();
        session
    }

    fn push_rebuilt(&mut self) {
        self.events.push(SessionEvent::MazeRebuilt {
            dimension: self.dimension.get(),
            level: self.rng_state.level,
        });
    }

    pub(crate) fn push_event(&mut self, event: SessionEvent) {
        self.events.push(event);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_won(&self) -> bool {
        self.phase == SessionPhase::Won
    }

    pub fn set_tilt(&mut self, tilt: Tilt) {
        self.tilt = tilt;
    }

    /// Device-orientation tilt; ignored unless mobile input is enabled
    pub fn set_orientation_tilt(&mut self, tilt: Tilt) {
        if self.config.enable_mobile_input {
            self.tilt = tilt;
        }
    }

    /// Retry: same maze, ball back on the start tile, timer cleared
    pub fn reset_run(&mut self) {
        self.ball = Ball::on_tile(self.start.0, self.start.1, self.grid.size());
        self.phase = SessionPhase::Idle;
        self.resume_phase = SessionPhase::Idle;
        self.elapsed_secs = 0.0;
    }

    /// Fresh maze at the current dimension
    pub fn new_level(&mut self) {
        self.rng_state.level += 1;
        self.rebuild();
        log::info!(
            "New level {0}: {1}x{1} maze",
            self.rng_state.level,
            self.dimension.get()
        );
    }

    /// Grow or shrink the maze. An out-of-range size is refused and the
    /// current maze is kept.
    pub fn resize_maze(&mut self, delta: i32) -> Result<(), ConfigError> {
        let dimension = self.dimension.offset(delta).inspect_err(|e| {
            log::warn!("Resize refused: {e}");
        })?;
        self.dimension = dimension;
        self.config.maze_dimension = dimension.get();
        self.new_level();
        Ok(())
    }

    fn rebuild(&mut self) {
        self.grid = maze::generate(self.dimension, &mut self.rng_state.to_rng());
        self.start = locate(&self.grid, Tile::Start, (1, 1));
        let last = self.grid.size() as i32 - 2;
        self.goal = locate(&self.grid, Tile::Goal, (last, last));
        self.reset_run();
        self.push_rebuilt();
    }

    pub fn toggle_pause(&mut self) {
        match self.phase {
            SessionPhase::Idle | SessionPhase::Running => {
                self.resume_phase = self.phase;
                self.phase = SessionPhase::Paused;
                log::info!("Paused at {:.2}s", self.elapsed_secs);
            }
            SessionPhase::Paused => {
                self.phase = self.resume_phase;
                log::info!("Resumed");
            }
            SessionPhase::Won => {}
        }
    }

    pub fn nudge(&mut self, nudge: Nudge) {
        let ball = &mut self.ball;
        match nudge {
            Nudge::Forward => ball.pos.y += NUDGE_STEP,
            Nudge::Back => ball.pos.y -= NUDGE_STEP,
            Nudge::Right => ball.pos.x += NUDGE_STEP,
            Nudge::Left => ball.pos.x -= NUDGE_STEP,
            Nudge::Up => ball.y += NUDGE_STEP,
            Nudge::Down => ball.y -= NUDGE_STEP,
        }
    }

    /// Apply a discrete command. Only a refused resize returns an error.
    pub fn apply(&mut self, command: Command) -> Result<(), ConfigError> {
        match command {
            Command::TogglePause => self.toggle_pause(),
            Command::CycleCamera => {
                self.camera_mode = self.camera_mode.next();
                log::debug!("Camera: {:?}", self.camera_mode);
            }
            Command::ResetRun => {
                self.reset_run();
                log::info!("Run reset");
            }
            Command::NewLevel => self.new_level(),
            Command::ResizeMaze(delta) => self.resize_maze(delta)?,
            Command::ToggleLighting => {
                self.lighting_mode = self.lighting_mode.toggled();
                log::debug!("Lighting: {:?}", self.lighting_mode);
            }
            Command::Nudge(nudge) => self.nudge(nudge),
        }
        Ok(())
    }
}

fn locate(grid: &Grid, kind: Tile, fallback: (i32, i32)) -> (i32, i32) {
    grid.find(kind)
        .map(|(i, j)| (i as i32, j as i32))
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64, dimension: u32) -> GameSession {
        GameSession::new(SessionConfig {
            seed: Some(seed),
            maze_dimension: dimension,
            ..SessionConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_new_session_places_ball_on_start() {
        let session = seeded(1, 7);
        assert_eq!(session.phase, SessionPhase::Idle);
        assert_eq!(session.start, (1, 1));
        assert_eq!(session.goal, (13, 13));
        // Grid of 15: tile 1 centre is -13, stored Z is negated
        assert_eq!(session.ball.pos, Vec2::new(-13.0, 13.0));
        assert_eq!(session.ball.world_position(), Vec3::new(-13.0, BALL_RADIUS, -13.0));
    }

    #[test]
    fn test_new_session_rejects_bad_dimension() {
        let config = SessionConfig {
            maze_dimension: 1,
            ..SessionConfig::default()
        };
        assert!(GameSession::new(config).is_err());
    }

    #[test]
    fn test_tilt_clamps() {
        let tilt = Tilt::new(90.0, -60.0);
        assert_eq!(tilt, Tilt::new(45.0, -45.0));
        let accel = Tilt::new(90.0, 0.0).acceleration();
        assert!((accel.x - TILT_ACCELERATION * 45f32.to_radians().sin()).abs() < 1e-7);
        assert_eq!(accel.y, 0.0);
    }

    #[test]
    fn test_pause_toggle_remembers_phase() {
        let mut session = seeded(2, 3);
        session.phase = SessionPhase::Running;
        session.toggle_pause();
        assert_eq!(session.phase, SessionPhase::Paused);
        session.toggle_pause();
        assert_eq!(session.phase, SessionPhase::Running);

        session.phase = SessionPhase::Won;
        session.toggle_pause();
        assert_eq!(session.phase, SessionPhase::Won);
    }

    #[test]
    fn test_resize_out_of_range_keeps_maze() {
        let mut session = seeded(3, 11);
        let before = session.grid.clone();
        session.drain_events();

        assert!(session.apply(Command::ResizeMaze(1)).is_err());
        assert_eq!(session.grid, before);
        assert_eq!(session.dimension.get(), 11);
        assert!(session.drain_events().is_empty());

        session.apply(Command::ResizeMaze(-1)).unwrap();
        assert_eq!(session.dimension.get(), 10);
        assert_eq!(session.grid.size(), 21);
        assert_eq!(session.goal, (19, 19));
        assert_eq!(
            session.drain_events(),
            vec![SessionEvent::MazeRebuilt {
                dimension: 10,
                level: 1
            }]
        );
    }

    #[test]
    fn test_new_level_is_reproducible() {
        let mut a = seeded(77, 6);
        let mut b = seeded(77, 6);
        a.new_level();
        b.new_level();
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.rng_state.level, 1);
    }

    #[test]
    fn test_reset_run_restores_start() {
        let mut session = seeded(4, 4);
        session.ball.pos = Vec2::new(1.0, 2.0);
        session.ball.vel = Vec2::new(0.1, 0.1);
        session.ball.y = 0.3;
        session.phase = SessionPhase::Won;
        session.elapsed_secs = 12.0;
        let grid = session.grid.clone();

        session.apply(Command::ResetRun).unwrap();
        assert_eq!(session.ball, Ball::on_tile(1, 1, 9));
        assert_eq!(session.phase, SessionPhase::Idle);
        assert_eq!(session.elapsed_secs, 0.0);
        assert_eq!(session.grid, grid);
    }

    #[test]
    fn test_nudges_bypass_physics() {
        let mut session = seeded(5, 2);
        let start = session.ball.pos;
        session.apply(Command::Nudge(Nudge::Forward)).unwrap();
        session.apply(Command::Nudge(Nudge::Right)).unwrap();
        session.apply(Command::Nudge(Nudge::Up)).unwrap();
        assert!((session.ball.pos.y - (start.y + NUDGE_STEP)).abs() < 1e-6);
        assert!((session.ball.pos.x - (start.x + NUDGE_STEP)).abs() < 1e-6);
        assert!((session.ball.y - NUDGE_STEP).abs() < 1e-6);
        // Rendered height is the collision radius plus the nudge offset
        assert!((session.ball.world_position().y - (BALL_RADIUS + NUDGE_STEP)).abs() < 1e-6);
    }

    #[test]
    fn test_rendered_ball_touches_wall_it_bounced_off() {
        let grid = Grid::from_rows(&["#####", "#S..#", "###.#", "#..G#", "#####"]).unwrap();
        let mut session = GameSession::with_grid(SessionConfig::default(), grid).unwrap();
        // Roll west from start into the border wall, near face at x = -4
        session.ball.vel = Vec2::new(-0.2, 0.0);
        for _ in 0..20 {
            crate::sim::tick(&mut session, 1.0 / 60.0);
            if session.ball.vel.x > 0.0 {
                break;
            }
        }
        assert!(session.ball.vel.x > 0.0);
        let rendered = session.ball.world_position();
        assert!((rendered.x - (-4.0 + BALL_RADIUS + EPSILON)).abs() < 1e-5);
        assert_eq!(rendered.y, BALL_RADIUS);
    }

    #[test]
    fn test_camera_and_lighting_cycle() {
        let mut session = seeded(6, 2);
        session.apply(Command::CycleCamera).unwrap();
        assert_eq!(session.camera_mode, CameraMode::Follow);
        session.apply(Command::CycleCamera).unwrap();
        assert_eq!(session.camera_mode, CameraMode::Overview);
        session.apply(Command::ToggleLighting).unwrap();
        assert_eq!(session.lighting_mode, LightingMode::Ambient);
    }

    #[test]
    fn test_orientation_tilt_needs_mobile_input() {
        let mut session = seeded(8, 2);
        session.set_orientation_tilt(Tilt::new(10.0, 10.0));
        assert_eq!(session.tilt, Tilt::default());

        session.config.enable_mobile_input = true;
        session.set_orientation_tilt(Tilt::new(10.0, 10.0));
        assert_eq!(session.tilt, Tilt::new(10.0, 10.0));
    }

    #[test]
    fn test_with_grid_requires_odd_valid_size() {
        let grid = Grid::from_rows(&["#####", "#S..#", "###.#", "#..G#", "#####"]).unwrap();
        let session = GameSession::with_grid(SessionConfig::default(), grid).unwrap();
        assert_eq!(session.dimension.get(), 2);
        assert_eq!(session.goal, (3, 3));

        assert!(GameSession::with_grid(SessionConfig::default(), Grid::filled(3)).is_err());
        assert!(GameSession::with_grid(SessionConfig::default(), Grid::filled(6)).is_err());
    }
}
