//! Marble Maze entry point
//!
//! The browser build is driven from `web::MarbleMaze`; natively this prints a
//! maze and rolls the ball through it with a simple autopilot.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::collections::VecDeque;

    use glam::Vec2;
    use marble_maze::sim::{GameSession, SessionEvent, Tilt, tick};
    use marble_maze::{ConfigError, SessionConfig, tile_center};

    const FRAME_DT: f32 = 1.0 / 60.0;
    const MAX_FRAMES: u32 = 60 * 180;
    const WAYPOINT_REACHED: f32 = 0.3;

    /// `[dimension] [seed]`
    pub fn config_from_args() -> Result<SessionConfig, String> {
        let mut args = std::env::args().skip(1);
        let mut config = SessionConfig::default();
        if let Some(dim) = args.next() {
            config.maze_dimension = dim
                .parse()
                .map_err(|_| format!("invalid maze dimension: {dim}"))?;
        }
        if let Some(seed) = args.next() {
            config.seed = Some(seed.parse().map_err(|_| format!("invalid seed: {seed}"))?);
        }
        Ok(config)
    }

    /// Tile path from start to goal through non-wall tiles
    fn solve(session: &GameSession) -> Vec<(i32, i32)> {
        let size = session.grid.size();
        let mut prev: Vec<Option<(i32, i32)>> = vec![None; size * size];
        let mut queue = VecDeque::from([session.start]);
        prev[session.start.1 as usize * size + session.start.0 as usize] = Some(session.start);

        while let Some((i, j)) = queue.pop_front() {
            if (i, j) == session.goal {
                break;
            }
            for (di, dj) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
                let (ni, nj) = (i + di, j + dj);
                let open = session.grid.get(ni, nj).is_some_and(|t| !t.is_wall());
                let idx = nj as usize * size + ni as usize;
                if open && prev[idx].is_none() {
                    prev[idx] = Some((i, j));
                    queue.push_back((ni, nj));
                }
            }
        }

        let mut path = vec![session.goal];
        let mut cur = session.goal;
        while cur != session.start {
            match prev[cur.1 as usize * size + cur.0 as usize] {
                Some(p) => {
                    path.push(p);
                    cur = p;
                }
                None => return Vec::new(),
            }
        }
        path.reverse();
        path
    }

    pub fn run(config: SessionConfig) -> Result<(), ConfigError> {
        let mut session = GameSession::new(config)?;
        println!("{}", session.grid.to_ascii());

        let path = solve(&session);
        log::info!("Autopilot path: {} tiles", path.len());
        let size = session.grid.size();
        let mut waypoint = 0;

        for frame in 0..MAX_FRAMES {
            let Some(&(i, j)) = path.get(waypoint) else {
                break;
            };
            let target = Vec2::new(tile_center(i, size), tile_center(j, size));
            let ball = session.ball;
            let here = Vec2::new(ball.pos.x, ball.world_z());
            let offset = target - here;
            if offset.length() < WAYPOINT_REACHED && waypoint + 1 < path.len() {
                waypoint += 1;
            }

            // Steer toward the waypoint, braking against current velocity
            let steer = offset * 20.0 - ball.vel * 400.0;
            session.set_tilt(Tilt::new(steer.x, steer.y));
            tick(&mut session, FRAME_DT);

            for event in session.drain_events() {
                if let SessionEvent::GoalReached { elapsed_secs } = event {
                    println!("Goal reached in {elapsed_secs:.2}s ({} frames)", frame + 1);
                    return Ok(());
                }
            }
        }

        log::warn!(
            "Autopilot gave up after {:.1}s at ({:.2}, {:.2})",
            session.elapsed_secs,
            session.ball.pos.x,
            session.ball.world_z()
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Marble Maze (native) starting...");

    let config = match demo::config_from_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: marble-maze [dimension] [seed]");
            std::process::exit(2);
        }
    };

    if let Err(e) = demo::run(config) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::start, this is just to satisfy the compiler
}
