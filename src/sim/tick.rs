//! Per-frame physics tick
//!
//! One tick per display frame. Motion is in world units per tick; `dt` only
//! drives the run timer.

use glam::Vec2;

use super::collision::{Axis, resolve_axis};
use super::state::{GameSession, SessionEvent, SessionPhase};
use crate::consts::MAX_SPEED;
use crate::world_to_tile;

/// Advance the session by one tick
pub fn tick(session: &mut GameSession, dt: f32) {
    if session.phase == SessionPhase::Paused {
        return;
    }

    let grid = &session.grid;
    let ball = &mut session.ball;

    // Last tick's acceleration feeds this tick's velocity
    ball.vel = (ball.vel + ball.accel).clamp(Vec2::splat(-MAX_SPEED), Vec2::splat(MAX_SPEED));
    ball.accel = session.tilt.acceleration();

    // X first, using the current Z lane
    let x = resolve_axis(
        grid,
        Axis::X,
        ball.world_z(),
        ball.pos.x,
        ball.pos.x + ball.vel.x,
        ball.vel.x,
    );
    ball.pos.x = x.coord;
    ball.vel.x = x.velocity;

    // Then Z, using the column X just settled in
    let world_z = ball.world_z();
    let z = resolve_axis(
        grid,
        Axis::Z,
        ball.pos.x,
        world_z,
        world_z + ball.vel.y,
        ball.vel.y,
    );
    ball.pos.y = -z.coord;
    ball.vel.y = z.velocity;

    if session.phase == SessionPhase::Idle && session.ball.vel != Vec2::ZERO {
        session.phase = SessionPhase::Running;
        log::debug!("Run started");
    }

    if session.phase == SessionPhase::Running {
        session.elapsed_secs += dt;
    }

    check_goal(session);
}

fn check_goal(session: &mut GameSession) {
    if session.phase == SessionPhase::Won {
        return;
    }
    let n = session.grid.size();
    let tile = (
        world_to_tile(session.ball.pos.x, n),
        world_to_tile(session.ball.world_z(), n),
    );
    if tile == session.goal {
        session.phase = SessionPhase::Won;
        let elapsed_secs = session.elapsed_secs;
        session.push_event(SessionEvent::GoalReached { elapsed_secs });
        log::info!("Goal reached in {:.2}s", elapsed_secs);
    }
}
