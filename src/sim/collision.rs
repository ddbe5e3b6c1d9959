//! Axis-separated collision against maze walls
//!
//! Motion is resolved as two 1-D sweeps, X first and then Z. The Z sweep
//! looks up its column from the X coordinate the X sweep just produced, so
//! the order is part of the contract: swapping it changes how a ball moving
//! diagonally into a corner settles.
//!
//! Coordinates here are world coordinates. The ball stores Z negated, so
//! callers pass `-stored_z` in and negate the result back.

use super::grid::Grid;
use crate::consts::{BALL_RADIUS, BOUNCE_DAMPING, EPSILON};
use crate::{tile_center, world_to_tile};

/// Which world axis a sweep runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Z,
}

/// Outcome of a single-axis sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisResolution {
    /// Accepted coordinate along the swept axis
    pub coord: f32,
    /// Velocity along the swept axis after any bounce
    pub velocity: f32,
    /// Whether the sweep hit a wall
    pub hit: bool,
}

/// Resolve motion along one axis.
///
/// `current` is the ball's present coordinate on the swept axis, `other` its
/// coordinate on the perpendicular axis, and `proposed` where the velocity
/// would carry it. With zero velocity the ball stays at `current`.
pub fn resolve_axis(
    grid: &Grid,
    axis: Axis,
    other: f32,
    current: f32,
    proposed: f32,
    velocity: f32,
) -> AxisResolution {
    if velocity == 0.0 {
        return AxisResolution {
            coord: current,
            velocity,
            hit: false,
        };
    }

    let n = grid.size();
    let dir = velocity.signum();
    let edge_tile = world_to_tile(proposed + dir * BALL_RADIUS, n);
    let lane = world_to_tile(other, n);

    let blocked = match axis {
        Axis::X => grid.is_wall(edge_tile, lane),
        Axis::Z => grid.is_wall(lane, edge_tile),
    };

    if !blocked {
        return AxisResolution {
            coord: proposed,
            velocity,
            hit: false,
        };
    }

    let center = tile_center(edge_tile, n);
    let face = if dir > 0.0 { center - 1.0 } else { center + 1.0 };
    AxisResolution {
        coord: face - dir * (BALL_RADIUS + EPSILON),
        velocity: velocity * BOUNCE_DAMPING,
        hit: true,
    }
}
