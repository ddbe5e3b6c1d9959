//! Board layout: where each tile sits in the world and how the board tilts

use glam::Vec3;

use super::vertex::TileInstance;
use crate::sim::{Grid, Tile, Tilt};

/// World coordinate of tile `index` on a board `tiles` wide.
///
/// For the odd board sizes the maze produces this is `2 * index - tiles`,
/// the same centre the collision code uses.
pub fn tile_world_position(index: usize, tiles: usize) -> f32 {
    (index as f32 - tiles as f32 / 2.0) * 2.0 + 1.0 - (tiles % 2) as f32
}

/// One instance per tile, columns outermost. Wall cubes are 2 units tall and
/// sit on the floor plane; floor quads lie at y = 0.
pub fn board_instances(grid: &Grid) -> Vec<TileInstance> {
    let n = grid.size();
    let mut instances = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let Some(tile) = grid.get(i as i32, j as i32) else {
                continue;
            };
            let y = if tile == Tile::Wall { 1.0 } else { 0.0 };
            instances.push(TileInstance::new(
                [tile_world_position(i, n), y, tile_world_position(j, n)],
                TileInstance::kind_code(tile),
            ));
        }
    }
    instances
}

/// Board rotation (radians, XYZ euler) for the current tilt. Cosmetic only.
pub fn board_rotation(tilt: Tilt) -> Vec3 {
    Vec3::new(tilt.z_deg.to_radians(), 0.0, -tilt.x_deg.to_radians())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile_center;

    #[test]
    fn test_world_position_matches_collision_centres() {
        for n in [5usize, 9, 23] {
            for i in 0..n {
                assert_eq!(tile_world_position(i, n), tile_center(i as i32, n));
            }
        }
    }

    #[test]
    fn test_board_instances() {
        let grid = Grid::from_rows(&["#####", "#S..#", "###.#", "#..G#", "#####"]).unwrap();
        let instances = board_instances(&grid);
        assert_eq!(instances.len(), 25);
        // Column-major: index 6 is (1, 1)
        assert_eq!(instances[6], TileInstance::new([-3.0, 0.0, -3.0], 2));
        assert_eq!(instances[0], TileInstance::new([-5.0, 1.0, -5.0], 0));
        let goal = instances.iter().find(|t| t.kind == 3).unwrap();
        assert_eq!(goal.position, [1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_board_rotation() {
        let rot = board_rotation(Tilt::new(45.0, -30.0));
        assert!((rot.x - (-30f32).to_radians()).abs() < 1e-6);
        assert!((rot.z - (-45f32).to_radians()).abs() < 1e-6);
        assert_eq!(rot.y, 0.0);
    }
}
