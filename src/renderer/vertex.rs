//! Instance types for board rendering

use bytemuck::{Pod, Zeroable};
use serde::Serialize;

use crate::sim::Tile;

/// One board tile, drawn as an instanced cube (walls) or quad (floor)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct TileInstance {
    /// World-space centre of the tile's mesh
    pub position: [f32; 3],
    /// Tile kind code, see [`TileInstance::kind_code`]
    pub kind: u32,
}

impl TileInstance {
    pub const fn new(position: [f32; 3], kind: u32) -> Self {
        Self { position, kind }
    }

    pub fn kind_code(tile: Tile) -> u32 {
        match tile {
            Tile::Wall => 0,
            Tile::Open => 1,
            Tile::Start => 2,
            Tile::Goal => 3,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TileInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Uint32,
                },
            ],
        }
    }
}

/// Colors for board elements
pub mod colors {
    /// Navy tint over the checker texture
    pub const WALL: [f32; 4] = [0.0, 0.0, 0.5, 1.0];
    pub const FLOOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const START: [f32; 4] = [0.2, 0.8, 0.3, 1.0];
    pub const GOAL: [f32; 4] = [0.9, 0.2, 0.2, 1.0];
    pub const BALL: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.1, 0.1, 0.1, 1.0];
}

/// Color table handed to the front end. `tiles` is indexed by
/// [`TileInstance::kind_code`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Palette {
    pub tiles: [[f32; 4]; 4],
    pub ball: [f32; 4],
    pub background: [f32; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            tiles: [colors::WALL, colors::FLOOR, colors::START, colors::GOAL],
            ball: colors::BALL,
            background: colors::BACKGROUND,
        }
    }
}

impl Palette {
    pub fn tile(&self, tile: Tile) -> [f32; 4] {
        self.tiles[TileInstance::kind_code(tile) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_layout_matches_struct() {
        assert_eq!(std::mem::size_of::<TileInstance>(), 16);
        let layout = TileInstance::desc();
        assert_eq!(layout.array_stride, 16);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Instance);
        assert_eq!(layout.attributes[1].offset, 12);
    }

    #[test]
    fn test_cast_to_bytes() {
        let instances = [TileInstance::new([1.0, 0.0, -1.0], 3)];
        let bytes: &[u8] = bytemuck::cast_slice(&instances);
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[12..16], &3u32.to_ne_bytes());
    }

    #[test]
    fn test_palette_indexed_by_kind_code() {
        let palette = Palette::default();
        assert_eq!(palette.tile(Tile::Wall), colors::WALL);
        assert_eq!(palette.tile(Tile::Open), colors::FLOOR);
        assert_eq!(palette.tile(Tile::Start), colors::START);
        assert_eq!(palette.tile(Tile::Goal), colors::GOAL);

        let json = serde_json::to_value(palette).unwrap();
        let goal = TileInstance::kind_code(Tile::Goal) as usize;
        assert_eq!(json["tiles"].as_array().map(Vec::len), Some(4));
        assert_eq!(json["tiles"][goal], serde_json::to_value(colors::GOAL).unwrap());
        assert_eq!(json["ball"][0].as_f64(), Some(1.0));
    }
}
