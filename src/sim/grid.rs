//! Tile grid and maze dimension
//!
//! The grid is `2 * dimension + 1` tiles on a side. Logical cell `(I, J)`
//! sits on tile `(2I + 1, 2J + 1)`; the tile between two neighbouring cells
//! is the wall that carving knocks out.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MAZE_DIMENSION, MAX_MAZE_DIMENSION, MIN_MAZE_DIMENSION};
use crate::error::ConfigError;

/// What occupies a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tile {
    #[default]
    Wall,
    Open,
    Start,
    Goal,
}

impl Tile {
    pub fn is_wall(self) -> bool {
        self == Tile::Wall
    }

    /// Numeric code handed to renderers (1 wall, 0 open, -1 start, -2 goal)
    pub fn code(self) -> i8 {
        match self {
            Tile::Wall => 1,
            Tile::Open => 0,
            Tile::Start => -1,
            Tile::Goal => -2,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Open => '.',
            Tile::Start => 'S',
            Tile::Goal => 'G',
        }
    }
}

/// Half-size of the maze, always within `MIN_MAZE_DIMENSION..=MAX_MAZE_DIMENSION`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MazeDimension(u32);

impl MazeDimension {
    pub fn new(dimension: u32) -> Result<Self, ConfigError> {
        if (MIN_MAZE_DIMENSION..=MAX_MAZE_DIMENSION).contains(&dimension) {
            Ok(Self(dimension))
        } else {
            Err(ConfigError::dimension(dimension as i64))
        }
    }

    /// Dimension shifted by `delta`, validated before anything is rebuilt
    pub fn offset(self, delta: i32) -> Result<Self, ConfigError> {
        let requested = self.0 as i64 + delta as i64;
        u32::try_from(requested)
            .map_err(|_| ConfigError::dimension(requested))
            .and_then(Self::new)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Number of logical cells along one side
    pub fn cells(self) -> usize {
        self.0 as usize
    }

    /// Number of tiles along one side
    pub fn grid_size(self) -> usize {
        2 * self.0 as usize + 1
    }
}

impl Default for MazeDimension {
    fn default() -> Self {
        Self(DEFAULT_MAZE_DIMENSION)
    }
}

impl TryFrom<u32> for MazeDimension {
    type Error = ConfigError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MazeDimension> for u32 {
    fn from(value: MazeDimension) -> Self {
        value.0
    }
}

/// Square tile grid, row-major by `(column i, row j)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Grid of `size * size` tiles, all walls
    pub fn filled(size: usize) -> Self {
        Self {
            size,
            tiles: vec![Tile::Wall; size * size],
        }
    }

    /// Parse rows of glyphs (`#`, `.`, `S`, `G`). Returns `None` if the rows
    /// are not square or contain an unknown glyph.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        let mut tiles = Vec::with_capacity(size * size);
        for row in rows {
            if row.chars().count() != size {
                return None;
            }
            for glyph in row.chars() {
                tiles.push(match glyph {
                    '#' => Tile::Wall,
                    '.' => Tile::Open,
                    'S' => Tile::Start,
                    'G' => Tile::Goal,
                    _ => return None,
                });
            }
        }
        Some(Self { size, tiles })
    }

    /// Side length in tiles (width == height)
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, i: i32, j: i32) -> Option<usize> {
        let i = usize::try_from(i).ok()?;
        let j = usize::try_from(j).ok()?;
        (i < self.size && j < self.size).then(|| j * self.size + i)
    }

    /// Tile at column `i`, row `j`; `None` outside the grid
    pub fn get(&self, i: i32, j: i32) -> Option<Tile> {
        self.index(i, j).map(|idx| self.tiles[idx])
    }

    /// Out-of-range lookups count as open space
    pub fn is_wall(&self, i: i32, j: i32) -> bool {
        self.get(i, j).is_some_and(Tile::is_wall)
    }

    /// Set a tile; writes outside the grid are ignored
    pub fn set(&mut self, i: usize, j: usize, tile: Tile) {
        if i < self.size && j < self.size {
            self.tiles[j * self.size + i] = tile;
        }
    }

    /// All tiles with their coordinates, column-fastest
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(idx, &tile)| (idx % self.size, idx / self.size, tile))
    }

    /// First tile of the given kind
    pub fn find(&self, kind: Tile) -> Option<(usize, usize)> {
        self.iter().find(|&(_, _, t)| t == kind).map(|(i, j, _)| (i, j))
    }

    pub fn count(&self, kind: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == kind).count()
    }

    /// Renderer codes in row-major order
    pub fn codes(&self) -> Vec<i8> {
        self.tiles.iter().map(|t| t.code()).collect()
    }

    /// ASCII picture, one row per line
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for row in self.tiles.chunks(self.size) {
            out.extend(row.iter().map(|t| t.glyph()));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_bounds() {
        assert!(MazeDimension::new(1).is_err());
        assert!(MazeDimension::new(2).is_ok());
        assert!(MazeDimension::new(11).is_ok());
        assert!(MazeDimension::new(12).is_err());
        assert_eq!(MazeDimension::default().grid_size(), 15);
    }

    #[test]
    fn test_dimension_offset() {
        let dim = MazeDimension::new(2).unwrap();
        assert!(dim.offset(-1).is_err());
        assert!(dim.offset(-5).is_err());
        assert_eq!(dim.offset(3).unwrap().get(), 5);

        let max = MazeDimension::new(11).unwrap();
        assert!(max.offset(1).is_err());
    }

    #[test]
    fn test_dimension_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<MazeDimension>("4").is_ok());
        assert!(serde_json::from_str::<MazeDimension>("40").is_err());
    }

    #[test]
    fn test_out_of_bounds_is_open() {
        let grid = Grid::filled(5);
        assert!(grid.is_wall(0, 0));
        assert!(!grid.is_wall(-1, 2));
        assert!(!grid.is_wall(2, 5));
        assert_eq!(grid.get(5, 0), None);
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(&["###", "#S#", "#G#"]).unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.get(1, 1), Some(Tile::Start));
        assert_eq!(grid.get(1, 2), Some(Tile::Goal));
        assert_eq!(grid.to_ascii(), "###\n#S#\n#G#\n");

        assert!(Grid::from_rows(&["##", "#"]).is_none());
        assert!(Grid::from_rows(&["#x", "##"]).is_none());
    }
}
