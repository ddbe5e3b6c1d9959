//! Randomized depth-first maze carving
//!
//! Walks the `dimension x dimension` cell lattice from cell (0, 0), knocking
//! out the wall tile between the current cell and a randomly chosen
//! unvisited neighbour, and backtracking along a stack at dead ends. The
//! result is a spanning tree over the cells: a perfect maze.
//!
//! A direction is drawn uniformly from all four each attempt; a draw that
//! points off the lattice or at a visited cell is simply discarded and
//! redrawn.
//!
//! Backtracking only pops while the stack holds more than one entry, so the
//! bottom entry, cell (0, 0), is never returned to. Every other cell is still
//! reached because the lattice minus one corner stays connected.

use rand::Rng;

use super::grid::{Grid, MazeDimension, Tile};

/// Carve direction over the cell lattice. `Up` decreases the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Cell offset as (column, row)
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

/// Source of carve directions
pub trait DirectionSource {
    fn next_direction(&mut self) -> Direction;
}

/// Uniform directions drawn from any `rand` generator
#[derive(Debug)]
pub struct RngDirections<R>(pub R);

impl<R: Rng> DirectionSource for RngDirections<R> {
    fn next_direction(&mut self) -> Direction {
        Direction::ALL[self.0.random_range(0..Direction::ALL.len())]
    }
}

type Cell = (usize, usize);

/// Carve bookkeeping, logged at debug level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarveStats {
    /// Successful carves (one per cell after the first)
    pub carves: usize,
    /// Draws that pointed at a visited or missing neighbour
    pub rejected_draws: usize,
    /// Stack pops while backing out of dead ends
    pub backtracks: usize,
}

struct Carver {
    cells: usize,
    visited: Vec<bool>,
}

impl Carver {
    fn visited(&self, (i, j): Cell) -> bool {
        self.visited[j * self.cells + i]
    }

    fn visit(&mut self, (i, j): Cell) {
        self.visited[j * self.cells + i] = true;
    }

    fn neighbour(&self, (i, j): Cell, dir: Direction) -> Option<Cell> {
        let (di, dj) = dir.delta();
        let ni = usize::try_from(i as i32 + di).ok()?;
        let nj = usize::try_from(j as i32 + dj).ok()?;
        (ni < self.cells && nj < self.cells).then_some((ni, nj))
    }

    fn is_dead_end(&self, cell: Cell) -> bool {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.neighbour(cell, dir))
            .all(|n| self.visited(n))
    }

    fn has_unvisited(&self) -> bool {
        self.visited.iter().any(|v| !v)
    }
}

fn open_cell(grid: &mut Grid, (i, j): Cell) {
    grid.set(2 * i + 1, 2 * j + 1, Tile::Open);
}

/// Generate a maze, drawing directions from `rng`
pub fn generate<R: Rng>(dimension: MazeDimension, rng: &mut R) -> Grid {
    generate_with(dimension, &mut RngDirections(rng)).0
}

/// Generate a maze from an arbitrary direction source
pub fn generate_with<D: DirectionSource>(
    dimension: MazeDimension,
    directions: &mut D,
) -> (Grid, CarveStats) {
    let cells = dimension.cells();
    let size = dimension.grid_size();
    let mut grid = Grid::filled(size);
    let mut carver = Carver {
        cells,
        visited: vec![false; cells * cells],
    };
    let mut stats = CarveStats::default();
    let mut stack: Vec<Cell> = Vec::with_capacity(cells * cells);
    let mut current: Cell = (0, 0);

    while carver.has_unvisited() {
        while !carver.is_dead_end(current) {
            let dir = directions.next_direction();
            let Some(next) = carver
                .neighbour(current, dir)
                .filter(|&n| !carver.visited(n))
            else {
                stats.rejected_draws += 1;
                continue;
            };

            carver.visit(current);
            open_cell(&mut grid, current);
            // Wall tile between the two cell centres
            grid.set(current.0 + next.0 + 1, current.1 + next.1 + 1, Tile::Open);
            stack.push(current);
            current = next;
            carver.visit(current);
            open_cell(&mut grid, current);
            stats.carves += 1;
        }

        while carver.is_dead_end(current) && stack.len() > 1 {
            if let Some(cell) = stack.pop() {
                current = cell;
                stats.backtracks += 1;
            }
        }
    }

    grid.set(1, 1, Tile::Start);
    grid.set(size - 2, size - 2, Tile::Goal);

    log::debug!(
        "Carved {}x{} maze: {} carves, {} rejected draws, {} backtracks",
        cells,
        cells,
        stats.carves,
        stats.rejected_draws,
        stats.backtracks
    );

    (grid, stats)
}
