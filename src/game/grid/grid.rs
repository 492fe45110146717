//! Grid storage and layout generation.
//!
//! Fixed walls follow the even/even rule and never change. Breakable walls
//! are drawn independently per eligible cell on every (re)generation.

use rand::Rng;

use crate::config::GameConfig;
use crate::game::types::{Cell, Position};

/// Square grid of cells, indexed `cells[y][x]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Grid holding only floor and fixed walls.
    pub fn with_fixed_walls(size: usize) -> Self {
        let cells = (0..size)
            .map(|y| {
                (0..size)
                    .map(|x| {
                        if Position::new(x, y).is_fixed_wall() {
                            Cell::FixedWall
                        } else {
                            Cell::Floor
                        }
                    })
                    .collect()
            })
            .collect();
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// Cell at `pos`, or `None` out of bounds.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.y).and_then(|row| row.get(pos.x)).copied()
    }

    pub fn is_fixed_wall(&self, pos: Position) -> bool {
        self.cell(pos) == Some(Cell::FixedWall)
    }

    pub fn is_breakable_wall(&self, pos: Position) -> bool {
        self.cell(pos) == Some(Cell::BreakableWall)
    }

    /// Place a breakable wall on a floor cell. Returns false for any other cell.
    pub fn add_breakable_wall(&mut self, pos: Position) -> bool {
        match self.cells.get_mut(pos.y).and_then(|row| row.get_mut(pos.x)) {
            Some(cell @ Cell::Floor) => {
                *cell = Cell::BreakableWall;
                true
            }
            _ => false,
        }
    }

    /// Turn a breakable wall back into floor. Returns true if a wall was removed.
    pub fn break_wall(&mut self, pos: Position) -> bool {
        match self.cells.get_mut(pos.y).and_then(|row| row.get_mut(pos.x)) {
            Some(cell @ Cell::BreakableWall) => {
                *cell = Cell::Floor;
                true
            }
            _ => false,
        }
    }

    /// Drop every breakable wall, keeping the fixed layout.
    pub fn clear_breakable_walls(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            if *cell == Cell::BreakableWall {
                *cell = Cell::Floor;
            }
        }
    }

    /// All positions holding `kind`, row by row.
    pub fn positions_of(&self, kind: Cell) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter().enumerate().filter_map(move |(x, cell)| {
                    if *cell == kind {
                        Some(Position { x, y })
                    } else {
                        None
                    }
                })
            })
            .collect()
    }
}

/// Build a fresh layout: fixed walls plus a Bernoulli draw of breakable walls
/// over every non-fixed cell outside the safe zone and off the player spawn.
pub fn generate_layout(config: &GameConfig, rng: &mut impl Rng) -> Grid {
    let mut grid = Grid::with_fixed_walls(config.grid_size);
    scatter_breakable_walls(&mut grid, config, rng);
    grid
}

/// Redraw the breakable walls of an existing grid. Fixed walls are untouched.
pub fn scatter_breakable_walls(grid: &mut Grid, config: &GameConfig, rng: &mut impl Rng) {
    grid.clear_breakable_walls();
    for pos in grid.positions_of(Cell::Floor) {
        if config.in_safe_zone(pos) || pos == config.player_spawn {
            continue;
        }
        if rng.random_bool(config.breakable_wall_probability) {
            grid.add_breakable_wall(pos);
        }
    }
}
