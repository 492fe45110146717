//! Bomb entity logic.
//!
//! This module computes the blast set of a detonation by casting one ray per
//! cardinal direction from the bomb.

use std::collections::BTreeSet;

use crate::game::grid::Grid;
use crate::game::types::{Direction, Position};

/// Cells hit by a bomb at `origin`.
///
/// Each ray advances up to `range` cells. It stops before leaving the grid or
/// reaching a fixed wall, and stops after the first breakable wall, which is
/// itself part of the blast. The origin is always included.
pub fn blast_set(grid: &Grid, origin: Position, range: usize) -> BTreeSet<Position> {
    let mut cells = BTreeSet::from([origin]);

    for direction in Direction::ALL {
        let mut current = origin;
        for _ in 0..range {
            let Some(next) = current.neighbor(direction).filter(|p| grid.in_bounds(*p)) else {
                break;
            };
            if grid.is_fixed_wall(next) {
                break;
            }
            cells.insert(next);
            if grid.is_breakable_wall(next) {
                break;
            }
            current = next;
        }
    }

    cells
}
