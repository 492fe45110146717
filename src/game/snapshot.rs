//! Read-only view of a world, handed to renderers.

use serde::{Deserialize, Serialize};

use crate::game::state::GameState;
use crate::game::types::{Bomb, Cell, Enemy, Phase, Position};

/// Everything a renderer needs, with every list in a stable order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid_size: usize,
    pub player: Position,
    pub player_alive: bool,
    pub enemies: Vec<Enemy>,
    pub bombs: Vec<Bomb>,
    pub explosion: Vec<Position>,
    pub fixed_walls: Vec<Position>,
    pub breakable_walls: Vec<Position>,
    pub score: u64,
    pub phase: Phase,
}

impl Snapshot {
    pub fn capture(game_state: &GameState) -> Self {
        let mut enemies = game_state.enemies.clone();
        enemies.sort_by_key(|e| e.id);
        let mut bombs = game_state.bombs.clone();
        bombs.sort_by_key(|b| b.id);

        Snapshot {
            grid_size: game_state.grid.size(),
            player: game_state.player.pos,
            player_alive: game_state.player.is_alive,
            enemies,
            bombs,
            explosion: game_state
                .explosion
                .as_ref()
                .map(|e| e.cells.clone())
                .unwrap_or_default(),
            fixed_walls: game_state.grid.positions_of(Cell::FixedWall),
            breakable_walls: game_state.grid.positions_of(Cell::BreakableWall),
            score: game_state.score,
            phase: game_state.phase,
        }
    }
}
