//! Movement system.
//!
//! This module answers collision queries and moves the player and enemies on
//! the grid.

use rand::Rng;
use rand::seq::IteratorRandom;

use crate::game::state::GameState;
use crate::game::types::{Cell, Direction, Position};

/// Whether an actor may occupy `pos`.
///
/// Out-of-bounds cells, walls of either kind and bomb cells are blocked.
/// Enemy cells are only blocked when `check_enemies` is set.
pub fn can_move_to(game_state: &GameState, pos: Position, check_enemies: bool) -> bool {
    if game_state.grid.cell(pos) != Some(Cell::Floor) {
        return false;
    }
    if game_state.bombs.iter().any(|b| b.pos == pos) {
        return false;
    }
    if check_enemies && game_state.enemies.iter().any(|e| e.pos == pos) {
        return false;
    }
    true
}

/// The cell one step from `from`, if it can be occupied.
pub fn step_target(
    game_state: &GameState,
    from: Position,
    direction: Direction,
    check_enemies: bool,
) -> Option<Position> {
    from.neighbor(direction)
        .filter(|pos| can_move_to(game_state, *pos, check_enemies))
}

/// Move the player one cell in `direction`.
/// Returns true if the player actually moved.
pub fn move_player(game_state: &mut GameState, direction: Direction) -> bool {
    // Enemy cells are enterable; contact is resolved by the rules afterwards.
    match step_target(game_state, game_state.player.pos, direction, false) {
        Some(pos) => {
            game_state.player.pos = pos;
            true
        }
        None => false,
    }
}

/// Move every enemy to a uniformly chosen open neighbor, if it has one.
/// Returns true if any enemy moved.
pub fn move_enemies(game_state: &mut GameState, rng: &mut impl Rng) -> bool {
    let mut moved = false;
    for index in 0..game_state.enemies.len() {
        let from = game_state.enemies[index].pos;
        let target = Direction::ALL
            .iter()
            .filter_map(|direction| step_target(game_state, from, *direction, false))
            .choose(rng);
        if let Some(pos) = target {
            game_state.enemies[index].pos = pos;
            moved = true;
        }
    }
    moved
}
