//! Game rules: player capture, detonation effects and scoring.

use std::collections::BTreeSet;

use log::{debug, info};

use crate::game::entities::blast_set;
use crate::game::state::GameState;
use crate::game::types::{BombId, Explosion, ExplosionId, Phase, Position};

/// What a single detonation did to the world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetonationReport {
    pub bomb: BombId,
    pub explosion: ExplosionId,
    pub cells: BTreeSet<Position>,
    pub walls_destroyed: usize,
    pub enemies_destroyed: usize,
    pub player_hit: bool,
}

/// End the game with the player caught.
pub fn catch_player(game_state: &mut GameState, cause: &str) {
    if game_state.phase == Phase::GameOver {
        return;
    }
    game_state.player.is_alive = false;
    game_state.phase = Phase::GameOver;
    info!(
        "[Rules] Player caught by {} at {}, final score {}",
        cause, game_state.player.pos, game_state.score
    );
}

/// Game over if any enemy shares the player's cell.
/// Returns true if the player was caught by this check.
pub fn check_enemy_contact(game_state: &mut GameState) -> bool {
    if game_state.phase != Phase::Playing {
        return false;
    }
    let player_pos = game_state.player.pos;
    if game_state.enemies.iter().any(|e| e.pos == player_pos) {
        catch_player(game_state, "an enemy");
        return true;
    }
    false
}

/// Detonate an active bomb against the current world.
///
/// The bomb is removed, the blast set computed, and then in order: the player
/// is caught if inside it, every breakable wall and enemy inside it is
/// destroyed and scored. Other bombs inside the blast are left in place.
/// Returns `None` if no bomb with that id is active.
pub fn detonate(game_state: &mut GameState, bomb_id: BombId) -> Option<DetonationReport> {
    let index = game_state.bombs.iter().position(|b| b.id == bomb_id)?;
    let bomb = game_state.bombs.remove(index);

    let cells = blast_set(&game_state.grid, bomb.pos, game_state.config.bomb_range);

    let player_hit = cells.contains(&game_state.player.pos);
    if player_hit {
        catch_player(game_state, "an explosion");
    }

    let walls_destroyed = cells
        .iter()
        .filter(|pos| game_state.grid.break_wall(**pos))
        .count();

    let enemies_before = game_state.enemies.len();
    game_state.enemies.retain(|e| !cells.contains(&e.pos));
    let enemies_destroyed = enemies_before - game_state.enemies.len();

    game_state.score += walls_destroyed as u64 * game_state.config.wall_points
        + enemies_destroyed as u64 * game_state.config.enemy_points;

    let explosion = game_state.allocate_explosion_id();
    game_state.explosion = Some(Explosion {
        id: explosion,
        cells: cells.iter().copied().collect(),
    });

    debug!(
        "[Rules] Bomb {:?} at {} exploded: {} cells, {} walls, {} enemies, score {}",
        bomb.id,
        bomb.pos,
        cells.len(),
        walls_destroyed,
        enemies_destroyed,
        game_state.score
    );

    Some(DetonationReport {
        bomb: bomb.id,
        explosion,
        cells,
        walls_destroyed,
        enemies_destroyed,
        player_hit,
    })
}
