//! Enemy entity logic.
//!
//! This module handles spawning the enemy batch by bounded rejection sampling.

use rand::Rng;

use crate::config::GameConfig;
use crate::game::error::ConfigError;
use crate::game::grid::Grid;
use crate::game::types::{Cell, Enemy, EnemyId, Position};

/// Spawn `config.enemy_count` enemies on uniformly drawn cells.
///
/// A draw is rejected when it falls in the safe zone, on any wall, on the
/// player spawn, or on an enemy already placed in this batch. Each enemy gets
/// at most `config.enemy_spawn_attempts` draws.
pub fn spawn_enemies(
    grid: &Grid,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> Result<Vec<Enemy>, ConfigError> {
    let size = grid.size();
    let requested = config.enemy_count;
    let mut enemies: Vec<Enemy> = Vec::with_capacity(requested);

    for index in 0..requested {
        let mut attempts = 0;
        let pos = loop {
            if attempts >= config.enemy_spawn_attempts {
                return Err(ConfigError::EnemySpawnExhausted {
                    spawned: enemies.len(),
                    requested,
                    attempts,
                });
            }
            attempts += 1;

            let candidate = Position::new(rng.random_range(0..size), rng.random_range(0..size));
            if is_spawn_cell(grid, config, &enemies, candidate) {
                break candidate;
            }
        };
        enemies.push(Enemy {
            id: EnemyId(index as u32),
            pos,
        });
    }

    Ok(enemies)
}

fn is_spawn_cell(grid: &Grid, config: &GameConfig, enemies: &[Enemy], pos: Position) -> bool {
    !config.in_safe_zone(pos)
        && pos != config.player_spawn
        && grid.cell(pos) == Some(Cell::Floor)
        && !enemies.iter().any(|e| e.pos == pos)
}
