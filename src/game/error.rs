//! Errors raised while building or resetting a world.
//!
//! Gameplay itself has no error path: blocked moves and ignored commands are
//! reported through [`crate::game::state::Outcome`] instead.

use crate::game::types::Position;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid size {size} is too small (minimum is 3)")]
    GridTooSmall { size: usize },

    #[error("player spawn {spawn} lies outside a {size}x{size} grid")]
    PlayerSpawnOutOfBounds { spawn: Position, size: usize },

    #[error("player spawn {spawn} is a fixed wall")]
    PlayerSpawnOnFixedWall { spawn: Position },

    #[error("breakable wall probability {0} is outside [0, 1]")]
    InvalidWallProbability(f64),

    #[error("enemy tick period must be non-zero")]
    ZeroEnemyTick,

    #[error("could only place {spawned} of {requested} enemies after {attempts} attempts")]
    EnemySpawnExhausted {
        spawned: usize,
        requested: usize,
        attempts: u32,
    },
}
