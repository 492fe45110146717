/// Game configuration constants.
///
/// This module defines the main gameplay parameters such as grid size,
/// timer durations, blast range and scoring, plus the runtime [`GameConfig`]
/// built from them.
use std::time::Duration;

use log::warn;

use crate::game::error::ConfigError;
use crate::game::types::Position;

/// Width and height of the square grid, in cells.
pub const GRID_SIZE: usize = 13;

/// Delay between placing a bomb and its detonation (milliseconds).
pub const BOMB_FUSE_MS: u64 = 3000;

/// How long a detonation stays visible (milliseconds).
pub const EXPLOSION_DURATION_MS: u64 = 500;

/// Period of the enemy movement tick (milliseconds).
pub const ENEMY_TICK_MS: u64 = 500;

/// Number of cells a blast travels in each cardinal direction.
pub const BOMB_RANGE: usize = 2;

/// Enemies spawned at init and on every reset.
pub const ENEMY_COUNT: usize = 4;

/// Chance for an eligible cell to hold a breakable wall.
pub const BREAKABLE_WALL_PROBABILITY: f64 = 0.3;

/// Cells with x <= SAFE_ZONE_EXTENT and y <= SAFE_ZONE_EXTENT stay clear at generation time.
pub const SAFE_ZONE_EXTENT: usize = 2;

/// Where the player (re)spawns.
pub const PLAYER_SPAWN: Position = Position { x: 1, y: 1 };

/// Points per breakable wall destroyed.
pub const WALL_POINTS: u64 = 10;

/// Points per enemy destroyed.
pub const ENEMY_POINTS: u64 = 50;

/// Rejection-sampling draws allowed per enemy before spawning gives up.
pub const ENEMY_SPAWN_ATTEMPTS: u32 = 1000;

/// Environment variable holding an optional RNG seed.
pub const SEED_ENV_VAR: &str = "BLAST_GRID_SEED";

/// Runtime parameters of a game session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub grid_size: usize,
    pub bomb_fuse: Duration,
    pub explosion_duration: Duration,
    pub enemy_tick: Duration,
    pub bomb_range: usize,
    pub enemy_count: usize,
    pub breakable_wall_probability: f64,
    pub safe_zone_extent: usize,
    pub player_spawn: Position,
    pub wall_points: u64,
    pub enemy_points: u64,
    pub enemy_spawn_attempts: u32,
    /// Seed for the session RNG. `None` draws one from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            bomb_fuse: Duration::from_millis(BOMB_FUSE_MS),
            explosion_duration: Duration::from_millis(EXPLOSION_DURATION_MS),
            enemy_tick: Duration::from_millis(ENEMY_TICK_MS),
            bomb_range: BOMB_RANGE,
            enemy_count: ENEMY_COUNT,
            breakable_wall_probability: BREAKABLE_WALL_PROBABILITY,
            safe_zone_extent: SAFE_ZONE_EXTENT,
            player_spawn: PLAYER_SPAWN,
            wall_points: WALL_POINTS,
            enemy_points: ENEMY_POINTS,
            enemy_spawn_attempts: ENEMY_SPAWN_ATTEMPTS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Default configuration, with the seed taken from `BLAST_GRID_SEED` when it parses.
    pub fn from_env() -> Self {
        Self::with_seed_var(std::env::var(SEED_ENV_VAR).ok().as_deref())
    }

    /// Default configuration seeded from the raw value of `BLAST_GRID_SEED`.
    /// A value that does not parse as `u64` is ignored.
    pub fn with_seed_var(raw: Option<&str>) -> Self {
        let seed = raw.and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(e) => {
                warn!("[Config] Ignoring {}={:?}: {}", SEED_ENV_VAR, raw, e);
                None
            }
        });
        Self {
            seed,
            ..Self::default()
        }
    }

    /// True when the cell lies in the spawn-protected corner.
    pub fn in_safe_zone(&self, pos: Position) -> bool {
        pos.x <= self.safe_zone_extent && pos.y <= self.safe_zone_extent
    }

    /// Check the parameters that would otherwise break generation or the timers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 3 {
            return Err(ConfigError::GridTooSmall { size: self.grid_size });
        }
        let spawn = self.player_spawn;
        if spawn.x >= self.grid_size || spawn.y >= self.grid_size {
            return Err(ConfigError::PlayerSpawnOutOfBounds { spawn, size: self.grid_size });
        }
        if spawn.is_fixed_wall() {
            return Err(ConfigError::PlayerSpawnOnFixedWall { spawn });
        }
        if !(0.0..=1.0).contains(&self.breakable_wall_probability) {
            return Err(ConfigError::InvalidWallProbability(self.breakable_wall_probability));
        }
        if self.enemy_tick.is_zero() {
            return Err(ConfigError::ZeroEnemyTick);
        }
        Ok(())
    }
}
