use log::{debug, info};
use rand::Rng;

use crate::config::GameConfig;
use crate::game::entities::spawn_enemies;
use crate::game::error::ConfigError;
use crate::game::grid::{Grid, generate_layout, scatter_breakable_walls};
use crate::game::schedule::{Epoch, Scheduled, TimedEffect};
use crate::game::snapshot::Snapshot;
use crate::game::systems::{check_enemy_contact, detonate, move_enemies, move_player};
use crate::game::types::{Bomb, BombId, Direction, Enemy, Explosion, ExplosionId, Phase, Player};
use crate::server::game_session::messages::ClientAction;

/// Result of one mutation: whether observers should be told, and what must
/// fire later.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    pub changed: bool,
    pub scheduled: Option<Scheduled>,
}

impl Outcome {
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn changed() -> Self {
        Self {
            changed: true,
            scheduled: None,
        }
    }

    pub fn with_schedule(scheduled: Scheduled) -> Self {
        Self {
            changed: true,
            scheduled: Some(scheduled),
        }
    }
}

/// The whole world of one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub grid: Grid,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bombs: Vec<Bomb>,
    pub explosion: Option<Explosion>,
    pub score: u64,
    pub phase: Phase,
    pub epoch: Epoch,
    next_bomb_id: u64,
    next_explosion_id: u64,
}

impl GameState {
    /// Validate `config`, generate a layout and spawn the enemies.
    pub fn new(config: GameConfig, rng: &mut impl Rng) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = generate_layout(&config, rng);
        let enemies = spawn_enemies(&grid, &config, rng)?;

        Ok(GameState {
            player: Player::new(config.player_spawn),
            grid,
            enemies,
            bombs: Vec::new(),
            explosion: None,
            score: 0,
            phase: Phase::Playing,
            epoch: Epoch::default(),
            next_bomb_id: 0,
            next_explosion_id: 0,
            config,
        })
    }

    /// Start over with fresh breakable walls and enemies.
    ///
    /// Fixed walls are kept. The epoch advances so effects scheduled before
    /// the reset are ignored. On error the current world is left untouched.
    pub fn reset(&mut self, rng: &mut impl Rng) -> Result<(), ConfigError> {
        let mut grid = self.grid.clone();
        scatter_breakable_walls(&mut grid, &self.config, rng);
        let enemies = spawn_enemies(&grid, &self.config, rng)?;

        self.grid = grid;
        self.enemies = enemies;
        self.player = Player::new(self.config.player_spawn);
        self.bombs.clear();
        self.explosion = None;
        self.score = 0;
        self.phase = Phase::Playing;
        self.epoch = self.epoch.next();

        info!("[GameState] Reset, now in epoch {}", self.epoch.0);
        Ok(())
    }

    pub fn apply_player_action(
        &mut self,
        action: ClientAction,
        rng: &mut impl Rng,
    ) -> Result<Outcome, ConfigError> {
        match action {
            ClientAction::Move(direction) => Ok(self.move_player(direction)),
            ClientAction::PlaceBomb => Ok(self.place_bomb()),
            ClientAction::Reset => self.reset(rng).map(|()| Outcome::changed()),
        }
    }

    /// Step the player one cell. Blocked moves and moves after game over change nothing.
    pub fn move_player(&mut self, direction: Direction) -> Outcome {
        if self.phase != Phase::Playing {
            debug!("[GameState] Move {:?} ignored, game is over", direction);
            return Outcome::unchanged();
        }
        if !move_player(self, direction) {
            debug!("[GameState] Move {:?} from {} blocked", direction, self.player.pos);
            return Outcome::unchanged();
        }
        check_enemy_contact(self);
        Outcome::changed()
    }

    /// Drop a bomb on the player's cell and request its fuse.
    pub fn place_bomb(&mut self) -> Outcome {
        if self.phase != Phase::Playing {
            return Outcome::unchanged();
        }
        let pos = self.player.pos;
        if self.bombs.iter().any(|b| b.pos == pos) {
            debug!("[GameState] Bomb already at {}", pos);
            return Outcome::unchanged();
        }

        let id = BombId(self.next_bomb_id);
        self.next_bomb_id += 1;
        self.bombs.push(Bomb { id, pos });
        debug!("[GameState] Bomb {:?} placed at {}", id, pos);

        Outcome::with_schedule(Scheduled {
            delay: self.config.bomb_fuse,
            effect: TimedEffect::Detonate {
                bomb: id,
                epoch: self.epoch,
            },
        })
    }

    /// One enemy movement step, followed by the contact check.
    pub fn tick_enemies(&mut self, rng: &mut impl Rng) -> Outcome {
        if self.phase != Phase::Playing || self.enemies.is_empty() {
            return Outcome::unchanged();
        }
        let moved = move_enemies(self, rng);
        let caught = check_enemy_contact(self);
        if moved || caught {
            Outcome::changed()
        } else {
            Outcome::unchanged()
        }
    }

    /// Apply a timed effect whose delay has elapsed.
    ///
    /// Effects from an earlier epoch are dropped. A clear only removes the
    /// explosion it was scheduled for, never a newer one.
    pub fn fire(&mut self, effect: TimedEffect) -> Outcome {
        if effect.epoch() != self.epoch {
            debug!(
                "[GameState] Stale {:?} dropped (current epoch {})",
                effect, self.epoch.0
            );
            return Outcome::unchanged();
        }

        match effect {
            TimedEffect::Detonate { bomb, epoch } => match detonate(self, bomb) {
                Some(report) => Outcome::with_schedule(Scheduled {
                    delay: self.config.explosion_duration,
                    effect: TimedEffect::ClearExplosion {
                        explosion: report.explosion,
                        epoch,
                    },
                }),
                None => Outcome::unchanged(),
            },
            TimedEffect::ClearExplosion { explosion, .. } => {
                if self.explosion.as_ref().is_some_and(|e| e.id == explosion) {
                    self.explosion = None;
                    Outcome::changed()
                } else {
                    Outcome::unchanged()
                }
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    pub(crate) fn allocate_explosion_id(&mut self) -> ExplosionId {
        let id = ExplosionId(self.next_explosion_id);
        self.next_explosion_id += 1;
        id
    }
}
