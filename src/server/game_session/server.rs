//! Game session actor.
//!
//! Owns the world of one game and serializes everything that mutates it:
//! player commands, the periodic enemy tick, and the one-shot fuse and
//! explosion-clear timers. Each handler runs to completion before the next
//! message or timer is processed.

use actix::prelude::*;
use log::{debug, error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;

use crate::config::GameConfig;
use crate::game::error::ConfigError;
use crate::game::schedule::Scheduled;
use crate::game::state::{GameState, Outcome};
use crate::game::types::Phase;
use crate::server::game_session::messages::{
    GameStateUpdate, GetSnapshot, ProcessClientMessage, Subscribe,
};

pub struct GameSession {
    pub game_id: Uuid,
    game_state: GameState,
    rng: StdRng,
    subscribers: Vec<Recipient<GameStateUpdate>>,
    enemy_timer: Option<SpawnHandle>,
}

impl GameSession {
    /// Build the world for `config`. The RNG is seeded from `config.seed`
    /// when present.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let game_state = GameState::new(config, &mut rng)?;

        Ok(Self {
            game_id: Uuid::new_v4(),
            game_state,
            rng,
            subscribers: Vec::new(),
            enemy_timer: None,
        })
    }

    fn send_state(&mut self) {
        self.subscribers.retain(|recipient| recipient.connected());
        let update = GameStateUpdate {
            game_id: self.game_id,
            snapshot: self.game_state.snapshot(),
        };
        debug!(
            "[GameSession] Broadcast state: game_id={} score={} phase={:?} subscribers={}",
            self.game_id,
            update.snapshot.score,
            update.snapshot.phase,
            self.subscribers.len()
        );
        for recipient in &self.subscribers {
            recipient.do_send(update.clone());
        }
    }

    /// Run the enemy tick only while there is a game to play and enemies to move.
    fn sync_enemy_ticker(&mut self, ctx: &mut Context<Self>) {
        let should_tick =
            self.game_state.phase == Phase::Playing && !self.game_state.enemies.is_empty();

        match (should_tick, self.enemy_timer.is_some()) {
            (true, false) => {
                let period = self.game_state.config.enemy_tick;
                let handle = ctx.run_interval(period, |act, ctx| {
                    let outcome = act.game_state.tick_enemies(&mut act.rng);
                    act.settle(outcome, ctx);
                });
                self.enemy_timer = Some(handle);
                debug!("[GameSession] Enemy ticker started");
            }
            (false, true) => {
                if let Some(handle) = self.enemy_timer.take() {
                    ctx.cancel_future(handle);
                }
                debug!("[GameSession] Enemy ticker stopped");
            }
            _ => {}
        }
    }

    /// Arm the requested timer, then notify subscribers if anything changed.
    fn settle(&mut self, outcome: Outcome, ctx: &mut Context<Self>) {
        if let Some(scheduled) = outcome.scheduled {
            self.schedule(scheduled, ctx);
        }
        if outcome.changed {
            self.sync_enemy_ticker(ctx);
            self.send_state();
        }
    }

    fn schedule(&mut self, scheduled: Scheduled, ctx: &mut Context<Self>) {
        ctx.run_later(scheduled.delay, move |act, ctx| {
            let outcome = act.game_state.fire(scheduled.effect);
            act.settle(outcome, ctx);
        });
    }
}

impl Actor for GameSession {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(
            "[GameSession] Game {} started on a {}x{} grid with {} enemies",
            self.game_id,
            self.game_state.grid.size(),
            self.game_state.grid.size(),
            self.game_state.enemies.len()
        );
        self.sync_enemy_ticker(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        info!(
            "[GameSession] Game {} stopped with score {}",
            self.game_id, self.game_state.score
        );
    }
}

impl Handler<ProcessClientMessage> for GameSession {
    type Result = Result<(), ConfigError>;

    fn handle(&mut self, msg: ProcessClientMessage, ctx: &mut Context<Self>) -> Self::Result {
        let outcome = self
            .game_state
            .apply_player_action(msg.action, &mut self.rng)
            .inspect_err(|e| error!("[GameSession] {:?} failed: {}", msg.action, e))?;
        self.settle(outcome, ctx);
        Ok(())
    }
}

impl Handler<GetSnapshot> for GameSession {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.game_state.snapshot())
    }
}

impl Handler<Subscribe> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: Subscribe, _: &mut Context<Self>) -> Self::Result {
        msg.0.do_send(GameStateUpdate {
            game_id: self.game_id,
            snapshot: self.game_state.snapshot(),
        });
        self.subscribers.push(msg.0);
    }
}
