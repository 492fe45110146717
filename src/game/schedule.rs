//! Delayed effects requested by the simulation.
//!
//! The core never owns a clock. When a mutation needs something to happen
//! later (a fuse, an explosion clearing) it hands back a [`Scheduled`] value;
//! whoever drives the game fires the [`TimedEffect`] once the delay elapses.
//! Every effect carries the epoch it was scheduled in, and firings from an
//! older epoch are ignored.

use std::time::Duration;

use crate::game::types::{BombId, ExplosionId};

/// Generation counter, bumped on every reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Epoch(pub u64);

impl Epoch {
    pub fn next(self) -> Self {
        Epoch(self.0 + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimedEffect {
    Detonate { bomb: BombId, epoch: Epoch },
    ClearExplosion { explosion: ExplosionId, epoch: Epoch },
}

impl TimedEffect {
    pub fn epoch(self) -> Epoch {
        match self {
            TimedEffect::Detonate { epoch, .. } | TimedEffect::ClearExplosion { epoch, .. } => epoch,
        }
    }
}

/// A timed effect and the delay after which it must fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub delay: Duration,
    pub effect: TimedEffect,
}
