use actix::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::error::ConfigError;
use crate::game::snapshot::Snapshot;
use crate::game::types::Direction;

/// A player intent coming from input handling.
#[derive(Message)]
#[rtype(result = "Result<(), ConfigError>")]
pub struct ProcessClientMessage {
    pub action: ClientAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientAction {
    Move(Direction),
    PlaceBomb,
    Reset,
}

/// Pushed to subscribers after every change to the world.
#[derive(Message, Clone, Serialize, Deserialize, Debug)]
#[rtype(result = "()")]
pub struct GameStateUpdate {
    pub game_id: Uuid,
    pub snapshot: Snapshot,
}

#[derive(Message)]
#[rtype(result = "Snapshot")]
pub struct GetSnapshot;

/// Register a recipient for [`GameStateUpdate`]s. It receives the current
/// state right away.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Subscribe(pub Recipient<GameStateUpdate>);
