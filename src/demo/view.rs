use actix::prelude::*;
use log::warn;

use blast_grid::server::game_session::messages::GameStateUpdate;

use super::render::render_grid;

/// Prints every state update it receives, as a text grid or as JSON lines.
pub struct TerminalView {
    pub json: bool,
}

impl Actor for TerminalView {
    type Context = Context<Self>;
}

impl Handler<GameStateUpdate> for TerminalView {
    type Result = ();

    fn handle(&mut self, msg: GameStateUpdate, _: &mut Self::Context) -> Self::Result {
        if self.json {
            match serde_json::to_string(&msg) {
                Ok(text) => println!("{text}"),
                Err(e) => warn!("[TerminalView] Failed to serialize game state: {}", e),
            }
        } else {
            println!("{}", render_grid(&msg.snapshot));
        }
    }
}
