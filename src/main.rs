//! Main entry point for the terminal demo.
//!
//! Starts a game session actor, attaches a terminal view to it, and turns
//! stdin lines into player commands.

use actix::Actor;
use log::{error, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use blast_grid::config::GameConfig;
use blast_grid::game::types::Direction;
use blast_grid::server::game_session::GameSession;
use blast_grid::server::game_session::messages::{ClientAction, ProcessClientMessage, Subscribe};

use demo::view::TerminalView;

mod demo;

/// Set to `json` to print snapshots as JSON lines instead of a grid.
const VIEW_ENV_VAR: &str = "BLAST_GRID_VIEW";

fn parse_action(input: &str) -> Option<ClientAction> {
    match input {
        "w" => Some(ClientAction::Move(Direction::Up)),
        "s" => Some(ClientAction::Move(Direction::Down)),
        "a" => Some(ClientAction::Move(Direction::Left)),
        "d" => Some(ClientAction::Move(Direction::Right)),
        "b" | "" => Some(ClientAction::PlaceBomb),
        "r" => Some(ClientAction::Reset),
        _ => None,
    }
}

#[actix::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable.
    env_logger::init();

    let config = GameConfig::from_env();
    let session = GameSession::new(config)
        .map_err(std::io::Error::other)?
        .start();

    let json = std::env::var(VIEW_ENV_VAR).is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let view = TerminalView { json }.start();
    session.do_send(Subscribe(view.recipient()));

    println!("w/a/s/d + Enter to move, b or empty line for a bomb, r to restart, q to quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input == "q" {
            break;
        }
        let Some(action) = parse_action(input) else {
            warn!("Unknown command: {:?}", input);
            continue;
        };
        match session.send(ProcessClientMessage { action }).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => error!("Command {:?} rejected: {}", action, e),
            Err(e) => {
                error!("Game session unavailable: {}", e);
                break;
            }
        }
    }

    Ok(())
}
