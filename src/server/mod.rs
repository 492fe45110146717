//! Session layer root module.
//!
//! This module hosts the game session actor, which owns a world and drives
//! its timers, along with the messages used to command and observe it.

pub mod game_session;
