//! Single-player bomb grid game engine.
//!
//! A player walks a maze of fixed and breakable walls, drops timed bombs whose
//! blasts travel along the four cardinal rays, and dodges enemies that wander
//! at random. The pure simulation lives in [`game`]; [`server`] wraps it in an
//! actor that serializes commands and timer firings.

pub mod config;
pub mod game;
pub mod server;
