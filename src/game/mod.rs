//! Pure game simulation: layout, entities, rules and the world state.
//!
//! Nothing here knows about time; delayed effects are returned as
//! [`schedule::Scheduled`] values for the session actor to run.

pub mod error;
pub mod schedule;
pub mod snapshot;
pub mod state;
pub mod types;

pub mod entities;
pub mod grid;
pub mod systems;
