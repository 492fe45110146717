//! Game entities module.
//!
//! This module organizes enemy spawning and bomb blast logic.

pub mod bomb;
pub mod enemy;

pub use bomb::*;
pub use enemy::*;
