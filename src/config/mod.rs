/// Main configuration module.
///
/// Re-exports the game configuration constants and the runtime config.
pub mod game;

pub use game::GameConfig;
