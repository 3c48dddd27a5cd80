//! Core game logic for grid-snake
//!
//! Everything in here operates on plain values and has no I/O or rendering
//! dependencies, so the rules can be exercised directly from tests.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use state::{CollisionKind, GameState, GameStatus, Snake, Tile};
