//! grid-snake - a single-player snake game on a fixed square grid
//!
//! This library provides:
//! - Core game logic without any I/O or rendering dependencies (game module)
//! - TUI rendering (render module)
//! - Keyboard input mapping (input module)
//! - In-session statistics (metrics module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
