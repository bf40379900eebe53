//! Core game logic for the sliding-tile merge puzzle
//!
//! This module contains all the game rules without any I/O or rendering
//! dependencies. The engine can be driven programmatically, which is also
//! how the tests exercise it.

pub mod action;
pub mod config;
pub mod engine;
pub mod grid;
pub mod resolver;
pub mod state;
pub mod tile;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, StepResult};
pub use grid::Grid;
pub use resolver::MoveOutcome;
pub use state::GameState;
pub use tile::{Position, Tile};
