//! twenty48 - A sliding-tile merge puzzle for the terminal
//!
//! This library provides:
//! - Core game rules (game module): grid, move resolution, turn lifecycle
//! - Keyboard input mapping (input module)
//! - TUI rendering (render module)
//! - Session metrics shown alongside the board (metrics module)
//! - The interactive play mode (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
