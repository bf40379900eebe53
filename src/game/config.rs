use serde::{Deserialize, Serialize};

/// Configuration for the game, fixed at construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Number of tiles spawned when a game begins
    pub start_tiles: usize,
    /// Probability that a spawned tile is a 4 instead of a 2
    pub four_tile_probability: f64,
    /// Tile value that marks the game as won
    pub winning_value: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 4,
            start_tiles: 2,
            four_tile_probability: 0.1,
            winning_value: 2048,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(3)
    }
}
