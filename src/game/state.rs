use std::collections::HashMap;

use super::grid::Grid;
use super::tile::{Position, Tile};

/// Complete game state for one game in progress
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: Grid,
    pub score: u32,
    /// No legal move remains
    pub over: bool,
    /// A merge reached the winning value; never reset except by restart
    pub won: bool,
    /// The player chose to keep playing after winning
    pub keep_playing: bool,
    /// Merge target position -> the two tiles consumed last turn.
    /// For rendering only; replaced on every accepted move.
    pub merge_sources: HashMap<Position, [Tile; 2]>,
}

impl GameState {
    /// Create a fresh state around an already-seeded grid
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            score: 0,
            over: false,
            won: false,
            keep_playing: false,
            merge_sources: HashMap::new(),
        }
    }

    /// True when the game no longer accepts moves
    pub fn is_terminated(&self) -> bool {
        self.over || (self.won && !self.keep_playing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_playing() {
        let state = GameState::new(Grid::new(4));
        assert_eq!(state.score, 0);
        assert!(!state.over);
        assert!(!state.won);
        assert!(!state.is_terminated());
    }

    #[test]
    fn test_termination_rules() {
        let mut state = GameState::new(Grid::new(4));

        state.won = true;
        assert!(state.is_terminated());

        state.keep_playing = true;
        assert!(!state.is_terminated());

        state.over = true;
        assert!(state.is_terminated());
    }
}
