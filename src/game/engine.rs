use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::action::{Action, Direction};
use super::config::GameConfig;
use super::grid::Grid;
use super::resolver;
use super::state::GameState;
use super::tile::Tile;

/// Result of one step of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the state changed at all (gates re-rendering)
    pub changed: bool,
    /// Whether any tile changed position this step
    pub moved: bool,
    /// Score gained this step
    pub score_delta: u32,
    /// Whether the game is terminated after this step
    pub terminated: bool,
}

impl StepResult {
    fn rejected(terminated: bool) -> Self {
        Self {
            changed: false,
            moved: false,
            score_delta: 0,
            terminated,
        }
    }
}

/// The game engine that handles all game logic.
///
/// Generic over the random source so tile spawning is deterministic under
/// a seeded RNG in tests.
pub struct GameEngine<R: Rng = StdRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Create a new game engine with an entropy-seeded RNG
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a new game engine with a reproducible RNG
    pub fn from_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create a new game engine with the given configuration and RNG
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a new game: empty grid seeded with the configured start tiles
    pub fn reset(&mut self) -> GameState {
        let mut grid = Grid::new(self.config.grid_size);
        for _ in 0..self.config.start_tiles {
            self.spawn_random_tile(&mut grid);
        }
        GameState::new(grid)
    }

    /// Execute one action against the state
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        match action {
            Action::Move(direction) => self.step_move(state, direction),
            Action::Restart => {
                *state = self.reset();
                StepResult {
                    changed: true,
                    moved: false,
                    score_delta: 0,
                    terminated: false,
                }
            }
            Action::KeepPlaying => {
                state.keep_playing = true;
                StepResult {
                    changed: true,
                    moved: false,
                    score_delta: 0,
                    terminated: state.is_terminated(),
                }
            }
        }
    }

    fn step_move(&mut self, state: &mut GameState, direction: Direction) -> StepResult {
        if state.is_terminated() {
            return StepResult::rejected(true);
        }

        let outcome = resolver::resolve(&mut state.grid, direction, self.config.winning_value);

        if !outcome.moved {
            // A dead board is only discovered here when the state was built
            // externally; normal play flags it right after the spawn below.
            if !resolver::moves_available(&state.grid) {
                state.over = true;
                return StepResult {
                    changed: true,
                    moved: false,
                    score_delta: 0,
                    terminated: true,
                };
            }
            return StepResult::rejected(false);
        }

        state.score += outcome.score_delta;
        if outcome.reached_goal {
            state.won = true;
        }
        state.merge_sources = outcome.merge_sources;

        self.spawn_random_tile(&mut state.grid);
        if !resolver::moves_available(&state.grid) {
            state.over = true;
        }

        StepResult {
            changed: true,
            moved: true,
            score_delta: outcome.score_delta,
            terminated: state.is_terminated(),
        }
    }

    /// Place one random tile (2 or 4) on a uniformly random empty cell.
    /// Skipped silently when the grid is full.
    fn spawn_random_tile(&mut self, grid: &mut Grid) {
        let cells = grid.available_cells();
        if cells.is_empty() {
            return;
        }
        let pos = cells[self.rng.gen_range(0..cells.len())];
        let value = if self.rng.gen_bool(self.config.four_tile_probability) {
            4
        } else {
            2
        };
        grid.insert_tile(Tile::new(pos, value));
    }
}
