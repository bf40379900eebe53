use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{Action, GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let mut engine = match seed {
            Some(seed) => GameEngine::from_seed(config, seed),
            None => GameEngine::new(config),
        };
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // The game is turn-based, so frames are drawn when the state
        // changes; the clock tick just keeps the time display moving.
        let mut clock_timer = interval(Duration::from_secs(1));

        self.draw(terminal)?;

        loop {
            let mut needs_redraw = false;

            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        needs_redraw = self.handle_event(event);
                    }
                }

                // Refresh the session clock
                _ = clock_timer.tick() => {
                    needs_redraw = true;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
            if needs_redraw {
                self.draw(terminal)?;
            }
        }

        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.metrics.update();
        terminal
            .draw(|frame| {
                self.renderer.render(frame, &self.state, &self.metrics);
            })
            .context("Failed to draw frame")?;

        // Merge highlights belong to the draw right after the move only;
        // clock-tick redraws must not keep flashing them.
        self.state.merge_sources.clear();
        Ok(())
    }

    /// Apply one terminal event, returning whether the screen needs redrawing
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match self.input_handler.handle_key_event(key) {
                    KeyAction::Game(action) => self.apply_action(action),
                    KeyAction::Quit => {
                        self.should_quit = true;
                        false
                    }
                    KeyAction::None => false,
                }
            }
            Event::Resize(_, _) => true,
            _ => false,
        }
    }

    fn apply_action(&mut self, action: Action) -> bool {
        if action == Action::Restart {
            // A game that ended in game-over was recorded when the over
            // flag flipped; only a still-live game is recorded here.
            if !self.state.over {
                self.metrics.on_game_end(self.state.score);
            }
            self.metrics.on_game_start();
        }

        let was_over = self.state.over;
        let result = self.engine.step(&mut self.state, action);

        if self.state.over && !was_over {
            self.metrics.on_game_end(self.state.score);
        }

        result.changed
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Grid};
    use ratatui::backend::TestBackend;

    /// One slide away from a full, pair-free board
    fn nearly_dead_grid() -> Grid {
        Grid::from_rows(&[
            vec![0, 16, 2, 16],
            vec![2, 8, 32, 8],
            vec![16, 64, 2, 64],
            vec![8, 16, 8, 16],
        ])
    }

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default(), Some(1));
        assert!(!mode.state.is_terminated());
        assert_eq!(mode.state.score, 0);
        assert_eq!(mode.state.grid.tiles().count(), 2);
    }

    #[test]
    fn test_restart_records_abandoned_game() {
        let mut mode = HumanMode::new(GameConfig::default(), Some(1));
        mode.state.score = 10;

        let changed = mode.apply_action(Action::Restart);

        assert!(changed);
        assert_eq!(mode.state.score, 0);
        assert!(!mode.state.over);
        assert_eq!(mode.metrics.high_score, 10);
        assert_eq!(mode.metrics.games_played, 1);
    }

    #[test]
    fn test_finished_game_counted_once_across_restart() {
        let mut mode = HumanMode::new(GameConfig::default(), Some(1));
        mode.state.grid = nearly_dead_grid();
        mode.state.score = 40;

        // The slide fills the board and ends the game
        mode.apply_action(Action::Move(Direction::Up));
        assert!(mode.state.over);
        assert_eq!(mode.metrics.games_played, 1);
        assert_eq!(mode.metrics.high_score, 40);

        mode.apply_action(Action::Restart);

        assert_eq!(mode.metrics.games_played, 1);
        assert_eq!(mode.metrics.high_score, 40);
        assert_eq!(mode.state.score, 0);
        assert!(!mode.state.over);
    }

    #[test]
    fn test_rejected_move_needs_no_redraw() {
        let mut mode = HumanMode::new(GameConfig::default(), Some(1));
        mode.state.over = true;

        let changed = mode.apply_action(Action::Move(Direction::Left));
        assert!(!changed);
    }

    #[test]
    fn test_merge_highlight_lasts_one_draw() {
        let mut mode = HumanMode::new(GameConfig::default(), Some(1));
        mode.state.grid = Grid::from_rows(&[
            vec![2, 2, 0, 0],
            vec![0; 4],
            vec![0; 4],
            vec![0; 4],
        ]);

        mode.apply_action(Action::Move(Direction::Left));
        assert!(!mode.state.merge_sources.is_empty());

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        mode.draw(&mut terminal).unwrap();
        assert!(mode.state.merge_sources.is_empty());
    }
}
