use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{GameConfig, GameEngine, GameState, GameStatus};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionMetrics;
use crate::render::Renderer;

/// Interactive play: owns the state and drives the tick/render loop
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: SessionMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    tick_interval: Duration,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let tick_interval = Duration::from_millis(config.tick_interval_ms);
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            tick_interval,
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

        let mut tick_timer = interval(self.tick_interval);

        // Render at 30 FPS independently of the game cadence
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick; a no-op once the game is over
                _ = tick_timer.tick() => {
                    if self.state.status == GameStatus::Running {
                        self.advance_game();
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.refresh_clock();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                // Applied immediately so the latest accepted press wins;
                // the engine enforces the reversal guard.
                KeyAction::Turn(direction) => {
                    self.engine.turn(&mut self.state, direction);
                }
                KeyAction::Restart => {
                    self.reset_game();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    /// Refresh the elapsed readout; frozen once the game is over so the
    /// game-over screen shows the time the run actually took.
    fn refresh_clock(&mut self) {
        if self.state.status == GameStatus::Running {
            self.metrics.update();
        }
    }

    fn advance_game(&mut self) {
        self.engine.tick(&mut self.state);

        if self.state.status == GameStatus::Over {
            self.metrics.on_game_over(self.state.score);
        }
    }

    fn reset_game(&mut self) {
        self.state = self.engine.reset();
        self.metrics.on_restart();
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
    use crate::game::Direction;

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default());
        assert_eq!(mode.state.status, GameStatus::Running);
        assert_eq!(mode.state.score, 0);
        assert_eq!(mode.state.snake.len(), 1);
    }

    #[test]
    fn test_restart_rebuilds_everything() {
        let mut mode = HumanMode::new(GameConfig::default());
        mode.state.score = 40;
        mode.state.status = GameStatus::Over;
        mode.state.snake.heading = Some(Direction::Left);

        mode.reset_game();

        assert_eq!(mode.state.score, 0);
        assert_eq!(mode.state.status, GameStatus::Running);
        assert_eq!(mode.state.snake.heading, None);
        assert_eq!(mode.state.snake.len(), 1);
    }

    #[test]
    fn test_clock_freezes_after_game_over() {
        let mut mode = HumanMode::new(GameConfig::default());

        std::thread::sleep(std::time::Duration::from_millis(20));
        mode.refresh_clock();
        let while_running = mode.metrics.elapsed;
        assert!(while_running.as_millis() >= 20);

        mode.state.status = GameStatus::Over;
        std::thread::sleep(std::time::Duration::from_millis(20));
        mode.refresh_clock();
        assert_eq!(mode.metrics.elapsed, while_running);
    }

    #[test]
    fn test_game_over_updates_session_metrics() {
        let mut mode = HumanMode::new(GameConfig::default());
        mode.state.score = 70;
        // No heading yet, so the first tick self-collides and ends the game.
        mode.advance_game();

        assert_eq!(mode.state.status, GameStatus::Over);
        assert_eq!(mode.metrics.high_score, 70);
        assert_eq!(mode.metrics.games_played, 1);
    }
}
