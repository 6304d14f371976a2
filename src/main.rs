//! Terminal runner (default binary).
//!
//! One thread, one loop: drain input, apply it, and once per frame advance
//! gravity and redraw. Nothing but frames is written while the terminal is in
//! raw mode; the session summary is printed after it is restored.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use twin_tetris::config::{Cli, Config};
use twin_tetris::core::{GameSnapshot, GameState};
use twin_tetris::input::drain_pending;
use twin_tetris::term::{FrameBuffer, FrameClock, GameView, TerminalRenderer, Viewport};

/// How long the game-over screen waits between input polls.
const GAME_OVER_POLL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExitReason {
    Quit,
    TopOut,
}

impl ExitReason {
    fn as_str(&self) -> &'static str {
        match self {
            ExitReason::Quit => "quit",
            ExitReason::TopOut => "top out",
        }
    }
}

/// Counters kept by the runner for the exit summary.
#[derive(Debug, Default)]
struct Tally {
    pieces: u32,
    rows_cleared: u32,
}

struct Session {
    game: GameState,
    view: GameView,
    clock: FrameClock,
    snap: GameSnapshot,
    fb: FrameBuffer,
    tally: Tally,
}

fn main() -> Result<()> {
    let config = Cli::parse().resolve();

    let mut term = TerminalRenderer::new();
    term.enter().context("entering raw terminal mode")?;

    let mut session = Session::new(config);
    let result = session.run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    let reason = result?;
    println!("{}", session.summary(&config, reason));
    Ok(())
}

impl Session {
    fn new(config: Config) -> Self {
        Self {
            game: GameState::new(config.variant, config.seed),
            view: GameView::default(),
            clock: FrameClock::new(config.fps),
            snap: GameSnapshot::default(),
            fb: FrameBuffer::new(0, 0),
            tally: Tally::default(),
        }
    }

    fn run(&mut self, term: &mut TerminalRenderer) -> Result<ExitReason> {
        self.draw(term)?;

        loop {
            let input = drain_pending(self.clock.remaining())?;
            if input.quit {
                return Ok(ExitReason::Quit);
            }
            if input.resized {
                term.invalidate();
            }
            for &action in &input.actions {
                self.game.apply_action(action);
                self.record_lock();
            }

            let Some(elapsed_ms) = self.clock.tick() else {
                continue;
            };
            self.game.tick(elapsed_ms);
            self.record_lock();
            self.draw(term)?;

            if self.game.game_over() {
                return self.wait_after_game_over(term);
            }
        }
    }

    /// Keep the final frame up until any key is pressed.
    fn wait_after_game_over(&mut self, term: &mut TerminalRenderer) -> Result<ExitReason> {
        loop {
            let input = drain_pending(GAME_OVER_POLL)?;
            if input.quit || !input.actions.is_empty() {
                return Ok(ExitReason::TopOut);
            }
            if input.resized {
                term.invalidate();
                self.draw(term)?;
            }
        }
    }

    fn record_lock(&mut self) {
        if let Some(event) = self.game.take_last_event() {
            self.tally.pieces += 1;
            self.tally.rows_cleared += event.lines_cleared as u32;
        }
    }

    fn draw(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        let (w, h) = crossterm::terminal::size().context("reading terminal size")?;
        self.game.snapshot_into(&mut self.snap);
        self.view
            .render_into(&self.snap, Viewport::new(w, h), &mut self.fb);
        term.draw_swap(&mut self.fb)
    }

    fn summary(&self, config: &Config, reason: ExitReason) -> String {
        let mut line = format!(
            "{} (seed {}): {} pieces, {} rows cleared",
            config.variant.as_str(),
            config.seed,
            self.tally.pieces,
            self.tally.rows_cleared,
        );
        if config.variant.scores() {
            line.push_str(&format!(
                ", score {}, lines {}, level {}",
                self.game.score(),
                self.game.lines(),
                self.game.level()
            ));
        }
        line.push_str(&format!(" [{}]", reason.as_str()));
        line
    }
}
