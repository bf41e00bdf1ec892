//! Terminal UI for time-travel tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, Direction, map_key, move_cursor};
pub use ui::draw;

use crate::view::ViewOptions;
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument, warn};

/// Runs the interactive game until the user quits.
#[instrument(skip(options))]
pub fn run_tui(options: ViewOptions) -> Result<()> {
    info!("Starting terminal UI");

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(options);
    let res = run_app(&mut terminal, &mut app);
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

/// Raw mode and alternate screen, restored on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
    }
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let view = app.view();
        terminal.draw(|frame| draw(frame, &view, *app.cursor(), *app.selected_step()))?;

        if let Event::Key(key) = event::read()?
            && let Some(action) = map_key(key)
        {
            app.handle(action);
        }

        if *app.should_quit() {
            return Ok(());
        }
    }
}
