//! Terminal UI for tic-tac-toe.
//!
//! The event loop is single threaded: draw, wait for one terminal event,
//! map it to an [`Input`], hand it to the [`App`], repeat.

mod app;
mod input;
mod ui;

use crate::error::TuiError;
use crate::settings::Settings;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, IsTerminal};
use std::time::Duration;
use tracing::{debug, info, instrument};

pub use app::{App, Flow};
pub use input::{Direction, Input, from_event, from_key, move_cursor};
pub use ui::{BoardLayout, MIN_HEIGHT, MIN_WIDTH, draw};

/// Restores the terminal when dropped, on success and on error alike.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self, TuiError> {
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
        let _ = disable_raw_mode();
    }
}

/// Runs the game in the current terminal until the player quits.
///
/// # Errors
///
/// Fails immediately if the terminal cannot be used: not a TTY, too
/// small for the board, or raw mode / alternate screen unavailable.
#[instrument(skip_all)]
pub fn run_tui(settings: &Settings) -> Result<(), TuiError> {
    let (width, height) = check_surface(io::stdout().is_terminal(), terminal::size())?;

    info!(width, height, "Starting tic-tac-toe TUI");

    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(*settings.show_hints());
    let poll_interval = Duration::from_millis(*settings.poll_interval_ms());
    run_app(&mut terminal, &mut app, poll_interval)?;

    info!("TUI closed");
    Ok(())
}

/// Checks that stdout is a terminal big enough for the board.
fn check_surface(
    stdout_is_terminal: bool,
    size: io::Result<(u16, u16)>,
) -> Result<(u16, u16), TuiError> {
    if !stdout_is_terminal {
        return Err(TuiError::new("stdout is not a terminal"));
    }

    let (width, height) =
        size.map_err(|e| TuiError::new(format!("No terminal to draw on: {}", e)))?;
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        return Err(TuiError::new(format!(
            "Terminal is {}x{}, need at least {}x{}",
            width, height, MIN_WIDTH, MIN_HEIGHT
        )));
    }

    Ok((width, height))
}

/// Event loop: redraw, then apply at most one input per poll interval.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    poll_interval: Duration,
) -> Result<(), TuiError> {
    loop {
        let mut layout = None;
        terminal.draw(|f| layout = ui::draw(f, app))?;
        app.set_layout(layout);

        if !event::poll(poll_interval)? {
            continue;
        }

        let event = event::read()?;
        if let Some(input) = input::from_event(&event) {
            if app.handle_input(input) == Flow::Quit {
                return Ok(());
            }
        }
    }
}
