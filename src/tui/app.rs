//! Application state and input handling.

use super::input::{self, Input};
use super::ui::BoardLayout;
use crate::games::tictactoe::{GameEngine, Position};
use tracing::{debug, info, instrument};

/// What the event loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    layout: Option<BoardLayout>,
    show_hints: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(show_hints: bool) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            layout: None,
            show_hints,
        }
    }

    /// Gets the game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether empty cells show their key hint.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// Records the layout of the last drawn frame, used to resolve clicks.
    pub fn set_layout(&mut self, layout: Option<BoardLayout>) {
        self.layout = layout;
    }

    /// Applies one input to the game.
    #[instrument(skip(self))]
    pub fn handle_input(&mut self, input: Input) -> Flow {
        match input {
            Input::Quit => {
                info!("User quit");
                return Flow::Quit;
            }
            Input::Reset => self.reset(),
            Input::Select(pos) => self.play_visible(pos),
            Input::Confirm => self.play_visible(self.cursor),
            Input::MoveCursor(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction);
            }
            Input::Click { column, row } => self.click(column, row),
        }
        Flow::Continue
    }

    fn click(&mut self, column: u16, row: u16) {
        let Some(layout) = self.layout else {
            debug!("Click before first frame, ignored");
            return;
        };

        if let Some(pos) = layout.cell_at(column, row) {
            self.play(pos);
        } else if layout.is_reset(column, row) {
            self.reset();
        } else {
            debug!(column, row, "Click outside board, ignored");
        }
    }

    /// Plays from the keyboard only while the board is on screen.
    fn play_visible(&mut self, pos: Position) {
        if self.layout.is_none() {
            debug!(position = %pos, "Board hidden, key ignored");
            return;
        }
        self.play(pos);
    }

    fn play(&mut self, pos: Position) {
        self.cursor = pos;
        let outcome = self.engine.play(pos);
        if outcome.is_applied() {
            debug!(?outcome, board = %self.engine.board().display(), "Move applied");
        } else {
            debug!(?outcome, "Move ignored");
        }
    }

    fn reset(&mut self) {
        self.engine.reset();
        self.cursor = Position::Center;
    }
}
