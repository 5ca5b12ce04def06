//! Input events and their mapping from terminal events.

use crate::games::tictactoe::Position;
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};

/// Cursor direction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the top row.
    Up,
    /// Towards the bottom row.
    Down,
    /// Towards the left column.
    Left,
    /// Towards the right column.
    Right,
}

/// Everything the player can ask the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Play the given cell.
    Select(Position),
    /// Move the keyboard cursor.
    MoveCursor(Direction),
    /// Play the cell under the cursor.
    Confirm,
    /// Left click at a terminal cell (0-based column and row).
    Click {
        /// Terminal column.
        column: u16,
        /// Terminal row.
        row: u16,
    },
    /// Start a new game.
    Reset,
    /// Leave the app.
    Quit,
}

/// Maps a crossterm event to an [`Input`], or `None` for events we don't use.
pub fn from_event(event: &Event) -> Option<Input> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => from_key(key.code),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Input::Click {
                column: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        },
        _ => None,
    }
}

/// Maps a key to an [`Input`].
pub fn from_key(code: KeyCode) -> Option<Input> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
        KeyCode::Char('r') => Some(Input::Reset),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Input::Select),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Input::Confirm),
        KeyCode::Up => Some(Input::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Input::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Input::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Input::MoveCursor(Direction::Right)),
        _ => None,
    }
}

/// Moves cursor one cell in `direction`, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    use Position::*;

    match (cursor, direction) {
        // Right movement
        (TopLeft, Direction::Right) => TopCenter,
        (TopCenter, Direction::Right) => TopRight,
        (MiddleLeft, Direction::Right) => Center,
        (Center, Direction::Right) => MiddleRight,
        (BottomLeft, Direction::Right) => BottomCenter,
        (BottomCenter, Direction::Right) => BottomRight,

        // Left movement
        (TopCenter, Direction::Left) => TopLeft,
        (TopRight, Direction::Left) => TopCenter,
        (Center, Direction::Left) => MiddleLeft,
        (MiddleRight, Direction::Left) => Center,
        (BottomCenter, Direction::Left) => BottomLeft,
        (BottomRight, Direction::Left) => BottomCenter,

        // Down movement
        (TopLeft, Direction::Down) => MiddleLeft,
        (TopCenter, Direction::Down) => Center,
        (TopRight, Direction::Down) => MiddleRight,
        (MiddleLeft, Direction::Down) => BottomLeft,
        (Center, Direction::Down) => BottomCenter,
        (MiddleRight, Direction::Down) => BottomRight,

        // Up movement
        (MiddleLeft, Direction::Up) => TopLeft,
        (Center, Direction::Up) => TopCenter,
        (MiddleRight, Direction::Up) => TopRight,
        (BottomLeft, Direction::Up) => MiddleLeft,
        (BottomCenter, Direction::Up) => Center,
        (BottomRight, Direction::Up) => MiddleRight,

        // Edges
        _ => cursor,
    }
}
