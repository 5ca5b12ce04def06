//! Two-player tic-tac-toe in the terminal.
//!
//! # Architecture
//!
//! - **Games**: the [`GameEngine`] owns the board and the rules
//! - **TUI**: a ratatui front end that turns key presses and mouse
//!   clicks into [`Input`] events and redraws after each one
//! - **Settings**: optional TOML configuration
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.handle_move(index);
//! }
//! assert_eq!(engine.status(), GameStatus::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod games;
mod settings;
mod tui;

// Crate-level exports - Errors
pub use error::TuiError;

// Crate-level exports - Settings
pub use settings::{ConfigError, DEFAULT_CONFIG_PATH, MIN_POLL_INTERVAL_MS, Settings};

// Crate-level exports - Terminal UI
pub use tui::{
    App, BoardLayout, Direction, Flow, Input, MIN_HEIGHT, MIN_WIDTH, draw, from_event, from_key,
    move_cursor, run_tui,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameEngine, GameState, GameStatus, MoveOutcome, Player, Position, Rejection, Square,
};
