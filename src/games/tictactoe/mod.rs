//! Tic-tac-toe game logic.

mod engine;
mod position;
pub mod rules;
mod types;

pub use engine::{GameEngine, MoveOutcome, Rejection};
pub use position::Position;
pub use types::{Board, GameState, GameStatus, Player, Square};
