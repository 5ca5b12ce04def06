//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from
//! board storage so the engine and the tests share one definition.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{TRIPLES, check_win, winner, winning_triple};
