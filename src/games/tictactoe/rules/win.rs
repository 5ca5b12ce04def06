//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The 8 winning triples: 3 rows, 3 columns, 2 diagonals.
pub const TRIPLES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `player` holds every square of some triple.
#[instrument(skip(board))]
pub fn check_win(board: &Board, player: Player) -> bool {
    TRIPLES
        .iter()
        .any(|triple| triple.iter().all(|&pos| board.get(pos).is_held_by(player)))
}

/// Returns the first complete triple and the player holding it.
#[instrument(skip(board))]
pub fn winning_triple(board: &Board) -> Option<(Player, [Position; 3])> {
    for [a, b, c] in TRIPLES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some((player, [a, b, c])),
                Square::Empty => None,
            };
        }
    }

    None
}

/// Returns the player holding a complete triple, if any.
pub fn winner(board: &Board) -> Option<Player> {
    winning_triple(board).map(|(player, _)| player)
}
