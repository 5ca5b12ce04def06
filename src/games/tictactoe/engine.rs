//! Game engine for tic-tac-toe.
//!
//! The engine owns the single [`GameState`] and is the only place it
//! changes. Invalid moves are not errors: they are reported back as
//! [`MoveOutcome::Ignored`] and leave the state untouched.

use super::position::Position;
use super::rules;
use super::types::{Board, GameState, GameStatus, Player, Square};
use derive_more::Display;
use tracing::{debug, info, instrument};

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Rejection {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The index does not name a square.
    #[display("Index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

/// Result of handing a move to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Mark placed, game continues with `next` to move.
    Placed {
        /// Player whose turn it is now.
        next: Player,
    },
    /// Mark placed and completed a triple.
    Won(Player),
    /// Mark placed and filled the board without a winner.
    Draw,
    /// Nothing changed.
    Ignored(Rejection),
}

impl MoveOutcome {
    /// Returns true if the move changed the board.
    pub fn is_applied(&self) -> bool {
        !matches!(self, MoveOutcome::Ignored(_))
    }
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the player to move (or the last mover once the game is over).
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.state.status() != GameStatus::InProgress
    }

    /// Status line for the player-facing display.
    pub fn message(&self) -> String {
        match self.state.status() {
            GameStatus::InProgress => format!("Player {}'s turn", self.state.current_player()),
            GameStatus::Won(player) => format!("Player {} wins!", player),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }

    /// Checks whether `player` holds a complete triple.
    pub fn check_win(&self, player: Player) -> bool {
        rules::check_win(self.state.board(), player)
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Ignored when the game is over, the index is out of range, or the
    /// square is taken. Otherwise the mark is placed and the status is
    /// re-evaluated; the turn passes only if the game continues.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn handle_move(&mut self, index: usize) -> MoveOutcome {
        if self.is_over() {
            debug!("Move ignored: game over");
            return MoveOutcome::Ignored(Rejection::GameOver);
        }

        let Some(pos) = Position::from_index(index) else {
            debug!("Move ignored: index out of bounds");
            return MoveOutcome::Ignored(Rejection::OutOfBounds(index));
        };

        if self.state.board().get(pos) != Square::Empty {
            debug!(position = %pos, "Move ignored: square occupied");
            return MoveOutcome::Ignored(Rejection::SquareOccupied(pos));
        }

        let player = self.state.current_player();
        self.state.place(pos, player);
        debug!(position = %pos, "Mark placed");

        if self.check_win(player) {
            self.state.set_status(GameStatus::Won(player));
            info!(winner = %player, "Game won");
            return MoveOutcome::Won(player);
        }

        if rules::is_draw(self.state.board()) {
            self.state.set_status(GameStatus::Draw);
            info!("Game drawn");
            return MoveOutcome::Draw;
        }

        self.state.switch_player();
        MoveOutcome::Placed {
            next: self.state.current_player(),
        }
    }

    /// Places the current player's mark at a named position.
    pub fn play(&mut self, pos: Position) -> MoveOutcome {
        self.handle_move(pos.to_index())
    }

    /// Clears the board and starts a fresh game with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = GameState::new();
        info!("Game reset");
    }
}
