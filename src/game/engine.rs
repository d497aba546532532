//! Turn state machine and move validation for tic-tac-toe.

use derive_more::{Display, Error};
use tracing::{debug, instrument};

use super::types::{Board, GameStatus, Marker};

/// Reasons a move is rejected. The presentation layer treats these as a
/// user-input guard rather than an error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Position is outside the 0-8 range.
    #[display("position out of bounds (must be 0-8)")]
    OutOfBounds,
    /// Cell already holds a marker.
    #[display("cell is already occupied")]
    CellTaken,
    /// The game has already ended.
    #[display("game is already over")]
    GameOver,
}

/// Tic-tac-toe game engine.
///
/// Holds the board, the marker to move, and the game status. State changes
/// only through [`Game::play`] and [`Game::reset`], so the turn-alternation
/// invariant (O count equals X count or is one fewer) holds by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_marker: Marker,
    status: GameStatus,
    history: Vec<usize>,
}

impl Game {
    /// Creates a new game: empty board, X to move, in progress.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_marker: Marker::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the marker whose turn it is.
    pub fn current_marker(&self) -> Marker {
        self.current_marker
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history (positions in play order).
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Checks if the game is still accepting moves.
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// Places the current marker at the given position (0-8).
    ///
    /// On success the result is re-evaluated: the first completed line in
    /// scan order wins, a full board with no line is a draw, and otherwise
    /// the turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the game has ended, the position is out of
    /// range, or the cell is occupied. The board is untouched in every
    /// error case.
    #[instrument(skip(self), fields(marker = %self.current_marker))]
    pub fn play(&mut self, pos: usize) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if pos >= 9 {
            return Err(MoveError::OutOfBounds);
        }
        if !self.board.is_empty_cell(pos) {
            return Err(MoveError::CellTaken);
        }

        self.board.set(pos, self.current_marker);
        self.history.push(pos);

        if let Some(hit) = self.board.winning_line() {
            self.status = GameStatus::Won(*hit.marker());
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.current_marker = self.current_marker.opponent();
        }

        debug!(status = ?self.status, board = %self.board.display(), "Move applied");
        Ok(self.status)
    }

    /// Restores the board to all-empty, X to move, in progress.
    ///
    /// Valid from any state, including terminal ones.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
