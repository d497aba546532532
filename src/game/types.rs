//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use derive_new::new;

/// Marker placed on the board by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Marker {
    /// Marker X (moves first).
    X,
    /// Marker O (moves second).
    O,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Cell with no marker.
    Empty,
    /// Cell holding a marker.
    Taken(Marker),
}

/// The 8 winning index triples in scan order: rows, then columns, then diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // Rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // Columns
    [0, 4, 8],
    [2, 4, 6], // Diagonals
];

/// A completed winning line: the marker and the cell indices it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct LineHit {
    /// Marker that completed the line.
    marker: Marker,
    /// Board indices of the completed line.
    line: [usize; 3],
}

/// 3x3 tic-tac-toe board in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Writes a marker into a cell. Callers validate bounds and occupancy first.
    pub(crate) fn set(&mut self, pos: usize, marker: Marker) {
        debug_assert!(pos < 9, "position validated by the engine");
        self.cells[pos] = Cell::Taken(marker);
    }

    /// Checks if the cell at the given position is empty.
    pub fn is_empty_cell(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// Checks if every cell holds a marker.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Counts the cells holding the given marker.
    pub fn count(&self, marker: Marker) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Taken(marker))
            .count()
    }

    /// Scans [`WIN_LINES`] in declaration order and returns the first
    /// completed line, if any.
    pub fn winning_line(&self) -> Option<LineHit> {
        for line in WIN_LINES {
            let [a, b, c] = line;
            if let Some(Cell::Taken(marker)) = self.get(a)
                && self.get(b) == Some(Cell::Taken(marker))
                && self.get(c) == Some(Cell::Taken(marker))
            {
                return Some(LineHit::new(marker, line));
            }
        }
        None
    }

    /// Formats the board as a human-readable string (used in logs).
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    Cell::Taken(marker) => marker.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
///
/// `Won` and `Draw` are terminal until [`Game::reset`](crate::Game::reset)
/// re-enters `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winning marker.
    Won(Marker),
    /// Game ended with a full board and no winner.
    Draw,
}

impl GameStatus {
    /// Checks if the game has ended.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}
