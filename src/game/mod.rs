//! Tic-tac-toe game engine: board, markers, and the turn state machine.

mod engine;
mod types;

pub use engine::{Game, MoveError};
pub use types::{Board, Cell, GameStatus, LineHit, Marker, WIN_LINES};
