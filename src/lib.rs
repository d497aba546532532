//! Neon Tic Tac Toe — a terminal tic-tac-toe game with player profiles
//! and persisted match statistics.
//!
//! # Architecture
//!
//! - **Game**: the board, markers, and turn state machine
//! - **Session**: player identity and cumulative statistics
//! - **Store**: a single JSON key-value slot behind the [`Store`] capability
//! - **App**: multi-page terminal UI (home, login, game, profile) with
//!   modal dialogs and decorative particle effects
//!
//! # Example
//!
//! ```no_run
//! use neon_tictactoe::{JsonFileStore, SessionContext};
//!
//! # fn example() -> anyhow::Result<()> {
//! let store = JsonFileStore::new("neon_tictactoe.json");
//! let mut ctx = SessionContext::new(Box::new(store))?;
//! ctx.login("Ann", false)?;
//! ctx.play_move(4);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod app;
mod game;
mod session;
mod store;

// Crate-level exports - Application layer
pub use app::{
    AppController, AppSettings, ConfigError, GameScreen, HomeScreen, LoginProvider, LoginScreen,
    Modal, ModalKind, ParticleField, ProfileScreen, Screen, ScreenTransition, SessionContext,
};

// Crate-level exports - Game engine
pub use game::{Board, Cell, Game, GameStatus, LineHit, Marker, MoveError, WIN_LINES};

// Crate-level exports - Session management
pub use session::{GameOutcome, PlayerSession, PlayerStats, SessionError};

// Crate-level exports - Persistence
pub use store::{JsonFileStore, STORAGE_KEY, SessionRecord, Store, StoreError};
