//! Session context — the state objects owned by the application controller.

use tracing::{debug, info, instrument, warn};

use crate::game::{Game, GameStatus};
use crate::session::{GameOutcome, PlayerSession, SessionError};
use crate::store::{SessionRecord, Store, StoreError};

/// Owns the game engine, the player session, and the persistence
/// capability. All state-changing events flow through here, and each one
/// is followed by a whole-record save.
///
/// Persistence failures after the initial load are logged and otherwise
/// ignored; the store is treated as always available.
pub struct SessionContext {
    game: Game,
    session: PlayerSession,
    store: Box<dyn Store>,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("game", &self.game)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl SessionContext {
    /// Creates a context, loading the persisted session from the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the slot exists but cannot be read.
    #[instrument(skip(store))]
    pub fn new(store: Box<dyn Store>) -> Result<Self, StoreError> {
        let record = store.load()?;
        let session = PlayerSession::from(record);
        info!(
            logged_in = session.is_logged_in(),
            name = %session.name(),
            "Session context created"
        );
        Ok(Self {
            game: Game::new(),
            session,
            store,
        })
    }

    /// Returns the game engine.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the player session.
    pub fn session(&self) -> &PlayerSession {
        &self.session
    }

    /// Starts a session with the given name and persists the record.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the name is empty after trimming; no
    /// state changes and nothing is saved in that case.
    #[instrument(skip(self))]
    pub fn login(&mut self, name: &str, guest: bool) -> Result<(), SessionError> {
        self.session.login(name, guest)?;
        self.game.reset();
        self.persist();
        Ok(())
    }

    /// Ends the session, resets the game, and persists the cleared record.
    #[instrument(skip(self))]
    pub fn logout(&mut self) {
        self.session.logout();
        self.game.reset();
        self.persist();
    }

    /// Applies a move for the current marker.
    ///
    /// Invalid input (occupied cell, out-of-range index, finished game) is
    /// a silent no-op returning `None` — a user-input guard, not an error
    /// path. When the move ends the game, the outcome is recorded into the
    /// session statistics and the record is persisted.
    #[instrument(skip(self))]
    pub fn play_move(&mut self, pos: usize) -> Option<GameStatus> {
        let status = match self.game.play(pos) {
            Ok(status) => status,
            Err(e) => {
                debug!(pos, reason = %e, "Move ignored");
                return None;
            }
        };

        if let Some(outcome) = GameOutcome::from_status(status) {
            self.session.record(outcome);
            self.persist();
        }
        Some(status)
    }

    /// Starts a fresh game; statistics are untouched.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.game.reset();
    }

    /// Writes the current session to the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails.
    #[instrument(skip(self))]
    pub fn save(&self) -> Result<(), StoreError> {
        self.store.save(&SessionRecord::from(&self.session))
    }

    /// Saves and downgrades failures to a warning.
    fn persist(&self) {
        if let Err(e) = self.save() {
            warn!(error = %e, "Failed to persist session record");
        }
    }
}
