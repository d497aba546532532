//! Player session: identity plus cumulative match statistics.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::game::{GameStatus, Marker};

/// Errors raised when starting a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// The provided display name was empty after trimming.
    #[display("display name cannot be empty")]
    EmptyName,
}

/// Outcome of a finished game from the tracked user's perspective.
///
/// The app tracks a single profile per device, so an X win counts as the
/// user's win and an O win as a loss, even in local two-player games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum GameOutcome {
    /// The tracked user won.
    Win,
    /// The tracked user lost.
    Loss,
    /// The game was drawn.
    Draw,
}

impl GameOutcome {
    /// Maps a terminal [`GameStatus`] onto a user-perspective outcome.
    /// Returns `None` while the game is still in progress.
    #[instrument]
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Won(Marker::X) => Some(Self::Win),
            GameStatus::Won(Marker::O) => Some(Self::Loss),
            GameStatus::Draw => Some(Self::Draw),
            GameStatus::InProgress => None,
        }
    }
}

/// Cumulative match counters for a player.
///
/// Counters only ever increase; they reset to zero when a session starts
/// or ends. Serialized field names match the persisted record format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    /// Total finished games.
    matches_played: u32,
    /// Games the user won.
    matches_won: u32,
    /// Games the user lost.
    matches_lost: u32,
    /// Games that ended in a draw.
    matches_draw: u32,
}

impl PlayerStats {
    /// Records one finished game, bumping exactly one outcome bucket.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: GameOutcome) {
        self.matches_played += 1;
        match outcome {
            GameOutcome::Win => self.matches_won += 1,
            GameOutcome::Loss => self.matches_lost += 1,
            GameOutcome::Draw => self.matches_draw += 1,
        }
    }

    /// Calculates the win rate as a percentage (0.0-100.0).
    pub fn win_rate(&self) -> f64 {
        if self.matches_played == 0 {
            0.0
        } else {
            (self.matches_won as f64 / self.matches_played as f64) * 100.0
        }
    }
}

/// The current player's identity and statistics.
///
/// An empty display name means no active session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters)]
pub struct PlayerSession {
    /// Display name; empty when logged out.
    name: String,
    /// Cumulative match statistics.
    stats: PlayerStats,
}

impl PlayerSession {
    /// Creates a session from previously persisted values.
    pub fn from_parts(name: String, stats: PlayerStats) -> Self {
        Self { name, stats }
    }

    /// Checks whether a session is active.
    pub fn is_logged_in(&self) -> bool {
        !self.name.is_empty()
    }

    /// Starts a session with the given display name, resetting all
    /// counters to zero. Guest logins get a `" (Guest)"` suffix.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyName`] if the name is empty after
    /// trimming; the session is left unchanged.
    #[instrument(skip(self))]
    pub fn login(&mut self, name: &str, guest: bool) -> Result<(), SessionError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(SessionError::EmptyName);
        }
        self.name = if guest {
            format!("{} (Guest)", trimmed)
        } else {
            trimmed.to_string()
        };
        self.stats = PlayerStats::default();
        info!(name = %self.name, "Session started");
        Ok(())
    }

    /// Ends the session: clears the identity and zeroes the counters.
    #[instrument(skip(self), fields(name = %self.name))]
    pub fn logout(&mut self) {
        info!("Session ended");
        self.name.clear();
        self.stats = PlayerStats::default();
    }

    /// Records a finished game into the session statistics.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: GameOutcome) {
        self.stats.record(outcome);
        info!(
            outcome = %outcome,
            played = self.stats.matches_played,
            "Result recorded"
        );
    }

    /// Returns the uppercased first character of the name (avatar initial).
    pub fn avatar_initial(&self) -> Option<char> {
        self.name.chars().next().map(|c| c.to_ascii_uppercase())
    }
}
