//! The persisted session record.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::session::{PlayerSession, PlayerStats};

/// Fixed key identifying the single storage slot.
pub const STORAGE_KEY: &str = "ticTacToeUserData";

/// Whole-record snapshot of a player session as persisted to the store.
///
/// An empty `name` means no active session. The record is always replaced
/// as a unit, never updated field by field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters, new)]
pub struct SessionRecord {
    /// Player display name; empty when logged out.
    name: String,
    /// Cumulative match statistics.
    stats: PlayerStats,
}

impl From<&PlayerSession> for SessionRecord {
    fn from(session: &PlayerSession) -> Self {
        Self::new(session.name().clone(), *session.stats())
    }
}

impl From<SessionRecord> for PlayerSession {
    fn from(record: SessionRecord) -> Self {
        PlayerSession::from_parts(record.name, record.stats)
    }
}
