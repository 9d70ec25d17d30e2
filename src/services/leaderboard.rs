//! Leaderboard store — append-only log of accepted score submissions.
//!
//! DESIGN
//! ======
//! Entries are kept in insertion order behind a single `RwLock`. `append`
//! stamps the acceptance date and pushes under the write guard, so concurrent
//! appends never lose an entry. Reads clone out a snapshot; callers re-sort
//! by score themselves (see `services::query`).

use std::sync::{Arc, PoisonError, RwLock};

use time::{Date, OffsetDateTime};

use crate::services::same_text;
use crate::state::LeaderboardEntry;

/// A validated submission awaiting its acceptance date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub player: String,
    pub game: String,
    pub score: i64,
}

#[derive(Clone)]
pub struct LeaderboardStore {
    entries: Arc<RwLock<Vec<LeaderboardEntry>>>,
}

impl LeaderboardStore {
    #[must_use]
    pub fn new(entries: Vec<LeaderboardEntry>) -> Self {
        Self { entries: Arc::new(RwLock::new(entries)) }
    }

    /// Store `entry` dated today (UTC) and return the stored record.
    pub fn append(&self, entry: NewEntry) -> LeaderboardEntry {
        self.append_on(entry, OffsetDateTime::now_utc().date())
    }

    pub(crate) fn append_on(&self, entry: NewEntry, date: Date) -> LeaderboardEntry {
        let stored = LeaderboardEntry {
            player: entry.player,
            game: entry.game,
            score: entry.score,
            date: date.to_string(),
        };
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(stored.clone());
        stored
    }

    /// Point-in-time copy of every entry, in insertion order.
    #[must_use]
    pub fn all_entries(&self) -> Vec<LeaderboardEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Entries for one game (case-insensitive), in insertion order.
    #[must_use]
    pub fn entries_for_game(&self, game: &str) -> Vec<LeaderboardEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|e| same_text(&e.game, game))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[path = "leaderboard_test.rs"]
mod tests;
