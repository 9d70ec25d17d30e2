//! Game catalog — the fixed set of games and their high scores.
//!
//! DESIGN
//! ======
//! Games sit behind a single `RwLock`. Reads clone out a snapshot so callers
//! never hold the lock. The only mutation is `record_score_if_higher`, which
//! compares and raises under one write guard so the lookup and the update
//! cannot be interleaved by a concurrent submission.

use std::sync::{Arc, PoisonError, RwLock};

use crate::services::same_text;
use crate::state::Game;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no game with id {0}")]
    GameNotFound(i64),
    #[error("no game named {0:?}")]
    NameNotFound(String),
}

/// Outcome of an atomic compare-and-raise on a game's high score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighScoreUpdate {
    pub updated: bool,
    pub high_score: i64,
}

#[derive(Clone)]
pub struct GameCatalog {
    games: Arc<RwLock<Vec<Game>>>,
}

// =============================================================================
// CATALOG
// =============================================================================

impl GameCatalog {
    #[must_use]
    pub fn new(games: Vec<Game>) -> Self {
        Self { games: Arc::new(RwLock::new(games)) }
    }

    /// Point-in-time copy of every game, in catalog order.
    #[must_use]
    pub fn list(&self) -> Vec<Game> {
        self.games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Canonical names of every game, in catalog order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|g| g.name.clone())
            .collect()
    }

    /// # Errors
    ///
    /// Returns `GameNotFound` if no game has this id.
    pub fn find_by_id(&self, id: i64) -> Result<Game, CatalogError> {
        self.games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or(CatalogError::GameNotFound(id))
    }

    /// Case-insensitive lookup by name.
    ///
    /// # Errors
    ///
    /// Returns `NameNotFound` if no game matches.
    pub fn find_by_name(&self, name: &str) -> Result<Game, CatalogError> {
        self.games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|g| same_text(&g.name, name))
            .cloned()
            .ok_or_else(|| CatalogError::NameNotFound(name.to_owned()))
    }

    /// Raise the game's high score to `score` if strictly greater.
    ///
    /// Compare and update happen under one write guard, so concurrent calls
    /// for the same game always converge on the maximum.
    ///
    /// # Errors
    ///
    /// Returns `GameNotFound` if no game has this id.
    pub fn record_score_if_higher(&self, game_id: i64, score: i64) -> Result<HighScoreUpdate, CatalogError> {
        let mut games = self.games.write().unwrap_or_else(PoisonError::into_inner);
        let game = games
            .iter_mut()
            .find(|g| g.id == game_id)
            .ok_or(CatalogError::GameNotFound(game_id))?;

        if score > game.high_score {
            game.high_score = score;
            return Ok(HighScoreUpdate { updated: true, high_score: score });
        }
        Ok(HighScoreUpdate { updated: false, high_score: game.high_score })
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
