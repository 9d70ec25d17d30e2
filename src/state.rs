//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It bundles the two owned stores (game catalog and leaderboard) plus the
//! loaded config. There are no ambient globals: every handler and service
//! receives the store handles it needs explicitly. State lives for the
//! process lifetime and is never persisted.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::services::catalog::GameCatalog;
use crate::services::leaderboard::LeaderboardStore;

// =============================================================================
// GAME
// =============================================================================

/// A cataloged game. `id` and `name` never change; `high_score` only rises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub difficulty: String,
    pub high_score: i64,
}

impl Game {
    #[must_use]
    pub fn new(id: i64, name: &str, category: &str, difficulty: &str, high_score: i64) -> Self {
        Self {
            id,
            name: name.to_owned(),
            category: category.to_owned(),
            difficulty: difficulty.to_owned(),
            high_score,
        }
    }
}

// =============================================================================
// LEADERBOARD ENTRY
// =============================================================================

/// One accepted score submission. Immutable once stored.
///
/// `game` always carries the catalog's canonical casing and `date` is the
/// `YYYY-MM-DD` calendar date the submission was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player: String,
    pub game: String,
    pub score: i64,
    pub date: String,
}

impl LeaderboardEntry {
    #[must_use]
    pub fn new(player: &str, game: &str, score: i64, date: &str) -> Self {
        Self { player: player.to_owned(), game: game.to_owned(), score, date: date.to_owned() }
    }
}

// =============================================================================
// SEED DATA
// =============================================================================

/// Games available at startup.
#[must_use]
pub fn seed_games() -> Vec<Game> {
    vec![
        Game::new(1, "Snake", "classic", "easy", 1250),
        Game::new(2, "Tetris", "puzzle", "medium", 8900),
        Game::new(3, "Pac-Man", "arcade", "medium", 15600),
        Game::new(4, "Space Invaders", "shooter", "hard", 23400),
        Game::new(5, "Pong", "classic", "easy", 21),
    ]
}

/// Leaderboard entries present at startup.
#[must_use]
pub fn seed_leaderboard() -> Vec<LeaderboardEntry> {
    vec![
        LeaderboardEntry::new("Player1", "Snake", 1250, "2024-01-15"),
        LeaderboardEntry::new("GameMaster", "Tetris", 8900, "2024-01-14"),
        LeaderboardEntry::new("ArcadeKing", "Pac-Man", 15600, "2024-01-13"),
    ]
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the stores are Arc-backed handles.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: GameCatalog,
    pub leaderboard: LeaderboardStore,
    pub started_at: Instant,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config, catalog: GameCatalog, leaderboard: LeaderboardStore) -> Self {
        Self { config: Arc::new(config), catalog, leaderboard, started_at: Instant::now() }
    }

    /// State populated with the startup catalog and leaderboard.
    #[must_use]
    pub fn seeded(config: Config) -> Self {
        Self::new(config, GameCatalog::new(seed_games()), LeaderboardStore::new(seed_leaderboard()))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
