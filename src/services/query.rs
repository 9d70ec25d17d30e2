//! Query engine — filtering, ranking and limiting over store snapshots.
//!
//! DESIGN
//! ======
//! Everything here is a pure function over owned snapshots from
//! `GameCatalog::list` / `LeaderboardStore::all_entries`, so it needs no
//! locking. Ranking is a stable sort by score descending: on a tie the entry
//! submitted first keeps the earlier position.

use std::cmp::Reverse;

use serde::Serialize;

use crate::services::same_text;
use crate::state::{Game, LeaderboardEntry};

pub const DEFAULT_LIMIT: usize = 10;

// =============================================================================
// FILTERS
// =============================================================================

/// Optional game filters. Each present field must match case-insensitively;
/// absent fields are not applied and are not echoed back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

impl GameFilter {
    /// Empty strings count as absent.
    #[must_use]
    pub fn new(category: Option<&str>, difficulty: Option<&str>) -> Self {
        Self { category: non_empty(category), difficulty: non_empty(difficulty) }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.difficulty.is_none()
    }

    fn matches(&self, game: &Game) -> bool {
        self.category.as_deref().is_none_or(|c| same_text(&game.category, c))
            && self.difficulty.as_deref().is_none_or(|d| same_text(&game.difficulty, d))
    }
}

/// Global leaderboard options. `limit` is always the effective value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<String>,
    pub limit: usize,
}

impl LeaderboardQuery {
    /// Build from raw query parameters. A missing, non-numeric or
    /// non-positive `limit` becomes `DEFAULT_LIMIT`.
    #[must_use]
    pub fn from_params(game: Option<&str>, limit: Option<&str>) -> Self {
        Self { game: non_empty(game), limit: parse_limit(limit) }
    }
}

impl Default for LeaderboardQuery {
    fn default() -> Self {
        Self { game: None, limit: DEFAULT_LIMIT }
    }
}

fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.filter(|v| !v.is_empty()).map(str::to_owned)
}

#[must_use]
pub fn parse_limit(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|&n| n > 0)
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(DEFAULT_LIMIT)
}

// =============================================================================
// QUERIES
// =============================================================================

/// Games matching every present filter, in catalog order.
#[must_use]
pub fn filter_games(games: Vec<Game>, filter: &GameFilter) -> Vec<Game> {
    games.into_iter().filter(|g| filter.matches(g)).collect()
}

/// Stable sort by score, highest first.
pub fn rank_by_score(entries: &mut [LeaderboardEntry]) {
    entries.sort_by_key(|e| Reverse(e.score));
}

/// Top `limit` entries for one game.
#[must_use]
pub fn game_leaderboard(entries: Vec<LeaderboardEntry>, game: &str, limit: usize) -> Vec<LeaderboardEntry> {
    let mut ranked: Vec<LeaderboardEntry> = entries.into_iter().filter(|e| same_text(&e.game, game)).collect();
    rank_by_score(&mut ranked);
    ranked.truncate(limit);
    ranked
}

/// Top `query.limit` entries overall, or for `query.game` when set.
#[must_use]
pub fn leaderboard(entries: Vec<LeaderboardEntry>, query: &LeaderboardQuery) -> Vec<LeaderboardEntry> {
    match query.game.as_deref() {
        Some(game) => game_leaderboard(entries, game, query.limit),
        None => {
            let mut ranked = entries;
            rank_by_score(&mut ranked);
            ranked.truncate(query.limit);
            ranked
        }
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
