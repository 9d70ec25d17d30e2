//! Score submission workflow.
//!
//! DESIGN
//! ======
//! validate → resolve game → append entry → raise high score → rank.
//!
//! Validation and game resolution touch no state, so a rejected submission
//! leaves both stores unchanged. An accepted one appends first, then does the
//! atomic compare-and-raise on the catalog, then ranks against a fresh
//! snapshot of that game's entries.
//!
//! Rank is the 1-based position of the first entry equal to the stored one in
//! the stable score ordering. Byte-identical duplicates therefore share the
//! rank of the earliest copy.

use serde::{Deserialize, Serialize};

use crate::services::catalog::{CatalogError, GameCatalog};
use crate::services::leaderboard::{LeaderboardStore, NewEntry};
use crate::services::query::rank_by_score;
use crate::state::LeaderboardEntry;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScoreSubmission {
    pub player: String,
    pub game: String,
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReceipt {
    pub entry: LeaderboardEntry,
    pub rank: usize,
    pub is_new_high_score: bool,
    pub game_high_score: i64,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("invalid submission: {0}")]
    InvalidInput(String),
    #[error("unknown game {requested:?}")]
    UnknownGame { requested: String, available: Vec<String> },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

// =============================================================================
// WORKFLOW
// =============================================================================

/// Validate, store and rank one submission.
///
/// # Errors
///
/// - `InvalidInput` for a blank player or game, or a negative score.
/// - `UnknownGame` if the game matches nothing in the catalog; `available`
///   lists every cataloged name.
pub fn submit_score(
    catalog: &GameCatalog,
    leaderboard: &LeaderboardStore,
    submission: ScoreSubmission,
) -> Result<ScoreReceipt, ScoreError> {
    let new_entry = validate(submission)?;

    let game = catalog.find_by_name(&new_entry.game).map_err(|_| {
        tracing::debug!(game = %new_entry.game, "score rejected: unknown game");
        ScoreError::UnknownGame { requested: new_entry.game.clone(), available: catalog.names() }
    })?;

    let entry = leaderboard.append(NewEntry { game: game.name, ..new_entry });
    let update = catalog.record_score_if_higher(game.id, entry.score)?;
    let rank = rank_of(leaderboard.entries_for_game(&entry.game), &entry);

    tracing::info!(player = %entry.player, game = %entry.game, score = entry.score, rank, "score accepted");
    if update.updated {
        tracing::info!(game = %entry.game, high_score = update.high_score, "new high score");
    }

    Ok(ScoreReceipt { entry, rank, is_new_high_score: update.updated, game_high_score: update.high_score })
}

fn validate(submission: ScoreSubmission) -> Result<NewEntry, ScoreError> {
    let player = submission.player.trim();
    if player.is_empty() {
        return Err(invalid("player is required"));
    }
    let game = submission.game.trim();
    if game.is_empty() {
        return Err(invalid("game is required"));
    }
    if submission.score < 0 {
        return Err(invalid("score must be zero or greater"));
    }
    Ok(NewEntry { player: player.to_owned(), game: game.to_owned(), score: submission.score })
}

fn invalid(reason: &str) -> ScoreError {
    tracing::debug!(reason, "score rejected: invalid input");
    ScoreError::InvalidInput(reason.to_owned())
}

/// 1-based position of the first entry equal to `entry` in score order.
fn rank_of(mut entries: Vec<LeaderboardEntry>, entry: &LeaderboardEntry) -> usize {
    rank_by_score(&mut entries);
    entries.iter().position(|e| e == entry).map_or(1, |i| i + 1)
}

#[cfg(test)]
#[path = "score_test.rs"]
mod tests;
