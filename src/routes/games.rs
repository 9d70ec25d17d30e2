//! Game catalog routes.

use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Extension;
use serde::{Deserialize, Serialize};

use super::envelope::{self, ApiError, RequestId};
use crate::services::query::{self, GameFilter};
use crate::state::{AppState, Game, LeaderboardEntry};

/// Entries shown on a game's detail page.
const DETAIL_LEADERBOARD_LIMIT: usize = 10;

#[derive(Debug, Default, Deserialize)]
pub struct GamesParams {
    pub category: Option<String>,
    pub difficulty: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GamesResponse {
    pub games: Vec<Game>,
    pub total: usize,
    #[serde(skip_serializing_if = "GameFilter::is_empty")]
    pub filters: GameFilter,
}

#[derive(Debug, Serialize)]
pub struct GameDetailResponse {
    pub game: Game,
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// `GET /api/v1/games` — list games, optionally by category/difficulty.
pub async fn list_games(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<GamesParams>,
) -> Response {
    envelope::success(&request_id, games_page(&state, &params), "Games retrieved successfully")
}

/// `GET /api/v1/games/:id` — one game with its top scores.
pub async fn get_game(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(raw_id): Path<String>,
) -> Response {
    envelope::respond(&request_id, game_detail(&state, &raw_id), "Game details retrieved successfully")
}

pub(crate) fn games_page(state: &AppState, params: &GamesParams) -> GamesResponse {
    let filters = GameFilter::new(params.category.as_deref(), params.difficulty.as_deref());
    let games = query::filter_games(state.catalog.list(), &filters);
    GamesResponse { total: games.len(), games, filters }
}

pub(crate) fn game_detail(state: &AppState, raw_id: &str) -> Result<GameDetailResponse, ApiError> {
    let id = raw_id
        .trim()
        .parse::<i64>()
        .map_err(|e| ApiError::InvalidInput { message: "Invalid game ID", detail: e.to_string() })?;
    let game = state.catalog.find_by_id(id)?;
    let leaderboard = query::game_leaderboard(
        state.leaderboard.entries_for_game(&game.name),
        &game.name,
        DETAIL_LEADERBOARD_LIMIT,
    );
    Ok(GameDetailResponse { game, leaderboard })
}

#[cfg(test)]
#[path = "games_test.rs"]
mod tests;
