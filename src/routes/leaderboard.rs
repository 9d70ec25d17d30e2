//! Global leaderboard route.

use axum::extract::{Query, State};
use axum::response::Response;
use axum::Extension;
use serde::{Deserialize, Serialize};

use super::envelope::{self, RequestId};
use crate::services::query::{self, LeaderboardQuery};
use crate::state::{AppState, LeaderboardEntry};

/// Raw query string. `limit` stays a string so a non-numeric value falls
/// back to the default instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardParams {
    pub game: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<LeaderboardEntry>,
    pub total: usize,
    pub filters: LeaderboardQuery,
}

/// `GET /api/v1/leaderboard` — top scores, optionally for one game.
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<LeaderboardParams>,
) -> Response {
    envelope::success(&request_id, leaderboard_page(&state, &params), "Leaderboard retrieved successfully")
}

pub(crate) fn leaderboard_page(state: &AppState, params: &LeaderboardParams) -> LeaderboardResponse {
    let filters = LeaderboardQuery::from_params(params.game.as_deref(), params.limit.as_deref());
    let leaderboard = query::leaderboard(state.leaderboard.all_entries(), &filters);
    LeaderboardResponse { total: leaderboard.len(), leaderboard, filters }
}
