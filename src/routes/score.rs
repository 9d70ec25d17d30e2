//! Score submission route.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{Json, Response};
use axum::Extension;
use serde::Serialize;

use super::envelope::{self, ApiError, RequestId};
use crate::services::score::{self as workflow, ScoreReceipt, ScoreSubmission};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub message: &'static str,
    #[serde(flatten)]
    pub receipt: ScoreReceipt,
}

/// `POST /api/v1/score` — submit a score.
///
/// Body: `{"player": string, "game": string, "score": integer}`. A body that
/// fails to parse is reported as invalid input, same as a failed validation.
pub async fn submit_score(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    body: Result<Json<ScoreSubmission>, JsonRejection>,
) -> Response {
    let result = body
        .map_err(|rejection| ApiError::invalid_request(rejection.body_text()))
        .and_then(|Json(submission)| accept(&state, submission));
    envelope::respond(&request_id, result, "Score submitted successfully")
}

fn accept(state: &AppState, submission: ScoreSubmission) -> Result<ScoreResponse, ApiError> {
    let receipt = workflow::submit_score(&state.catalog, &state.leaderboard, submission)?;
    Ok(ScoreResponse { message: "Score submitted successfully", receipt })
}
