use super::*;
use crate::services::leaderboard::NewEntry;
use crate::state::test_helpers;

fn params(category: Option<&str>, difficulty: Option<&str>) -> GamesParams {
    GamesParams { category: category.map(str::to_owned), difficulty: difficulty.map(str::to_owned) }
}

#[test]
fn games_page_unfiltered() {
    let state = test_helpers::test_app_state();
    let page = games_page(&state, &GamesParams::default());
    assert_eq!(page.total, 5);
    let json = serde_json::to_value(&page).unwrap();
    assert!(json.get("filters").is_none());
}

#[test]
fn games_page_echoes_only_given_filters() {
    let state = test_helpers::test_app_state();
    let page = games_page(&state, &params(Some("Classic"), None));
    assert_eq!(page.total, 2);
    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["filters"], serde_json::json!({"category": "Classic"}));
}

#[test]
fn games_page_unmatched_is_empty_not_error() {
    let state = test_helpers::test_app_state();
    let page = games_page(&state, &params(Some("racing"), Some("easy")));
    assert_eq!(page.total, 0);
    assert!(page.games.is_empty());
}

#[test]
fn game_detail_includes_sorted_leaderboard() {
    let state = test_helpers::test_app_state();
    for (player, score) in [("low", 5), ("top", 5000), ("mid", 700)] {
        state.leaderboard.append(NewEntry { player: player.into(), game: "Snake".into(), score });
    }
    let detail = game_detail(&state, "1").unwrap();
    assert_eq!(detail.game.name, "Snake");
    let players: Vec<&str> = detail.leaderboard.iter().map(|e| e.player.as_str()).collect();
    assert_eq!(players, vec!["top", "Player1", "mid", "low"]);
}

#[test]
fn game_detail_caps_at_ten() {
    let state = test_helpers::test_app_state();
    for i in 0..15 {
        state.leaderboard.append(NewEntry { player: format!("p{i}"), game: "Pong".into(), score: i });
    }
    assert_eq!(game_detail(&state, "5").unwrap().leaderboard.len(), 10);
}

#[test]
fn game_detail_non_numeric_is_invalid_input() {
    let state = test_helpers::test_app_state();
    let err = game_detail(&state, "snake").unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { message: "Invalid game ID", .. }));
}

#[test]
fn game_detail_unknown_id_is_not_found() {
    let state = test_helpers::test_app_state();
    let err = game_detail(&state, "77").unwrap_err();
    assert!(matches!(err, ApiError::NotFound { message: "Game not found", .. }));
}

#[tokio::test]
async fn get_game_handler_wraps_envelope() {
    let state = test_helpers::test_app_state();
    let response = get_game(
        State(state),
        Extension(RequestId("abc".into())),
        Path("4".into()),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["data"]["game"]["name"], "Space Invaders");
    assert_eq!(body["data"]["game"]["highScore"], 23400);
    assert_eq!(body["data"]["leaderboard"], serde_json::json!([]));
    assert_eq!(body["requestId"], "abc");
}
