use super::*;
use crate::state::test_helpers;
use serde_json::{Value, json};

/// Serve a freshly seeded app on an ephemeral port and return its base URL.
async fn spawn_app() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = app(test_helpers::test_app_state());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api/v1")
}

async fn get_json(url: &str) -> (u16, Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

async fn post_score(base: &str, body: &Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("{base}/score"))
        .json(body)
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn service_info_and_health() {
    let base = spawn_app().await;

    let (status, body) = get_json(&format!("{base}/")).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["service"], "Skips API");
    assert_eq!(body["data"]["endpoints"].as_array().unwrap().len(), 6);

    let (status, body) = get_json(&format!("{base}/health")).await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Service is healthy");
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["gamesCount"], 5);
}

#[tokio::test]
async fn request_id_is_echoed_or_generated() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base}/games"))
        .header("X-Request-ID", "trace-me")
        .send()
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "trace-me");
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["requestId"], "trace-me");

    let response = client.get(format!("{base}/games")).send().await.unwrap();
    let header = response.headers()["x-request-id"].to_str().unwrap().to_owned();
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["requestId"], header);
    assert_eq!(header.len(), 36);
}

#[tokio::test]
async fn list_games_with_filters() {
    let base = spawn_app().await;
    let (status, body) = get_json(&format!("{base}/games?category=CLASSIC&difficulty=easy")).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["total"], 2);
    assert_eq!(body["data"]["filters"], json!({"category": "CLASSIC", "difficulty": "easy"}));
}

#[tokio::test]
async fn get_game_errors() {
    let base = spawn_app().await;

    let (status, body) = get_json(&format!("{base}/games/abc")).await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "Invalid game ID");
    assert_eq!(body["success"], false);

    let (status, body) = get_json(&format!("{base}/games/99")).await;
    assert_eq!(status, 404);
    assert_eq!(body["message"], "Game not found");
}

#[tokio::test]
async fn submit_then_read_back() {
    let base = spawn_app().await;

    let (status, body) = post_score(&base, &json!({"player": "Ada", "game": "snake", "score": 1300})).await;
    assert_eq!(status, 200);
    let data = &body["data"];
    assert_eq!(data["message"], "Score submitted successfully");
    assert_eq!(data["entry"]["game"], "Snake");
    assert_eq!(data["rank"], 1);
    assert_eq!(data["isNewHighScore"], true);
    assert_eq!(data["gameHighScore"], 1300);

    let (_, body) = post_score(&base, &json!({"player": "Ada", "game": "snake", "score": 1300})).await;
    assert_eq!(body["data"]["isNewHighScore"], false);

    let (_, body) = get_json(&format!("{base}/games/1")).await;
    assert_eq!(body["data"]["game"]["highScore"], 1300);
    assert_eq!(body["data"]["leaderboard"].as_array().unwrap().len(), 3);

    let (_, body) = get_json(&format!("{base}/leaderboard?game=Snake&limit=1")).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["leaderboard"][0]["player"], "Ada");
    assert_eq!(body["data"]["filters"], json!({"game": "Snake", "limit": 1}));
}

#[tokio::test]
async fn submit_rejections() {
    let base = spawn_app().await;

    let (status, body) = post_score(&base, &json!({"player": "Ada", "game": "Snake", "score": -1})).await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], "E_INVALID_INPUT");

    let (status, body) = post_score(&base, &json!({"player": "Ada", "game": "Chess", "score": 10})).await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "Invalid game");
    assert_eq!(body["error"], "Available games: Snake, Tetris, Pac-Man, Space Invaders, Pong");

    let (status, body) = post_score(&base, &json!({"game": "Snake", "score": 10})).await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "Invalid request data");

    let (status, body) = post_score(&base, &json!({"player": "Ada", "game": "Snake", "score": "lots"})).await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], "E_INVALID_INPUT");

    // Nothing above reached the stores.
    let (_, body) = get_json(&format!("{base}/leaderboard")).await;
    assert_eq!(body["data"]["total"], 3);
    let (_, body) = get_json(&format!("{base}/games/1")).await;
    assert_eq!(body["data"]["game"]["highScore"], 1250);
}

#[tokio::test]
async fn unknown_route_uses_envelope() {
    let base = spawn_app().await;
    let (status, body) = get_json(&format!("{base}/nope")).await;
    assert_eq!(status, 404);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "E_NOT_FOUND");
}
