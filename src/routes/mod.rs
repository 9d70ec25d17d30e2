//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the `/api/v1` endpoints onto one Axum router. Layers, outermost
//! first: CORS, HTTP tracing, request-id assignment. Handlers translate
//! between HTTP and the services and wrap every result in the standard
//! envelope (see `envelope`).

pub mod envelope;
pub mod games;
pub mod leaderboard;
pub mod score;
pub mod service;

use axum::Extension;
use axum::Router;
use axum::http::Uri;
use axum::middleware;
use axum::response::Response;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use envelope::{ApiError, RequestId};

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1", get(service::service_info))
        .route("/api/v1/", get(service::service_info))
        .route("/api/v1/health", get(service::health))
        .route("/api/v1/games", get(games::list_games))
        .route("/api/v1/games/{id}", get(games::get_game))
        .route("/api/v1/leaderboard", get(leaderboard::get_leaderboard))
        .route("/api/v1/score", post(score::submit_score))
        .fallback(not_found)
        .layer(middleware::from_fn(envelope::assign_request_id))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn not_found(Extension(request_id): Extension<RequestId>, uri: Uri) -> Response {
    envelope::failure(
        &request_id,
        ApiError::NotFound { message: "Route not found", detail: format!("No route for {}", uri.path()) },
    )
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
