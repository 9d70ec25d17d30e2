//! Service info and health routes.

use std::time::Duration;

use axum::extract::State;
use axum::response::Response;
use axum::Extension;
use serde::Serialize;

use super::envelope::{self, RequestId};
use crate::state::AppState;

pub const ENDPOINTS: [&str; 6] = [
    "GET /api/v1/ - Service info",
    "GET /api/v1/health - Health check",
    "GET /api/v1/games - List all games",
    "GET /api/v1/games/:id - Get specific game",
    "GET /api/v1/leaderboard - Get leaderboard",
    "POST /api/v1/score - Submit new score",
];

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub description: &'static str,
    pub endpoints: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
    pub version: String,
    pub environment: &'static str,
    pub timestamp: String,
    pub uptime: String,
    pub games_count: usize,
}

/// `GET /api/v1/` — service metadata.
pub async fn service_info(State(state): State<AppState>, Extension(request_id): Extension<RequestId>) -> Response {
    let info = ServiceInfo {
        service: state.config.app_name.clone(),
        version: state.config.version.clone(),
        description: "Backend API for arcade games collection",
        endpoints: ENDPOINTS.to_vec(),
    };
    envelope::success(&request_id, info, "Service information retrieved successfully")
}

/// `GET /api/v1/health` — liveness plus uptime and catalog size.
pub async fn health(State(state): State<AppState>, Extension(request_id): Extension<RequestId>) -> Response {
    let health = HealthResponse {
        status: "healthy",
        service: state.config.app_name.clone(),
        version: state.config.version.clone(),
        environment: state.config.environment.as_str(),
        timestamp: envelope::now_rfc3339(),
        uptime: format_uptime(state.started_at.elapsed()),
        games_count: state.catalog.names().len(),
    };
    envelope::success(&request_id, health, "Service is healthy")
}

/// Compact `1h2m3s` rendering, dropping leading zero units.
#[must_use]
pub fn format_uptime(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_uptime_drops_leading_zero_units() {
        assert_eq!(format_uptime(Duration::from_millis(900)), "0s");
        assert_eq!(format_uptime(Duration::from_secs(42)), "42s");
        assert_eq!(format_uptime(Duration::from_secs(61)), "1m1s");
        assert_eq!(format_uptime(Duration::from_secs(3600)), "1h0m0s");
        assert_eq!(format_uptime(Duration::from_secs(90_061)), "25h1m1s");
    }
}
