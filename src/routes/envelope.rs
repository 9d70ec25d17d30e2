//! Response envelope, request identifiers, and the API error taxonomy.
//!
//! Every response body, success or failure, is wrapped as
//! `{success, message, data | error, code, timestamp, requestId}`.

use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

use crate::services::catalog::CatalogError;
use crate::services::score::ScoreError;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

// =============================================================================
// REQUEST ID
// =============================================================================

/// Correlation id for one request, inserted as a request extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

/// Reuse the caller's `X-Request-ID` or mint a UUID, and echo it back.
pub async fn assign_request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), str::to_owned);

    req.extensions_mut().insert(RequestId(id.clone()));
    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

// =============================================================================
// ERRORS
// =============================================================================

/// Grepable error code and HTTP status for envelope failures.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn status(&self) -> StatusCode;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{message}: {detail}")]
    InvalidInput { message: &'static str, detail: String },
    #[error("Invalid game: {detail}")]
    UnknownGame { detail: String },
    #[error("{message}: {detail}")]
    NotFound { message: &'static str, detail: String },
}

impl ApiError {
    #[must_use]
    pub fn invalid_request(detail: impl Into<String>) -> Self {
        Self::InvalidInput { message: "Invalid request data", detail: detail.into() }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::InvalidInput { message, .. } | Self::NotFound { message, .. } => *message,
            Self::UnknownGame { .. } => "Invalid game",
        }
    }

    fn detail(&self) -> &str {
        match self {
            Self::InvalidInput { detail, .. } | Self::UnknownGame { detail } | Self::NotFound { detail, .. } => {
                detail.as_str()
            }
        }
    }
}

impl ErrorCode for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "E_INVALID_INPUT",
            Self::UnknownGame { .. } => "E_UNKNOWN_GAME",
            Self::NotFound { .. } => "E_NOT_FOUND",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput { .. } | Self::UnknownGame { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::GameNotFound(_) => {
                Self::NotFound { message: "Game not found", detail: "No game found with the specified ID".into() }
            }
            CatalogError::NameNotFound(name) => {
                Self::NotFound { message: "Game not found", detail: format!("No game named {name}") }
            }
        }
    }
}

impl From<ScoreError> for ApiError {
    fn from(err: ScoreError) -> Self {
        match err {
            ScoreError::InvalidInput(reason) => Self::invalid_request(reason),
            ScoreError::UnknownGame { available, .. } => {
                Self::UnknownGame { detail: format!("Available games: {}", available.join(", ")) }
            }
            ScoreError::Catalog(e) => e.into(),
        }
    }
}

// =============================================================================
// ENVELOPE
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    pub timestamp: String,
    pub request_id: String,
}

/// Current UTC time as RFC 3339.
#[must_use]
pub fn now_rfc3339() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
}

/// 200 with `data` wrapped in a success envelope.
pub fn success<T: Serialize>(request_id: &RequestId, data: T, message: &str) -> Response {
    let body = Envelope {
        success: true,
        message: Some(message.to_owned()),
        data: Some(data),
        error: None,
        code: None,
        timestamp: now_rfc3339(),
        request_id: request_id.0.clone(),
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// Failure envelope with the error's status code.
pub fn failure(request_id: &RequestId, err: ApiError) -> Response {
    tracing::debug!(request_id = %request_id.0, code = err.error_code(), error = %err, "request failed");
    let body: Envelope<()> = Envelope {
        success: false,
        message: Some(err.message().to_owned()),
        data: None,
        error: Some(err.detail().to_owned()),
        code: Some(err.error_code()),
        timestamp: now_rfc3339(),
        request_id: request_id.0.clone(),
    };
    (err.status(), Json(body)).into_response()
}

/// Collapse a handler result into an envelope response.
pub fn respond<T: Serialize>(request_id: &RequestId, result: Result<T, ApiError>, message: &str) -> Response {
    match result {
        Ok(data) => success(request_id, data, message),
        Err(err) => failure(request_id, err),
    }
}

#[cfg(test)]
#[path = "envelope_test.rs"]
mod tests;
