//! Pass-through endpoints relaying to the external backend.
//!
//! On success the backend's status and JSON body are returned untouched. Any
//! failure to reach the backend or to read its JSON collapses into a fixed
//! envelope with `502 Bad Gateway`.

use crate::server::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("backend unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    #[error("backend returned an unreadable body: {0}")]
    InvalidBody(#[source] reqwest::Error),
}

/// Envelope returned by `GET /api/health` when the backend cannot be reached.
pub fn health_failure_envelope() -> Value {
    json!({"status": "error", "reason": "backend_unreachable"})
}

/// Envelope returned by `POST /api/chat` when the backend cannot be reached.
pub fn chat_failure_envelope() -> Value {
    json!({"message": "Backend unreachable"})
}

async fn forward(request: reqwest::RequestBuilder) -> Result<(StatusCode, Value), ProxyError> {
    let response = request.send().await.map_err(ProxyError::Unreachable)?;
    let status = response.status();
    let body: Value = response.json().await.map_err(ProxyError::InvalidBody)?;
    Ok((status, body))
}

/// `GET /api/health`
pub async fn health(State(state): State<AppState>) -> Response {
    let url = format!("{}/health", state.config.api_base_url);
    let request = state.client.get(&url).header(CACHE_CONTROL, "no-store");

    let (status, body) = match forward(request).await {
        Ok((status, body)) => {
            debug!(%status, "Health check forwarded");
            (status, body)
        }
        Err(e) => {
            warn!("Health proxy failed: {}", e);
            (StatusCode::BAD_GATEWAY, health_failure_envelope())
        }
    };

    (status, [(CACHE_CONTROL, "no-store")], Json(body)).into_response()
}

/// `POST /api/chat`
///
/// The request body is forwarded as-is; it is not parsed here.
pub async fn chat(State(state): State<AppState>, body: Bytes) -> Response {
    let url = format!("{}/chat", state.config.api_base_url);
    let request = state
        .client
        .post(&url)
        .header(CONTENT_TYPE, "application/json")
        .body(body);

    match forward(request).await {
        Ok((status, body)) => {
            debug!(%status, "Chat message forwarded");
            (status, Json(body)).into_response()
        }
        Err(e) => {
            warn!("Chat proxy failed: {}", e);
            (StatusCode::BAD_GATEWAY, Json(chat_failure_envelope())).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_envelope_shape() {
        let envelope = health_failure_envelope();
        assert_eq!(envelope, json!({"status": "error", "reason": "backend_unreachable"}));
        assert_eq!(envelope.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_chat_envelope_shape() {
        assert_eq!(chat_failure_envelope(), json!({"message": "Backend unreachable"}));
    }
}
