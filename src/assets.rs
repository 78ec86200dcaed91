//! Static files: the embedded stylesheet and script, and the CV served from disk.

use crate::server::AppState;
use axum::extract::{Query, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::warn;

const SITE_CSS: &str = include_str!("assets/site.css");
const SITE_JS: &str = include_str!("assets/site.js");

/// File name of the resume inside the static directory.
pub const CV_FILE: &str = "cv.pdf";

pub async fn site_css() -> Response {
    (
        [
            (CONTENT_TYPE, "text/css; charset=utf-8"),
            (CACHE_CONTROL, "public, max-age=3600"),
        ],
        SITE_CSS,
    )
        .into_response()
}

/// Client script driving the CV dialog and the chat panel.
pub async fn site_js() -> Response {
    (
        [
            (CONTENT_TYPE, "text/javascript; charset=utf-8"),
            (CACHE_CONTROL, "public, max-age=3600"),
        ],
        SITE_JS,
    )
        .into_response()
}

#[derive(Debug, Default, Deserialize)]
pub struct CvQuery {
    /// Any value (even empty) asks for an attachment instead of inline display.
    pub download: Option<String>,
}

/// `GET /cv.pdf`, inline by default, `?download=1` for an attachment.
pub async fn cv_pdf(State(state): State<AppState>, Query(query): Query<CvQuery>) -> Response {
    let path = state.config.static_dir.join(CV_FILE);
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Cannot read {}: {}", path.display(), e);
            return (StatusCode::NOT_FOUND, "Not Found").into_response();
        }
    };

    let disposition = if query.download.is_some() {
        format!("attachment; filename=\"{}\"", CV_FILE)
    } else {
        format!("inline; filename=\"{}\"", CV_FILE)
    };

    (
        [
            (CONTENT_TYPE, "application/pdf".to_string()),
            (CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response()
}
