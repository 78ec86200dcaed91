//! Locale normalization applied to every request before page handlers run.
//!
//! Asset and API paths pass through untouched. Any other path whose first
//! segment is not a supported locale is redirected under the default locale,
//! so `/xx/page` becomes `/fr/xx/page`. The router never rejects a path.

use crate::i18n::Locale;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::debug;

/// Path prefix for embedded stylesheets and other framework assets.
pub const ASSETS_PREFIX: &str = "/assets";

/// Path prefix for the backend proxy endpoints.
pub const API_PREFIX: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    PassThrough,
    Redirect(String),
}

fn under_prefix(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

fn has_file_extension(path: &str) -> bool {
    path.rsplit('/').next().is_some_and(|last| last.contains('.'))
}

/// Decide what to do with a request path. Pure, no I/O.
///
/// The query string is dropped when redirecting the bare root and preserved
/// for every other redirect.
pub fn route_request(path: &str, query: Option<&str>) -> RouteDecision {
    if under_prefix(path, ASSETS_PREFIX) || under_prefix(path, API_PREFIX) || has_file_extension(path) {
        return RouteDecision::PassThrough;
    }

    if path.is_empty() || path == "/" {
        return RouteDecision::Redirect(format!("/{}", Locale::DEFAULT));
    }

    let first_segment = path.trim_start_matches('/').split('/').next().unwrap_or("");
    if Locale::is_supported(first_segment) {
        if !path.ends_with('/') {
            return RouteDecision::PassThrough;
        }
        // `/en/` and `/en/projets/` resolve to the routes without the slash
        let trimmed = format!("/{}", path.trim_matches('/'));
        return RouteDecision::Redirect(with_query(trimmed, query));
    }

    let suffix = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };
    RouteDecision::Redirect(with_query(format!("/{}{}", Locale::DEFAULT, suffix), query))
}

fn with_query(mut location: String, query: Option<&str>) -> String {
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        location.push('?');
        location.push_str(q);
    }
    location
}

/// Axum middleware wrapping [`route_request`].
pub async fn normalize_locale(req: Request, next: Next) -> Response {
    let uri = req.uri().clone();
    match route_request(uri.path(), uri.query()) {
        RouteDecision::PassThrough => next.run(req).await,
        RouteDecision::Redirect(location) => {
            debug!(from = %uri, to = %location, "Redirecting to localized path");
            Redirect::temporary(&location).into_response()
        }
    }
}
