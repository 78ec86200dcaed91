//! Server-rendered pages.
//!
//! Every handler re-validates the locale segment even though the router
//! middleware already did; an invalid tag falls back to the default locale.

pub mod chat;
pub mod home;
pub mod html;
pub mod projects;
pub mod status;

use crate::content::{self, PROFILE};
use crate::error::AppError;
use crate::i18n::{dictionary, Locale};
use axum::extract::Path;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};

pub async fn home_page(Path(locale): Path<String>, uri: Uri) -> Result<Html<String>, AppError> {
    let locale = Locale::from_code_or_default(&locale);
    let dict = dictionary(locale)?;
    Ok(Html(home::render(locale, dict, &PROFILE, uri.path())))
}

pub async fn projects_page(Path(locale): Path<String>, uri: Uri) -> Result<Html<String>, AppError> {
    let locale = Locale::from_code_or_default(&locale);
    let dict = dictionary(locale)?;
    let list = content::projects(locale);
    Ok(Html(projects::render(locale, dict, list, uri.path())))
}

pub async fn chat_page(Path(locale): Path<String>, uri: Uri) -> Result<Html<String>, AppError> {
    let locale = Locale::from_code_or_default(&locale);
    let dict = dictionary(locale)?;
    Ok(Html(chat::render(locale, dict, uri.path())))
}

/// Fallback for anything no route matched.
///
/// Paths under a locale get a localized page; anything else (unknown API
/// routes, missing assets) gets a bare 404.
pub async fn not_found(uri: Uri) -> Result<Response, AppError> {
    let first = uri.path().trim_start_matches('/').split('/').next().unwrap_or("");
    let Some(locale) = Locale::from_code(first) else {
        return Ok((StatusCode::NOT_FOUND, "Not Found").into_response());
    };

    let dict = dictionary(locale)?;
    Ok((
        StatusCode::NOT_FOUND,
        Html(status::not_found(locale, dict, uri.path())),
    )
        .into_response())
}
