//! Stub of the external backend the site proxies to.
//!
//! Answers `GET /health` with service metadata and `POST /chat` with canned,
//! locale-aware replies. There is no session memory and no model behind it.

use crate::config::BackendConfig;
use crate::content;
use crate::i18n::Locale;
use anyhow::{Context, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::{Arc, OnceLock};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Longest session id kept after sanitizing.
pub const SESSION_ID_MAX_LEN: usize = 64;

static SESSION_ID_STRIP: OnceLock<Regex> = OnceLock::new();

const GREETINGS: &[&str] = &[
    "salut", "bonjour", "bonsoir", "coucou", "yo", "hey", "hello", "hi", "slt",
];

#[derive(Debug, Deserialize)]
pub struct ChatPayload {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub response: String,
}

#[derive(Clone)]
pub struct BackendState {
    pub config: Arc<BackendConfig>,
}

/// Keep `[A-Za-z0-9_-]`, cap the length, and drop ids that end up empty.
pub fn normalize_session_id(raw: Option<&str>) -> Option<String> {
    let text = raw.unwrap_or("").trim();
    if text.is_empty() {
        return None;
    }
    let re = SESSION_ID_STRIP.get_or_init(|| {
        Regex::new(r"[^a-zA-Z0-9_-]").expect("session id pattern is valid")
    });
    let cleaned: String = re
        .replace_all(text, "")
        .chars()
        .take(SESSION_ID_MAX_LEN)
        .collect();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Words that mark a message as written in English.
const ENGLISH_MARKERS: &[&str] = &[
    "hello", "hi", "hey", "who are you", "who r you", "what do you do", "tell me", "about",
    "projects", "project", "career", "background", "education", "can you", "please",
];

/// Words that mark a message as written in French.
const FRENCH_MARKERS: &[&str] = &[
    "bonjour", "salut", "parle", "projet", "parcours", "études", "realisations", "réalisations",
    "scolaire",
];

fn marker_score(text: &str, markers: &[&str]) -> usize {
    markers.iter().filter(|marker| text.contains(*marker)).count()
}

/// Language of the reply.
///
/// The language the message is written in wins: marker words are counted
/// for each language and the higher score decides. On a tie the UI locale
/// hint decides (`en*` or `fr*`), and French is the last resort.
pub fn resolve_response_locale(message: &str, hint: Option<&str>) -> Locale {
    let text = message.trim().to_lowercase();
    let en_score = marker_score(&text, ENGLISH_MARKERS);
    let fr_score = marker_score(&text, FRENCH_MARKERS);

    if en_score > fr_score {
        return Locale::En;
    }
    if fr_score > en_score {
        return Locale::Fr;
    }

    let hint = hint.unwrap_or("").trim().to_lowercase();
    if hint.starts_with("en") {
        Locale::En
    } else {
        Locale::Fr
    }
}

/// A short greeting such as `salut`, `hello !` or `hey assistant`.
pub fn is_greeting(message: &str) -> bool {
    let normalized: String = message
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c.is_whitespace() { c } else { ' ' })
        .collect();
    let words: Vec<&str> = normalized.split_whitespace().collect();

    match words.first() {
        Some(first) => GREETINGS.contains(first) && words.len() <= 3,
        None => false,
    }
}

pub fn greeting_answer(locale: Locale) -> String {
    match locale {
        Locale::En => "Hello, I am the AI assistant for Saleh Minawi's portfolio.\n\
I can present his background, his deep learning projects, his AI architecture approach, or his work on CI/CD log analysis systems."
            .to_string(),
        Locale::Fr => "Bonjour, je suis l'assistant IA du portfolio de Saleh Minawi.\n\
Je peux vous présenter son parcours, ses projets en deep learning, son approche architecture IA ou ses travaux autour des systèmes d'analyse de logs CI/CD."
            .to_string(),
    }
}

/// Fixed demo reply listing the published projects.
pub fn demo_answer(locale: Locale) -> String {
    let header = match locale {
        Locale::En => "This assistant is a demo. Here are the projects you can explore on the site:",
        Locale::Fr => "Cet assistant est une démo. Voici les projets à découvrir sur le site :",
    };
    let mut lines = vec![header.to_string()];
    for (i, project) in content::projects(locale).iter().enumerate() {
        lines.push(format!("{}) {}", i + 1, project.name));
    }
    lines.join("\n")
}

fn detail(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

pub async fn health(State(state): State<BackendState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": state.config.app_name,
        "version": state.config.app_version,
    }))
}

pub async fn chat(
    State(state): State<BackendState>,
    payload: Result<Json<ChatPayload>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            debug!("Rejected chat payload: {}", rejection.body_text());
            return detail(rejection.status(), rejection.body_text());
        }
    };
    let message = payload.message.trim();
    let session_id = normalize_session_id(payload.session_id.as_deref());
    let locale = resolve_response_locale(message, payload.locale.as_deref());

    if message.is_empty() {
        return detail(StatusCode::BAD_REQUEST, "message is required".to_string());
    }
    let max = state.config.chat_max_message_chars;
    if message.chars().count() > max {
        return detail(
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("message too long (max {} chars)", max),
        );
    }

    debug!(session = ?session_id, %locale, "Chat message received");

    let response = if is_greeting(message) {
        greeting_answer(locale)
    } else {
        demo_answer(locale)
    };
    (StatusCode::OK, Json(ChatReply { response })).into_response()
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn build_router(config: BackendConfig) -> Router {
    let cors = cors_layer(&config.cors_origins);
    let state = BackendState {
        config: Arc::new(config),
    };
    Router::new()
        .route("/health", get(health))
        .route("/chat", post(chat))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: BackendConfig) -> Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🤖 {} {} listening on http://{}", config.app_name, config.app_version, addr);

    axum::serve(listener, build_router(config))
        .with_graceful_shutdown(crate::server::shutdown_signal())
        .await
        .context("Backend server error")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Session Id Tests ====================

    #[test]
    fn test_normalize_session_id_strips_and_truncates() {
        assert_eq!(normalize_session_id(Some(" ab c-1_$ ")), Some("abc-1_".to_string()));
        let long = "x".repeat(100);
        assert_eq!(normalize_session_id(Some(&long)).unwrap().len(), SESSION_ID_MAX_LEN);
    }

    #[test]
    fn test_normalize_session_id_empty_cases() {
        assert_eq!(normalize_session_id(None), None);
        assert_eq!(normalize_session_id(Some("   ")), None);
        assert_eq!(normalize_session_id(Some("$$$")), None);
    }

    // ==================== Locale Tests ====================

    #[test]
    fn test_resolve_response_locale_falls_back_to_hint() {
        assert_eq!(resolve_response_locale("ok", Some("en")), Locale::En);
        assert_eq!(resolve_response_locale("ok", Some("EN-us")), Locale::En);
        assert_eq!(resolve_response_locale("ok", Some("fr")), Locale::Fr);
        assert_eq!(resolve_response_locale("ok", Some("de")), Locale::Fr);
        assert_eq!(resolve_response_locale("ok", None), Locale::Fr);
    }

    #[test]
    fn test_message_language_wins_over_hint() {
        assert_eq!(resolve_response_locale("hello", Some("fr")), Locale::En);
        assert_eq!(resolve_response_locale("Tell me about his career", Some("fr")), Locale::En);
        assert_eq!(resolve_response_locale("Bonjour", Some("en")), Locale::Fr);
        assert_eq!(resolve_response_locale("parle moi de son parcours", Some("en")), Locale::Fr);
    }

    #[test]
    fn test_marker_tie_uses_hint() {
        // "salut" (fr) and "hey" (en) cancel out
        assert_eq!(resolve_response_locale("salut hey", Some("en")), Locale::En);
        assert_eq!(resolve_response_locale("salut hey", None), Locale::Fr);
    }

    // ==================== Canned Answer Tests ====================

    #[test]
    fn test_is_greeting() {
        assert!(is_greeting("salut"));
        assert!(is_greeting("Hello !"));
        assert!(is_greeting("hey assistant"));
        assert!(!is_greeting("hello there my friend"));
        assert!(!is_greeting("parle moi de ses projets"));
        assert!(!is_greeting("   "));
    }

    #[test]
    fn test_demo_answer_lists_projects() {
        let answer = demo_answer(Locale::En);
        assert!(answer.contains("1) IA Training"));
        assert!(answer.contains("3) Ourtiguet Naturel"));
        assert_eq!(answer.lines().count(), 4);
    }

    #[test]
    fn test_greeting_answer_is_localized() {
        assert!(greeting_answer(Locale::Fr).starts_with("Bonjour"));
        assert!(greeting_answer(Locale::En).starts_with("Hello"));
    }
}
