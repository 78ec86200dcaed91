use crate::config::Config;
use crate::locale_router::normalize_locale;
use crate::{assets, pages, proxy};
use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::{middleware, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            client: reqwest::Client::new(),
        }
    }
}

/// Build the site router. The locale middleware wraps every route.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(proxy::health))
        .route("/api/chat", post(proxy::chat))
        .route("/assets/site.css", get(assets::site_css))
        .route("/assets/site.js", get(assets::site_js))
        .route("/cv.pdf", get(assets::cv_pdf))
        .route("/:locale", get(pages::home_page))
        .route("/:locale/projets", get(pages::projects_page))
        .route("/:locale/chat", get(pages::chat_page))
        .fallback(pages::not_found)
        .layer(middleware::from_fn(normalize_locale))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve_with_shutdown<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Site server error")
}

/// Bind the configured address and serve until Ctrl+C.
pub async fn run(config: Config) -> Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🌐 Site listening on http://{}", addr);
    info!("Backend base URL: {}", config.api_base_url);

    serve_with_shutdown(listener, AppState::new(config), shutdown_signal()).await
}

pub(crate) async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
