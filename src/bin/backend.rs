//! Stub backend - the external service the site's `/api/*` routes proxy to
//!
//! Usage:
//!   cargo run --bin backend
//!
//! Optional environment variables:
//! - APP_NAME (defaults to "AI Architect Backend")
//! - APP_VERSION (defaults to 0.1.0)
//! - BACKEND_HOST / BACKEND_PORT (defaults to 127.0.0.1:8000)
//! - CORS_ORIGINS (comma separated, defaults to the local frontend)
//! - CHAT_MAX_MESSAGE_CHARS (defaults to 2000)

use anyhow::Result;
use portfolio_site::{backend, config::BackendConfig, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing()?;

    let config = BackendConfig::from_env()?;
    backend::run(config).await
}
