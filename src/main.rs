use anyhow::Result;
use portfolio_site::{config::Config, init_tracing, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    init_tracing()?;

    info!("Starting portfolio site");

    let config = Config::from_env()?;
    server::run(config).await?;

    info!("Site stopped");
    Ok(())
}
