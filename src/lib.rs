//! Bilingual portfolio site: localized server-rendered pages, a locale
//! normalizing router, proxy endpoints to an external chat backend, and the
//! chat demo panel.

pub mod assets;
pub mod backend;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod locale_router;
pub mod pages;
pub mod proxy;
pub mod server;

/// Install the tracing subscriber used by every binary.
///
/// `RUST_LOG` overrides the default `portfolio_site=info` directive.
pub fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_site=info".parse()?),
        )
        .init();
    Ok(())
}
