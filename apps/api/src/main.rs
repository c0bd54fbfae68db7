mod config;
mod errors;
mod layout;
mod render;
mod routes;
mod state;
mod vocab;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::render::fonts::select_font;
use crate::routes::build_router;
use crate::state::AppState;
use crate::vocab::{HttpVocabFetcher, VocabSource};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting worksheet API v{}", env!("CARGO_PKG_VERSION"));

    // One-time font capability check; the handle is passed down to every render.
    let font = select_font(&config.cjk_font_path);
    info!("Glyph font: {}", font.describe());

    // Vocabulary source: remote wordlists with embedded fallback, memoized per level.
    let fetcher = HttpVocabFetcher::new(config.data_base_url.clone(), config.fetch_timeout)?;
    let vocab = Arc::new(VocabSource::new(Arc::new(fetcher)));

    let state = AppState { vocab, font };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
