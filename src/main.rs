//! # Globo Posts
//!
//! A small HTTP service that scrapes the headline row of a news homepage
//! and serves the posts it finds as JSON.
//!
//! ## Usage
//!
//! ```sh
//! globo_posts --listen 0.0.0.0:3000
//! curl http://localhost:3000/posts
//! ```
//!
//! ## Architecture
//!
//! Each `GET /posts` runs an independent pipeline:
//! 1. **Fetching**: One GET of the homepage with a browser User-Agent
//! 2. **Extracting**: Parse the HTML and collect `.post-row.with-6-posts .post` links
//! 3. **Responding**: `200 {"posts": [...]}`, or `500 {"message", "error"}` if the fetch failed

use clap::Parser;
use std::error::Error;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cli;
mod config;
mod error;
mod models;
mod scrapers;
mod utils;

use api::AppState;
use cli::Cli;
use config::ConfigOverrides;
use scrapers::PostScraper;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "globo_posts starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // ---- Load config: CLI/env > file > defaults ----
    let file_overrides = match args.config.as_deref() {
        Some(path) => config::load_overrides(path)?,
        None => ConfigOverrides::default(),
    };
    let scraper_config = args.overrides().or(file_overrides).resolve()?;
    info!(
        target_url = %scraper_config.target_url,
        timeout_secs = scraper_config.timeout.as_secs_f64(),
        "Resolved scraper configuration"
    );

    let scraper = PostScraper::new(&scraper_config)?;
    debug!(target_url = %scraper.target_url(), "Scraper ready");
    let app = api::router(AppState { scraper });

    let listener = tokio::net::TcpListener::bind(&args.listen).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
