//! vidlist-ui - video catalog web service
//!
//! Accepts YouTube watch URLs with a name and notes, stores them under a
//! unique derived identifier, and serves a searchable sorted listing.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vidlist_common::db::init_database;
use vidlist_ui::{build_router, AppState};

/// Command-line arguments for vidlist-ui
#[derive(Parser, Debug)]
#[command(name = "vidlist-ui")]
#[command(about = "Video catalog web service")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5730", env = "VIDLIST_PORT")]
    port: u16,

    /// Path to the SQLite database file
    #[arg(short, long, default_value = "vidlist.db", env = "VIDLIST_DB")]
    database: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vidlist_ui=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!("Starting vidlist-ui v{}", env!("CARGO_PKG_VERSION"));
    info!("Database path: {}", args.database.display());

    let pool = init_database(&args.database)
        .await
        .context("Failed to initialize database")?;

    let state = AppState::new(pool);
    let app = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("vidlist-ui listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
