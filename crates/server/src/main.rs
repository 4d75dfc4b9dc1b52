//! Stockroom mock inventory API server.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use stockroom_server::config::Config;
use stockroom_server::state::AppState;

/// Command-line overrides for environment configuration.
#[derive(Debug, Parser)]
#[command(name = "stockroom", about = "Mock inventory API server")]
struct Args {
    /// Port to listen on (overrides PORT).
    #[arg(long)]
    port: Option<u16>,

    /// JSON seed file for the in-memory store (overrides SEED_PATH).
    #[arg(long)]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    info!("Starting Stockroom mock inventory API");

    let args = Args::parse();
    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(seed) = args.seed {
        config.seed_path = Some(seed);
    }
    info!(port = config.port, "Configuration loaded");

    let state = AppState::new(&config).context("failed to initialize application state")?;
    info!(
        categories = state.inventory().category_count(),
        brands = state.inventory().brand_count(),
        products = state.inventory().product_count(),
        "Seed data loaded"
    );

    let app = stockroom_server::router()
        .layer(stockroom_server::cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind to address")?;

    info!(%addr, "Server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
