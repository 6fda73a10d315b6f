//! Backstop: a minimal backend with Postgres and Redis health probes.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from the environment, constructs the Postgres pool and the
//! lazy Redis handle, sets up the Axum router, and starts the HTTP server.

use std::sync::Arc;

use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use backstop::config::{AppConfig, DEFAULT_LOG_FILTER};
use backstop::http::server::start_server;
use backstop::probe::postgres::PgProbe;
use backstop::probe::redis::RedisCache;
use backstop::routes::create_router;
use backstop::state::AppState;

/// Backstop: a minimal backend with Postgres and Redis health probes
#[derive(Parser, Debug)]
#[command(name = "backstop", version, about)]
struct Args {
    /// Listen port (overrides the PORT environment variable)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "backstop=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration from the environment
    let mut config = AppConfig::from_env()?;
    if let Some(port) = args.port {
        config.http.port = port;
    }

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Loaded configuration");

    // Postgres pool: created now, opens transport connections on first query
    let pool = PgPoolOptions::new().connect_lazy(&config.postgres.url)?;
    let db = Arc::new(PgProbe::new(pool));
    tracing::info!("Initialized Postgres pool");

    // Redis handle: stays unconnected until the first health check needs it
    let client = redis::Client::open(config.redis.url.as_str())?;
    let cache = Arc::new(RedisCache::new(client));
    tracing::info!("Initialized Redis client");

    // Create application state and router
    let state = AppState::new(config.clone(), db, cache);
    let app = create_router(state);

    // Start server
    start_server(app, &config).await?;

    Ok(())
}
