//! # Cotacao Server
//!
//! Binary that wires together all the components:
//! - Build the fixed configuration
//! - Open the SQLite store and ensure the table exists
//! - Create the quote service over the upstream adapter
//! - Start the HTTP server

mod config;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cotacao_hex::{QuoteService, inbound::HttpServer};
use cotacao_repo::build_repo;
use exchange_rates::AwesomeApiProvider;

/// Serves `GET /cotacao` on port 8080. Takes no options.
#[derive(Parser)]
#[command(name = "cotacao-server")]
#[command(author, version, about, long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = Cli::parse();

    // .env may carry RUST_LOG
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cotacao_app=debug,cotacao_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::default();

    tracing::info!("Starting cotacao server on port {}", config.port);
    tracing::info!("Using database: {}", config.database_url);
    tracing::info!("Upstream: {}", config.upstream_url);

    // Build repository (handles connection and table creation)
    let repo = build_repo(&config.database_url).await?;

    let provider = AwesomeApiProvider::new(config.upstream_url.clone());
    let service = QuoteService::new(provider, repo)
        .with_timeouts(config.fetch_timeout, config.insert_timeout);

    let server = HttpServer::new(service);
    server.run(&config.bind_addr()).await?;

    Ok(())
}
