//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use cotacao_types::{ExchangeRateProvider, ExchangeRepository};

use super::handlers::{self, AppState};
use crate::QuoteService;

/// HTTP Server for the quote relay.
pub struct HttpServer<P: ExchangeRateProvider, R: ExchangeRepository> {
    state: Arc<AppState<P, R>>,
}

impl<P: ExchangeRateProvider, R: ExchangeRepository> HttpServer<P, R> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: QuoteService<P, R>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
        }
    }

    pub fn service(&self) -> &QuoteService<P, R> {
        &self.state.service
    }

    /// Builds the Axum router.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/cotacao", get(handlers::cotacao::<P, R>))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
