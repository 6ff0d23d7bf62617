//! # Cotacao Client SDK
//!
//! Fetches the current bid from the cotacao server under a deadline and
//! saves it to a local text file.

use std::path::Path;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::io::AsyncWriteExt;

use cotacao_types::{BidQuote, Deadline};

/// Server route the client calls.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/cotacao";

/// Budget for the whole request, body included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(300);

/// File written in the working directory.
pub const OUTPUT_FILE: &str = "cotacao.txt";

/// Error type for client operations.
///
/// Each variant renders as a fixed message; the underlying cause, if any,
/// is kept as the error source.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to request exchange rate")]
    BuildRequest(#[source] reqwest::Error),

    #[error("failed to request exchange rate")]
    Transport(#[source] reqwest::Error),

    #[error("server timed out")]
    ServerTimedOut,

    #[error("failed to read response content")]
    ReadResponse(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to create exchange rate file")]
    CreateFile(#[source] std::io::Error),

    #[error("failed to save exchange rate")]
    WriteFile(#[source] std::io::Error),
}

/// Cotacao server client.
pub struct CotacaoClient {
    endpoint: String,
    http: Client,
}

impl CotacaoClient {
    /// Creates a new client for the given route URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Requests the current quote.
    ///
    /// The deadline covers connecting, the response head and the body.
    /// Expiry before the head arrives is a transport failure; expiry while
    /// reading the body is a read failure.
    pub async fn fetch_bid(&self, deadline: Deadline) -> Result<BidQuote, ClientError> {
        let request = self
            .http
            .get(&self.endpoint)
            .timeout(deadline.remaining())
            .build()
            .map_err(ClientError::BuildRequest)?;

        let resp = self
            .http
            .execute(request)
            .await
            .map_err(ClientError::Transport)?;

        if resp.status() == StatusCode::GATEWAY_TIMEOUT {
            return Err(ClientError::ServerTimedOut);
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| ClientError::ReadResponse(Box::new(e)))?;

        serde_json::from_slice(&body).map_err(|e| ClientError::ReadResponse(Box::new(e)))
    }

    /// One fetch-and-save cycle. The file is only touched after a
    /// successful fetch.
    pub async fn fetch_and_save(
        &self,
        deadline: Deadline,
        path: impl AsRef<Path>,
    ) -> Result<BidQuote, ClientError> {
        let quote = self.fetch_bid(deadline).await?;
        save_quote(path, &quote).await?;
        Ok(quote)
    }
}

impl Default for CotacaoClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

/// Truncates (or creates) `path` and writes the single `Dólar: <bid>` line.
pub async fn save_quote(path: impl AsRef<Path>, quote: &BidQuote) -> Result<(), ClientError> {
    let mut file = tokio::fs::File::create(path)
        .await
        .map_err(ClientError::CreateFile)?;

    file.write_all(quote.file_line().as_bytes())
        .await
        .map_err(ClientError::WriteFile)?;
    file.flush().await.map_err(ClientError::WriteFile)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::{Router, http::StatusCode as AxumStatus, routing::get};

    use super::*;

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/cotacao")
    }

    fn quote_server(body: &'static str) -> Router {
        Router::new().route("/cotacao", get(move || async move { body }))
    }

    fn budget() -> Deadline {
        Deadline::after(Duration::from_secs(2))
    }

    #[test]
    fn test_default_client_targets_local_server() {
        let client = CotacaoClient::default();
        assert_eq!(client.endpoint(), "http://localhost:8080/cotacao");
        assert_eq!(DEFAULT_TIMEOUT, Duration::from_millis(300));
        assert_eq!(OUTPUT_FILE, "cotacao.txt");
    }

    #[tokio::test]
    async fn test_fetch_and_save_overwrites_file() {
        let url = spawn_server(quote_server(r#"{"code":"USD","bid":"5.43"}"#)).await;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILE);
        std::fs::write(&path, "Dólar: 4.99\nsome older, longer content\n").unwrap();

        let quote = CotacaoClient::new(url)
            .fetch_and_save(budget(), &path)
            .await
            .unwrap();

        assert_eq!(quote.bid, "5.43");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Dólar: 5.43\n");
    }

    #[tokio::test]
    async fn test_gateway_timeout_leaves_file_untouched() {
        let router = Router::new().route("/cotacao", get(|| async { AxumStatus::GATEWAY_TIMEOUT }));
        let url = spawn_server(router).await;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILE);

        let err = CotacaoClient::new(url)
            .fetch_and_save(budget(), &path)
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::ServerTimedOut));
        assert_eq!(err.to_string(), "server timed out");
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_gateway_timeout_keeps_previous_file() {
        let router = Router::new().route("/cotacao", get(|| async { AxumStatus::GATEWAY_TIMEOUT }));
        let url = spawn_server(router).await;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILE);
        std::fs::write(&path, "Dólar: 5.10\n").unwrap();

        let result = CotacaoClient::new(url).fetch_and_save(budget(), &path).await;

        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Dólar: 5.10\n");
    }

    #[tokio::test]
    async fn test_slow_server_is_a_request_failure() {
        let router = Router::new().route(
            "/cotacao",
            get(|| async {
                tokio::time::sleep(Duration::from_millis(800)).await;
                r#"{"bid":"5.43"}"#
            }),
        );
        let url = spawn_server(router).await;

        let err = CotacaoClient::new(url)
            .fetch_bid(Deadline::after(Duration::from_millis(100)))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Transport(_)));
        assert_eq!(err.to_string(), "failed to request exchange rate");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_request_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = CotacaoClient::new(format!("http://{addr}/cotacao"))
            .fetch_bid(budget())
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Transport(_)));
    }

    #[tokio::test]
    async fn test_invalid_endpoint_fails_to_build() {
        let err = CotacaoClient::new("not a url")
            .fetch_bid(budget())
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::BuildRequest(_)));
        assert_eq!(err.to_string(), "failed to request exchange rate");
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_read_failure() {
        let url = spawn_server(quote_server("<html>oops</html>")).await;

        let err = CotacaoClient::new(url).fetch_bid(budget()).await.unwrap_err();

        assert!(matches!(err, ClientError::ReadResponse(_)));
        assert_eq!(err.to_string(), "failed to read response content");
    }

    #[tokio::test]
    async fn test_missing_directory_is_a_create_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(OUTPUT_FILE);

        let err = save_quote(&path, &BidQuote { bid: "5.43".into() })
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::CreateFile(_)));
        assert_eq!(err.to_string(), "failed to create exchange rate file");
    }
}
