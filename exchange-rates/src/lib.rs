//! Upstream Exchange Rate Adapter
//!
//! Implements the `ExchangeRateProvider` port against the public
//! AwesomeAPI quote service, which answers
//! `GET /json/last/USD-BRL` with `{"USDBRL": { ... }}`.
//!
//! # Example
//! ```ignore
//! use cotacao_types::{Deadline, ExchangeRateProvider};
//! use exchange_rates::AwesomeApiProvider;
//!
//! let provider = AwesomeApiProvider::default();
//! let rate = provider.latest(Deadline::after(Duration::from_millis(200))).await?;
//! println!("bid: {}", rate.bid);
//! ```

use async_trait::async_trait;
use reqwest::Client;

use cotacao_types::{Deadline, ExchangeRate, ExchangeRateProvider, FetchError, UsdBrlEnvelope};

/// Public USD→BRL quote endpoint.
pub const AWESOME_API_ENDPOINT: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";

/// HTTP client for the upstream rate provider.
pub struct AwesomeApiProvider {
    endpoint: String,
    http: Client,
}

impl AwesomeApiProvider {
    /// Creates a provider for the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch(&self) -> Result<ExchangeRate, FetchError> {
        let resp = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        // Status is not checked: an error page simply fails to decode.
        tracing::debug!(status = %resp.status(), "upstream responded");

        let body = resp
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        decode_envelope(&body)
    }
}

impl Default for AwesomeApiProvider {
    fn default() -> Self {
        Self::new(AWESOME_API_ENDPOINT)
    }
}

/// Decodes an upstream body into the USD→BRL record.
pub fn decode_envelope(body: &[u8]) -> Result<ExchangeRate, FetchError> {
    serde_json::from_slice::<UsdBrlEnvelope>(body)
        .map(UsdBrlEnvelope::into_rate)
        .map_err(|e| FetchError::Decode(e.to_string()))
}

#[async_trait]
impl ExchangeRateProvider for AwesomeApiProvider {
    #[tracing::instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn latest(&self, deadline: Deadline) -> Result<ExchangeRate, FetchError> {
        if deadline.has_elapsed() {
            return Err(FetchError::DeadlineExceeded);
        }

        let at = tokio::time::Instant::from_std(deadline.instant());
        tokio::time::timeout_at(at, self.fetch())
            .await
            .map_err(|_| FetchError::DeadlineExceeded)?
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
