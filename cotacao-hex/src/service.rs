//! Quote Application Service
//!
//! Orchestrates the upstream fetch and the insert through the port traits.
//! Contains NO infrastructure logic.

use std::future::Future;
use std::time::Duration;

use cotacao_types::{
    AppError, Deadline, ExchangeRate, ExchangeRateProvider, ExchangeRecord, ExchangeRepository,
    FetchError,
};

/// Budget for the upstream fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_millis(200);

/// Budget for the insert. Deliberately much tighter than the fetch.
pub const DEFAULT_INSERT_TIMEOUT: Duration = Duration::from_millis(10);

/// Application service for the rate relay.
///
/// Generic over both ports; the adapters are injected at construction and
/// shared by every request for the lifetime of the server.
pub struct QuoteService<P: ExchangeRateProvider, R: ExchangeRepository> {
    provider: P,
    repo: R,
    fetch_timeout: Duration,
    insert_timeout: Duration,
}

impl<P: ExchangeRateProvider, R: ExchangeRepository> QuoteService<P, R> {
    /// Creates a service with the default 200 ms / 10 ms budgets.
    pub fn new(provider: P, repo: R) -> Self {
        Self {
            provider,
            repo,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            insert_timeout: DEFAULT_INSERT_TIMEOUT,
        }
    }

    /// Overrides the fetch and insert budgets.
    pub fn with_timeouts(mut self, fetch_timeout: Duration, insert_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self.insert_timeout = insert_timeout;
        self
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Fetches the current rate and appends it to the store.
    ///
    /// The two deadlines are derived one after the other, so the insert never
    /// inherits what is left of the fetch budget. The insert deadline is
    /// enforced by the repository alone, never by cancelling its future.
    /// Returns the record as fetched, not the stored row.
    pub async fn fetch_and_record(&self) -> Result<ExchangeRate, AppError> {
        let fetch_deadline = Deadline::after(self.fetch_timeout);
        let rate = within(fetch_deadline, self.provider.latest(fetch_deadline))
            .await
            .map_err(|_| FetchError::DeadlineExceeded)??;

        let record = ExchangeRecord::from(&rate);

        let insert_deadline = Deadline::after(self.insert_timeout);
        let stored = self.repo.insert(&record, insert_deadline).await?;

        tracing::debug!(id = stored.id, bid = %rate.bid, "exchange rate recorded");
        Ok(rate)
    }
}

/// Bounds `fut` by `deadline` regardless of whether the provider honours it.
async fn within<F: Future>(
    deadline: Deadline,
    fut: F,
) -> Result<F::Output, tokio::time::error::Elapsed> {
    tokio::time::timeout_at(tokio::time::Instant::from_std(deadline.instant()), fut).await
}
