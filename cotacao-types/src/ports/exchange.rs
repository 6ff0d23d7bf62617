//! Exchange rate provider port.
//!
//! Implementations can be HTTP clients, canned providers for tests, etc.

use crate::{Deadline, ExchangeRate, FetchError};

/// Port trait for the upstream rate provider.
#[async_trait::async_trait]
pub trait ExchangeRateProvider: Send + Sync + 'static {
    /// Fetches the current USD→BRL quote.
    ///
    /// Must give up with `FetchError::DeadlineExceeded` once `deadline` passes.
    async fn latest(&self, deadline: Deadline) -> Result<ExchangeRate, FetchError>;
}
