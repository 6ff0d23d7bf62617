//! Repository port trait.
//!
//! The store is an append-only log of fetched rates.

use crate::{Deadline, ExchangeRecord, RepoError, StoredExchangeRecord};

#[async_trait::async_trait]
pub trait ExchangeRepository: Send + Sync + 'static {
    /// Appends one record.
    ///
    /// All-or-nothing: if `deadline` has passed before the commit starts,
    /// returns `RepoError::DeadlineExceeded` and leaves no row behind. A
    /// commit that has started always completes and is reported as success.
    async fn insert(
        &self,
        record: &ExchangeRecord,
        deadline: Deadline,
    ) -> Result<StoredExchangeRecord, RepoError>;

    /// Most recent records first.
    async fn list_recent(&self, limit: i64) -> Result<Vec<StoredExchangeRecord>, RepoError>;

    async fn count(&self) -> Result<i64, RepoError>;
}
