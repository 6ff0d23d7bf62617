//! Error types for the rate relay.

/// Upstream fetch failures.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Upstream request failed: {0}")]
    Transport(String),

    #[error("Upstream response could not be decoded: {0}")]
    Decode(String),

    #[error("Upstream fetch exceeded its deadline")]
    DeadlineExceeded,
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Insert exceeded its deadline")]
    DeadlineExceeded,
}

/// Application-level errors.
///
/// Distinguishable for logging only; the HTTP adapter collapses every
/// variant into a gateway timeout.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Persist(#[from] RepoError),
}

impl AppError {
    /// Whether the failure was a deadline expiring rather than an error.
    pub fn is_deadline(&self) -> bool {
        matches!(
            self,
            AppError::Fetch(FetchError::DeadlineExceeded)
                | AppError::Persist(RepoError::DeadlineExceeded)
        )
    }
}
