//! SQLite repository adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use sqlx::{Sqlite, SqlitePool, Transaction};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

use cotacao_types::{
    Deadline, ExchangeRecord, ExchangeRepository, RepoError, StoredExchangeRecord,
};

use crate::types::DbExchangeRecord;

const SCHEMA: &str = include_str!("../migrations/0001_create_exchanges.sql");

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
///
/// Owns the pool for the lifetime of the server; write concurrency is left
/// to SQLite itself.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Connects and creates the schema if it does not exist yet.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");

        // Ensure on-disk SQLite target directory exists.
        if !in_memory {
            if let Some(path) = database_url.strip_prefix("sqlite://") {
                let path = path.split('?').next().unwrap_or(path);
                if let Some(parent) = std::path::Path::new(path).parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // An in-memory database lives and dies with its connection.
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
        };
        let pool = pool_options.connect_with(options).await?;

        let repo = Self { pool };
        repo.create_schema().await?;

        tracing::debug!("SQLite repository ready at {}", database_url);
        Ok(repo)
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the `exchanges` table. Safe to call repeatedly.
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(())
    }

    /// Runs `BEGIN` and the `INSERT` without committing.
    pub(crate) async fn stage_insert(
        &self,
        record: &ExchangeRecord,
    ) -> Result<StagedInsert, RepoError> {
        let mut db_tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        let result = sqlx::query(
            r#"INSERT INTO exchanges (code, code_in, name, high, low, var_bid, pct_change, bid, ask, timestamp, create_date)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&record.code)
        .bind(&record.code_in)
        .bind(&record.name)
        .bind(&record.high)
        .bind(&record.low)
        .bind(&record.var_bid)
        .bind(&record.pct_change)
        .bind(&record.bid)
        .bind(&record.ask)
        .bind(&record.timestamp)
        .bind(&record.create_date)
        .execute(&mut *db_tx)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(StagedInsert {
            db_tx,
            id: result.last_insert_rowid(),
        })
    }

    /// Commits `staged` only if `deadline` still holds.
    ///
    /// The commit itself is never raced against a timer: once it starts it
    /// runs to completion, so a reported error always means no row.
    pub(crate) async fn commit_before(
        &self,
        staged: StagedInsert,
        deadline: Deadline,
    ) -> Result<i64, RepoError> {
        // Dropping the transaction without commit rolls the insert back.
        if deadline.has_elapsed() {
            return Err(RepoError::DeadlineExceeded);
        }

        staged
            .db_tx
            .commit()
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(staged.id)
    }
}

/// An uncommitted insert and the rowid it will have once committed.
pub(crate) struct StagedInsert {
    db_tx: Transaction<'static, Sqlite>,
    id: i64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl ExchangeRepository for SqliteRepo {
    #[tracing::instrument(skip(self, record), fields(bid = %record.bid))]
    async fn insert(
        &self,
        record: &ExchangeRecord,
        deadline: Deadline,
    ) -> Result<StoredExchangeRecord, RepoError> {
        if deadline.has_elapsed() {
            return Err(RepoError::DeadlineExceeded);
        }

        let at = tokio::time::Instant::from_std(deadline.instant());
        let staged = tokio::time::timeout_at(at, self.stage_insert(record))
            .await
            .map_err(|_| RepoError::DeadlineExceeded)??;

        let id = self.commit_before(staged, deadline).await?;

        Ok(StoredExchangeRecord {
            id,
            record: record.clone(),
        })
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<StoredExchangeRecord>, RepoError> {
        let rows: Vec<DbExchangeRecord> = sqlx::query_as(
            r#"SELECT id, code, code_in, name, high, low, var_bid, pct_change, bid, ask, timestamp, create_date
               FROM exchanges ORDER BY id DESC LIMIT ?"#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(DbExchangeRecord::into_domain).collect())
    }

    async fn count(&self) -> Result<i64, RepoError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM exchanges")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(count)
    }
}
