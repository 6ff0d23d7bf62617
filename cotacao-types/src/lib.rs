//! # Cotacao Types
//!
//! Domain records and port traits for the USD→BRL rate relay.
//! This crate has ZERO IO dependencies - only data structures,
//! the `Deadline` value and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Rate records as received, persisted and relayed
//! - `deadline` - Explicit time budget threaded through outbound calls
//! - `ports/` - Trait definitions that adapters must implement
//! - `error` - Adapter and application error types

pub mod deadline;
pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use deadline::Deadline;
pub use domain::{BidQuote, ExchangeRate, ExchangeRecord, StoredExchangeRecord, UsdBrlEnvelope};
pub use error::{AppError, FetchError, RepoError};
pub use ports::{ExchangeRateProvider, ExchangeRepository};
