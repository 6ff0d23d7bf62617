//! Domain models for the rate relay.

pub mod quote;
pub mod rate;
pub mod record;

pub use quote::BidQuote;
pub use rate::{ExchangeRate, UsdBrlEnvelope};
pub use record::{ExchangeRecord, StoredExchangeRecord};
