//! Persistence-side view of a fetched rate.

use serde::{Deserialize, Serialize};

use super::rate::ExchangeRate;

/// Row contents for the `exchanges` table, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRecord {
    pub code: String,
    pub code_in: String,
    pub name: String,
    pub high: String,
    pub low: String,
    pub var_bid: String,
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    pub create_date: String,
}

impl From<&ExchangeRate> for ExchangeRecord {
    fn from(rate: &ExchangeRate) -> Self {
        Self {
            code: rate.code.clone(),
            code_in: rate.code_in.clone(),
            name: rate.name.clone(),
            high: rate.high.clone(),
            low: rate.low.clone(),
            var_bid: rate.var_bid.clone(),
            pct_change: rate.pct_change.clone(),
            bid: rate.bid.clone(),
            ask: rate.ask.clone(),
            timestamp: rate.timestamp.clone(),
            create_date: rate.create_date.clone(),
        }
    }
}

/// A record as written to the store. Never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredExchangeRecord {
    pub id: i64,
    #[serde(flatten)]
    pub record: ExchangeRecord,
}
