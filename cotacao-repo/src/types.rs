//! Database row structs.

use sqlx::FromRow;

use cotacao_types::{ExchangeRecord, StoredExchangeRecord};

/// Row from the `exchanges` table.
#[derive(FromRow)]
pub struct DbExchangeRecord {
    pub id: i64,
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

impl DbExchangeRecord {
    pub fn into_domain(self) -> StoredExchangeRecord {
        StoredExchangeRecord {
            id: self.id,
            record: ExchangeRecord {
                code: self.code,
                code_in: self.code_in,
                name: self.name,
                high: self.high,
                low: self.low,
                var_bid: self.var_bid,
                pct_change: self.pct_change,
                bid: self.bid,
                ask: self.ask,
                timestamp: self.timestamp,
                create_date: self.create_date,
            },
        }
    }
}
