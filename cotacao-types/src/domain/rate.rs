//! Rate record exactly as the upstream provider reports it.

use serde::{Deserialize, Serialize};

/// One currency-pair quote from the upstream provider.
///
/// Every field is kept as the opaque string received; nothing is parsed or
/// rounded, so `bid` reaches the client byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub code: String,
    #[serde(rename = "codein")]
    pub code_in: String,
    pub name: String,
    pub high: String,
    pub low: String,
    #[serde(rename = "varBid")]
    pub var_bid: String,
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    pub create_date: String,
}

/// Upstream response body: `{"USDBRL": { ... }}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsdBrlEnvelope {
    #[serde(rename = "USDBRL")]
    pub usd_brl: ExchangeRate,
}

impl UsdBrlEnvelope {
    pub fn into_rate(self) -> ExchangeRate {
        self.usd_brl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPSTREAM_BODY: &str = r#"{
        "USDBRL": {
            "code": "USD",
            "codein": "BRL",
            "name": "Dólar Americano/Real Brasileiro",
            "high": "5.4512",
            "low": "5.4011",
            "varBid": "0.0123",
            "pctChange": "0.23",
            "bid": "5.4301",
            "ask": "5.4311",
            "timestamp": "1718035199",
            "create_date": "2024-06-10 12:59:59"
        }
    }"#;

    #[test]
    fn test_decode_upstream_envelope() {
        let envelope: UsdBrlEnvelope = serde_json::from_str(UPSTREAM_BODY).unwrap();
        let rate = envelope.into_rate();

        assert_eq!(rate.code, "USD");
        assert_eq!(rate.code_in, "BRL");
        assert_eq!(rate.var_bid, "0.0123");
        assert_eq!(rate.pct_change, "0.23");
        assert_eq!(rate.bid, "5.4301");
        assert_eq!(rate.create_date, "2024-06-10 12:59:59");
    }

    #[test]
    fn test_encode_uses_upstream_key_names() {
        let envelope: UsdBrlEnvelope = serde_json::from_str(UPSTREAM_BODY).unwrap();
        let json = serde_json::to_value(envelope.usd_brl).unwrap();

        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "ask",
                "bid",
                "code",
                "codein",
                "create_date",
                "high",
                "low",
                "name",
                "pctChange",
                "timestamp",
                "varBid",
            ]
        );
    }

    #[test]
    fn test_missing_pair_is_a_decode_error() {
        let result = serde_json::from_str::<UsdBrlEnvelope>(r#"{"EURBRL": {}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_numeric_bid_is_rejected() {
        let body = UPSTREAM_BODY.replace(r#""bid": "5.4301""#, r#""bid": 5.4301"#);
        assert!(serde_json::from_str::<UsdBrlEnvelope>(&body).is_err());
    }
}
