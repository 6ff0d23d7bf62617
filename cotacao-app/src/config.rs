//! Server configuration.
//!
//! Every value is a fixed constant; nothing is read from the environment.

use std::time::Duration;

use cotacao_hex::service::{DEFAULT_FETCH_TIMEOUT, DEFAULT_INSERT_TIMEOUT};
use exchange_rates::AWESOME_API_ENDPOINT;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub upstream_url: String,
    pub fetch_timeout: Duration,
    pub insert_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            database_url: "sqlite://exchange.db?mode=rwc".to_string(),
            upstream_url: AWESOME_API_ENDPOINT.to_string(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            insert_timeout: DEFAULT_INSERT_TIMEOUT,
        }
    }
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
