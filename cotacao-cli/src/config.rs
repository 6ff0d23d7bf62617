//! Client configuration.

use std::path::PathBuf;
use std::time::Duration;

use cotacao_client::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, OUTPUT_FILE};

/// Fixed client settings.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub output: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            output: PathBuf::from(OUTPUT_FILE),
        }
    }
}
