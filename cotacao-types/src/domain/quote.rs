use serde::{Deserialize, Serialize};

/// The slice of a server response the client cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidQuote {
    pub bid: String,
}

impl BidQuote {
    /// The single line written to the saved rate file.
    pub fn file_line(&self) -> String {
        format!("Dólar: {}\n", self.bid)
    }
}
