use chrono::NaiveDateTime;
use serde::Serialize;

/// One successfully parsed `GET` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Visit {
    pub timestamp: NaiveDateTime,
    /// Client address with IPv6 brackets removed.
    pub address: String,
    pub url: String,
    pub status: u16,
}
