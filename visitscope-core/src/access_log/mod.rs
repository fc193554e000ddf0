//! Access Log Ingestion
//!
//! Turns a web server access log into an [`AggregateState`] that the view
//! builders in [`crate::views`] read from.
//!
//! Each line is expected to look like:
//!
//! ```text
//! 2024-01-01 10:00:00,000 - INFO - 8.8.8.8:5000:0 - "GET /favicon.ico HTTP/1.1" 404
//! ```
//!
//! Lines that do not have this shape are skipped without error. A line that
//! has the shape but carries a timestamp that cannot be read aborts the whole
//! pass, since that usually means the log format drifted.
//!
//! The overall data processing architecture is:
//!
//! log file
//! parse_line
//! Visit
//! Aggregator
//! AggregateState
//!

mod aggregate;
mod error;
mod load;
mod ordered;
mod parse;
mod visit;

#[cfg(test)]
mod tests;

pub use aggregate::{AggregateState, Aggregator};
pub use error::{AnalyzeError, LineError};
pub use load::{LoadStats, LoadedLog, load_log, load_reader};
pub use ordered::OrderedMap;
pub use parse::parse_line;
pub use visit::Visit;
