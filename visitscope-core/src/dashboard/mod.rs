//! Dashboard service.
//!
//! A pingora HTTP service that answers every request locally:
//!
//! - `GET /`              HTML dashboard
//! - `GET /api/locations` resolved client locations as JSON
//! - `GET <prefix>/...`   static assets
//!
//! Each page or API request reads the access log again with its own
//! aggregator, so concurrent requests never share mutable state.

mod endpoint;
mod gateway;
mod handler;
mod page;
mod server;
mod snapshot;

#[cfg(test)]
mod tests;

pub use gateway::DashboardGateway;
pub use handler::DashboardHandler;
pub use page::render_page;
pub use server::{build_pingora_server, run};
pub use snapshot::{DashboardSnapshot, locations_payload};

use crate::conf::DashboardConfig;
use crate::geoip::GeoResolver;
use std::path::PathBuf;
use std::sync::Arc;

/// Everything a request needs, shared read-only across workers.
pub struct DashboardContext {
    pub log_path: PathBuf,
    pub config: DashboardConfig,
    pub resolver: Arc<dyn GeoResolver>,
}
