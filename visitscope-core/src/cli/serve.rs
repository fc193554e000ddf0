use crate::conf::VisitscopeConfig;
use crate::dashboard::{self, DashboardContext};
use crate::geoip::MaxMindResolver;
use std::sync::Arc;

/// Start the dashboard. Only returns on a startup error.
pub fn run_serve(cfg: VisitscopeConfig) -> anyhow::Result<()> {
    let resolver = MaxMindResolver::open(&cfg.geoip.city_db)?;

    // The log is read per request, so a missing file is not fatal here.
    if !cfg.log.path.is_file() {
        tracing::warn!(
            path = %cfg.log.path.display(),
            "access log not found; dashboard requests will fail until it exists"
        );
    }

    dashboard::run(DashboardContext {
        log_path: cfg.log.path,
        config: cfg.dashboard,
        resolver: Arc::new(resolver),
    })
}
