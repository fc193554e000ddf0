//! Command implementations behind the `visitscope` binary.

mod report;
mod serve;


pub use report::{ReportFormat, run_report};
pub use serve::run_serve;

use crate::conf::{DEFAULT_CONFIG_PATH, VisitscopeConfig, load_config, load_config_or_default};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Command line values that take precedence over the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub log: Option<PathBuf>,
    pub geoip_db: Option<PathBuf>,
}

/// Load the config file and apply command line overrides.
///
/// A missing file is only tolerated at the default path.
pub fn resolve_config(path: &Path, overrides: Overrides) -> anyhow::Result<VisitscopeConfig> {
    let mut cfg = if path == Path::new(DEFAULT_CONFIG_PATH) {
        load_config_or_default(path)?
    } else {
        load_config(path)?
    };

    if let Some(log) = overrides.log {
        cfg.log.path = log;
    }
    if let Some(db) = overrides.geoip_db {
        cfg.geoip.city_db = db;
    }

    cfg.validate().context("invalid configuration after overrides")?;

    Ok(cfg)
}
