mod error;
mod types;


pub use error::ConfigError;
pub use types::{DashboardConfig, GeoipConfig, LogConfig, ReportConfig, VisitscopeConfig};

use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_CONFIG_PATH: &str = "visitscope.toml";

/// Load and validate the config at `path`.
pub fn load_config(path: &Path) -> Result<VisitscopeConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg: VisitscopeConfig =
        toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;

    cfg.validate()?;
    Ok(cfg)
}

/// Like [`load_config`], but a missing file falls back to the defaults.
///
/// Only used for the implicit default path; an explicitly requested file
/// must exist.
pub fn load_config_or_default(path: &Path) -> Result<VisitscopeConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(VisitscopeConfig::default());
    }

    load_config(path)
}

impl VisitscopeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.report.journey_limit == 0 || self.report.top_content == 0 {
            return Err(ConfigError::invalid(
                "report.journey_limit and report.top_content must be at least 1",
            ));
        }

        if self.dashboard.journey_limit == 0 || self.dashboard.top_content == 0 {
            return Err(ConfigError::invalid(
                "dashboard.journey_limit and dashboard.top_content must be at least 1",
            ));
        }

        if self.dashboard.listen.trim().is_empty() {
            return Err(ConfigError::invalid("dashboard.listen must not be empty"));
        }

        if !self.dashboard.static_prefix.starts_with('/') {
            return Err(ConfigError::invalid(format!(
                "dashboard.static_prefix '{}' must start with '/'",
                self.dashboard.static_prefix
            )));
        }

        Ok(())
    }
}

impl FromStr for VisitscopeConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cfg: Self =
            toml::from_str(s).map_err(|e| ConfigError::parse(Path::new("<string>"), e))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
