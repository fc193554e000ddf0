use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisitscopeConfig {
    pub log: LogConfig,
    pub geoip: GeoipConfig,
    pub report: ReportConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Access log to analyze, read in full on every run/request.
    pub path: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("access.log"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeoipConfig {
    /// City-level MaxMind database.
    pub city_db: PathBuf,
}

impl Default for GeoipConfig {
    fn default() -> Self {
        Self {
            city_db: PathBuf::from("GeoLite2-City.mmdb"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub journey_limit: usize,
    pub top_content: usize,
    pub watched_features: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            journey_limit: 3,
            top_content: 5,
            watched_features: vec![
                "/static/js/quick-calculator.js".to_string(),
                "/static/js/hero-map.js".to_string(),
                "/static/js/traffic-map.js".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// e.g. "0.0.0.0:5000"
    pub listen: String,
    /// Directory served under `static_prefix`.
    pub static_dir: PathBuf,
    pub static_prefix: String,
    pub journey_limit: usize,
    pub top_content: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:5000".to_string(),
            static_dir: PathBuf::from("static"),
            static_prefix: "/static".to_string(),
            journey_limit: 5,
            top_content: 10,
        }
    }
}
