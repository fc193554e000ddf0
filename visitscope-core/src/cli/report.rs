use crate::access_log::load_log;
use crate::conf::VisitscopeConfig;
use crate::geoip::MaxMindResolver;
use crate::report::{build_report, render_json, render_text};
use anyhow::Context;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Analyze the configured log once and print the report to stdout.
pub fn run_report(cfg: &VisitscopeConfig, format: ReportFormat, color: bool) -> anyhow::Result<()> {
    let resolver = MaxMindResolver::open(&cfg.geoip.city_db)?;
    let loaded = load_log(&cfg.log.path)?;

    let report = build_report(&loaded.state, loaded.stats, &cfg.report, &resolver);

    let mut output = match format {
        ReportFormat::Text => render_text(&report, color),
        ReportFormat::Json => render_json(&report).context("failed to serialize report")?,
    };
    if !output.ends_with('\n') {
        output.push('\n');
    }

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
        .context("failed to write report")?;

    Ok(())
}
