//! Offline report: every view, computed once, rendered as text or JSON.

mod render;


pub use render::{render_json, render_text};

use crate::access_log::{AggregateState, LoadStats};
use crate::conf::ReportConfig;
use crate::geoip::GeoResolver;
use crate::views::{
    AddressVisits, HourlyTraffic, LocationRecord, UrlCount, core_feature_engagement,
    geographic_insights, interest_in_content, search_engine_visibility, traffic_trends,
    user_journeys,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_visits: usize,
    pub unique_addresses: usize,
    pub lines_read: usize,
    pub lines_skipped: usize,
}

impl Summary {
    pub fn new(state: &AggregateState, stats: LoadStats) -> Self {
        Self {
            total_visits: state.total_visits(),
            unique_addresses: state.unique_addresses(),
            lines_read: stats.lines_read,
            lines_skipped: stats.skipped,
        }
    }
}

/// All sections of the report, in print order.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub journeys: Vec<AddressVisits<'a>>,
    pub bots: Vec<AddressVisits<'a>>,
    pub feature_engagement: Vec<UrlCount<'a>>,
    pub locations: Vec<LocationRecord>,
    pub top_content: Vec<UrlCount<'a>>,
    pub traffic: Vec<HourlyTraffic>,
    pub summary: Summary,
}

pub fn build_report<'a>(
    state: &'a AggregateState,
    stats: LoadStats,
    cfg: &'a ReportConfig,
    resolver: &dyn GeoResolver,
) -> Report<'a> {
    Report {
        journeys: user_journeys(state, cfg.journey_limit),
        bots: search_engine_visibility(state),
        feature_engagement: core_feature_engagement(state, cfg.watched_features.as_slice()),
        locations: geographic_insights(state, resolver),
        top_content: interest_in_content(state, cfg.top_content),
        traffic: traffic_trends(state),
        summary: Summary::new(state, stats),
    }
}
