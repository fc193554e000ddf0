use crate::access_log::AggregateState;
use crate::conf::DashboardConfig;
use crate::geoip::GeoResolver;
use crate::views::{
    AddressVisits, HourlyTraffic, LocationRecord, UrlCount, geographic_insights,
    interest_in_content, traffic_trends, user_journeys,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything the dashboard page shows, computed from one parse pass.
#[derive(Debug, Serialize)]
pub struct DashboardSnapshot<'a> {
    pub locations: Vec<LocationRecord>,
    pub journeys: Vec<AddressVisits<'a>>,
    pub top_content: Vec<UrlCount<'a>>,
    pub traffic: Vec<HourlyTraffic>,
    pub status_counts: &'a BTreeMap<u16, u64>,
    pub total_visits: usize,
    pub unique_addresses: usize,
}

impl<'a> DashboardSnapshot<'a> {
    pub fn build(
        state: &'a AggregateState,
        cfg: &DashboardConfig,
        resolver: &dyn GeoResolver,
    ) -> Self {
        Self {
            locations: geographic_insights(state, resolver),
            journeys: user_journeys(state, cfg.journey_limit),
            top_content: interest_in_content(state, cfg.top_content),
            traffic: traffic_trends(state),
            status_counts: state.status_counts(),
            total_visits: state.total_visits(),
            unique_addresses: state.unique_addresses(),
        }
    }
}

#[derive(Serialize)]
struct LocationsPayload {
    locations: Vec<LocationRecord>,
}

/// Body of `GET /api/locations`: `{"locations": [...]}`.
pub fn locations_payload(
    state: &AggregateState,
    resolver: &dyn GeoResolver,
) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec(&LocationsPayload {
        locations: geographic_insights(state, resolver),
    })
}
