use crate::access_log::AggregateState;
use crate::views::HourlyTraffic;
use chrono::{NaiveDateTime, Timelike};
use std::collections::BTreeMap;

/// Visits per hour, ascending by hour.
pub fn traffic_trends(state: &AggregateState) -> Vec<HourlyTraffic> {
    let mut per_hour: BTreeMap<NaiveDateTime, u64> = BTreeMap::new();

    for visit in state.visits() {
        *per_hour.entry(truncate_to_hour(visit.timestamp)).or_insert(0) += 1;
    }

    per_hour
        .into_iter()
        .map(|(hour, hits)| HourlyTraffic { hour, hits })
        .collect()
}

fn truncate_to_hour(ts: NaiveDateTime) -> NaiveDateTime {
    ts.date()
        .and_hms_opt(ts.hour(), 0, 0)
        .unwrap_or(ts)
}
