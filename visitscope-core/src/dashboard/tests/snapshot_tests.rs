use super::{fixture_resolver, fixture_state};
use crate::conf::DashboardConfig;
use crate::dashboard::{DashboardSnapshot, locations_payload};
use crate::geoip::StaticResolver;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn snapshot_applies_dashboard_limits() {
    let state = fixture_state();
    let cfg = DashboardConfig {
        journey_limit: 2,
        top_content: 1,
        ..DashboardConfig::default()
    };

    let snapshot = DashboardSnapshot::build(&state, &cfg, &fixture_resolver());

    assert_eq!(snapshot.total_visits, 5);
    assert_eq!(snapshot.unique_addresses, 3);

    let journey_addresses: Vec<&str> = snapshot.journeys.iter().map(|j| j.address).collect();
    assert_eq!(journey_addresses, vec!["8.8.8.8", "1.1.1.1"]);

    assert_eq!(snapshot.top_content.len(), 1);
    assert_eq!(snapshot.top_content[0].url, "/");
    assert_eq!(snapshot.top_content[0].hits, 3);
}

#[test]
fn snapshot_carries_status_counts_and_hourly_traffic() {
    let state = fixture_state();
    let snapshot =
        DashboardSnapshot::build(&state, &DashboardConfig::default(), &fixture_resolver());

    let statuses: Vec<(u16, u64)> = snapshot
        .status_counts
        .iter()
        .map(|(status, count)| (*status, *count))
        .collect();
    assert_eq!(statuses, vec![(200, 3), (304, 1), (404, 1)]);

    let traffic: Vec<(String, u64)> = snapshot
        .traffic
        .iter()
        .map(|t| (t.label(), t.hits))
        .collect();
    assert_eq!(
        traffic,
        vec![
            ("2024-01-01 10:00".to_string(), 3),
            ("2024-01-01 11:00".to_string(), 2),
        ]
    );
}

#[test]
fn locations_payload_shape() {
    let state = fixture_state();

    let body = locations_payload(&state, &fixture_resolver()).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(
        value,
        json!({
            "locations": [
                {
                    "ip": "8.8.8.8",
                    "city": "Mountain View",
                    "country": "United States",
                    "lat": 37.386,
                    "lon": -122.0838,
                    "visits": 3
                },
                {
                    "ip": "1.1.1.1",
                    "city": "Research & Co",
                    "country": "Australia",
                    "lat": -33.494,
                    "lon": 143.2104,
                    "visits": 1
                }
            ]
        })
    );
}

#[test]
fn locations_payload_is_empty_list_without_matches() {
    let state = fixture_state();

    let body = locations_payload(&state, &StaticResolver::new()).unwrap();

    assert_eq!(body, br#"{"locations":[]}"#);
}
