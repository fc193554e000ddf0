mod snapshot_tests;

use crate::access_log::{AggregateState, Aggregator};
use crate::geoip::{GeoLocation, StaticResolver};

pub(super) const FIXTURE: &str = r#"2024-01-01 10:00:00,000 - INFO - 8.8.8.8:5000:0 - "GET / HTTP/1.1" 200
2024-01-01 10:05:00,000 - INFO - 8.8.8.8:5000:0 - "GET /pricing HTTP/1.1" 200
2024-01-01 10:30:00,000 - INFO - 1.1.1.1:5000:0 - "GET /<script> HTTP/1.1" 404
2024-01-01 11:00:00,000 - INFO - [2001:db8::1]:5000:0 - "GET / HTTP/1.1" 200
2024-01-01 11:10:00,000 - INFO - 8.8.8.8:5000:0 - "GET / HTTP/1.1" 304
"#;

pub(super) fn fixture_state() -> AggregateState {
    let mut agg = Aggregator::new();
    for line in FIXTURE.lines() {
        assert!(agg.ingest(line).unwrap(), "fixture line should parse");
    }
    agg.into_state()
}

pub(super) fn fixture_resolver() -> StaticResolver {
    StaticResolver::new()
        .with(
            "8.8.8.8",
            GeoLocation {
                city: "Mountain View".to_string(),
                country: "United States".to_string(),
                latitude: 37.386,
                longitude: -122.0838,
            },
        )
        .with(
            "1.1.1.1",
            GeoLocation {
                city: "Research & Co".to_string(),
                country: "Australia".to_string(),
                latitude: -33.494,
                longitude: 143.2104,
            },
        )
}
