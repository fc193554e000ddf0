use super::test_helpers::state_from;
use crate::views::traffic_trends;
use pretty_assertions::assert_eq;

#[test]
fn buckets_visits_by_hour() {
    let state = state_from(&[
        ("2024-01-01 10:00:00,000", "8.8.8.8", "/static/js/hero-map.js", 200),
        ("2024-01-01 10:30:00,000", "8.8.8.8", "/favicon.ico", 404),
    ]);

    let trends: Vec<_> = traffic_trends(&state)
        .iter()
        .map(|t| (t.label(), t.hits))
        .collect();

    assert_eq!(trends, vec![("2024-01-01 10:00".to_string(), 2)]);
}

#[test]
fn buckets_are_sorted_ascending_even_when_log_is_not() {
    let state = state_from(&[
        ("2024-01-02 00:15:00,000", "1.1.1.1", "/", 200),
        ("2024-01-01 23:59:59,999999", "1.1.1.1", "/", 200),
        ("2024-01-01 09:00:00,000", "1.1.1.1", "/", 200),
        ("2024-01-01 23:00:00,000", "1.1.1.1", "/", 200),
    ]);

    let labels: Vec<_> = traffic_trends(&state).iter().map(|t| t.label()).collect();

    assert_eq!(
        labels,
        vec!["2024-01-01 09:00", "2024-01-01 23:00", "2024-01-02 00:00"]
    );
}

#[test]
fn hour_serializes_as_label() {
    let state = state_from(&[("2024-03-05 07:45:00,000", "1.1.1.1", "/", 200)]);

    let json = serde_json::to_value(traffic_trends(&state)).unwrap();

    assert_eq!(
        json,
        serde_json::json!([{ "hour": "2024-03-05 07:00", "hits": 1 }])
    );
}
