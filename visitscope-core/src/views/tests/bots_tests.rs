use super::test_helpers::state_from;
use crate::views::search_engine_visibility;
use pretty_assertions::assert_eq;

#[test]
fn crawler_address_prefix_is_flagged_regardless_of_url() {
    let state = state_from(&[
        ("2024-01-01 10:00:00,000", "66.1.2.3", "/pricing", 200),
        ("2024-01-01 10:00:01,000", "40.7.7.7", "/", 200),
        ("2024-01-01 10:00:02,000", "8.8.8.8", "/", 200),
    ]);

    let flagged: Vec<_> = search_engine_visibility(&state)
        .into_iter()
        .map(|b| b.address)
        .collect();

    assert_eq!(flagged, vec!["66.1.2.3", "40.7.7.7"]);
}

#[test]
fn url_markers_flag_the_whole_address() {
    let state = state_from(&[
        ("2024-01-01 10:00:00,000", "9.9.9.9", "/", 200),
        ("2024-01-01 10:00:01,000", "9.9.9.9", "/googlebot-verify.html", 200),
        ("2024-01-01 10:00:02,000", "5.5.5.5", "/robots.txt", 200),
    ]);

    let flagged = search_engine_visibility(&state);

    assert_eq!(flagged.len(), 2);
    assert_eq!(flagged[0].address, "9.9.9.9");
    assert_eq!(flagged[0].visits.len(), 2, "all visits of a flagged address");
    assert_eq!(flagged[1].address, "5.5.5.5");
}

#[test]
fn url_markers_are_case_sensitive() {
    let state = state_from(&[
        ("2024-01-01 10:00:00,000", "9.9.9.9", "/Google", 200),
        ("2024-01-01 10:00:01,000", "7.7.7.7", "/BOT", 200),
        ("2024-01-01 10:00:02,000", "166.1.1.1", "/", 200),
    ]);

    assert!(search_engine_visibility(&state).is_empty());
}
