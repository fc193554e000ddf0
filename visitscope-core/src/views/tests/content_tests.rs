use super::test_helpers::state_from;
use crate::views::interest_in_content;
use pretty_assertions::assert_eq;

#[test]
fn ranks_by_count_with_first_seen_tie_break() {
    let state = state_from(&[
        ("2024-01-01 10:00:00,000", "1.1.1.1", "/b", 200),
        ("2024-01-01 10:00:01,000", "1.1.1.1", "/a", 200),
        ("2024-01-01 10:00:02,000", "1.1.1.1", "/c", 200),
        ("2024-01-01 10:00:03,000", "1.1.1.1", "/c", 200),
        ("2024-01-01 10:00:04,000", "1.1.1.1", "/a", 200),
        ("2024-01-01 10:00:05,000", "1.1.1.1", "/b", 200),
        ("2024-01-01 10:00:06,000", "1.1.1.1", "/d", 200),
    ]);

    let ranked: Vec<_> = interest_in_content(&state, 5)
        .into_iter()
        .map(|c| (c.url, c.hits))
        .collect();

    assert_eq!(ranked, vec![("/b", 2), ("/a", 2), ("/c", 2), ("/d", 1)]);
}

#[test]
fn top_n_is_bounded_and_non_increasing() {
    let urls = ["/1", "/2", "/2", "/3", "/3", "/3", "/4", "/5", "/6", "/6"];
    let entries: Vec<_> = urls
        .iter()
        .map(|url| ("2024-01-01 10:00:00,000", "1.1.1.1", *url, 200))
        .collect();
    let state = state_from(&entries);

    let ranked = interest_in_content(&state, 5);

    assert_eq!(ranked.len(), 5);
    assert!(ranked.windows(2).all(|w| w[0].hits >= w[1].hits));
    assert!(ranked.iter().all(|c| state.url_hits().contains_key(c.url)));
    assert_eq!(ranked[0].url, "/3");
}
