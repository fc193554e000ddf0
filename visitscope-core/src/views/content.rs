use crate::access_log::AggregateState;
use crate::views::UrlCount;

/// The `top_n` most requested URLs. Equal counts keep first-seen order.
pub fn interest_in_content(state: &AggregateState, top_n: usize) -> Vec<UrlCount<'_>> {
    let mut counts: Vec<UrlCount<'_>> = state
        .url_hits()
        .iter()
        .map(|(url, hits)| UrlCount { url, hits: *hits })
        .collect();

    // sort_by is stable, so ties stay in insertion order.
    counts.sort_by(|a, b| b.hits.cmp(&a.hits));
    counts.truncate(top_n);
    counts
}
