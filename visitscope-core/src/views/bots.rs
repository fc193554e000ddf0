use crate::access_log::{AggregateState, Visit};
use crate::views::AddressVisits;

/// Literal, case-sensitive URL fragments left behind by crawlers.
const BOT_URL_MARKERS: &[&str] = &["google", "bot"];

/// Address ranges known to host search engine crawlers.
const BOT_ADDRESS_PREFIXES: &[&str] = &["66.", "40."];

/// Addresses that look like search engine crawlers, with all of their visits
/// in log order.
pub fn search_engine_visibility(state: &AggregateState) -> Vec<AddressVisits<'_>> {
    state
        .addresses()
        .filter_map(|address| {
            let visits: Vec<&Visit> = state.visits_for(address).collect();
            is_bot_candidate(address, &visits).then_some(AddressVisits { address, visits })
        })
        .collect()
}

fn is_bot_candidate(address: &str, visits: &[&Visit]) -> bool {
    if visits.is_empty() {
        return false;
    }

    BOT_ADDRESS_PREFIXES
        .iter()
        .any(|prefix| address.starts_with(prefix))
        || visits
            .iter()
            .any(|v| BOT_URL_MARKERS.iter().any(|marker| v.url.contains(marker)))
}
