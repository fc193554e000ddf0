use crate::access_log::AggregateState;
use crate::views::AddressVisits;

/// The first `limit` addresses (in order of first appearance), each with its
/// visits sorted by timestamp. Equal timestamps keep log order.
pub fn user_journeys(state: &AggregateState, limit: usize) -> Vec<AddressVisits<'_>> {
    state
        .addresses()
        .take(limit)
        .map(|address| {
            let mut visits: Vec<_> = state.visits_for(address).collect();
            visits.sort_by_key(|v| v.timestamp);
            AddressVisits { address, visits }
        })
        .collect()
}
