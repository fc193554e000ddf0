use crate::access_log::{LineError, OrderedMap, Visit, parse_line};
use serde::Serialize;
use std::collections::BTreeMap;

/// Grouping structures built from every visit of one log file.
///
/// Invariant: `visits.len()` equals both the sum of `url_hits` and the
/// total number of indices held in `by_address`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateState {
    visits: Vec<Visit>,
    /// Indices into `visits`, per address, in log order.
    by_address: OrderedMap<String, Vec<usize>>,
    url_hits: OrderedMap<String, u64>,
    status_counts: BTreeMap<u16, u64>,
}

impl AggregateState {
    /// Every visit in log file order.
    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    pub fn url_hits(&self) -> &OrderedMap<String, u64> {
        &self.url_hits
    }

    pub fn status_counts(&self) -> &BTreeMap<u16, u64> {
        &self.status_counts
    }

    /// Distinct addresses in order of first appearance.
    pub fn addresses(&self) -> impl Iterator<Item = &str> {
        self.by_address.keys().map(String::as_str)
    }

    /// Visits recorded for one address, in log order.
    pub fn visits_for<'a>(&'a self, address: &str) -> impl Iterator<Item = &'a Visit> + 'a {
        self.by_address
            .get(address)
            .into_iter()
            .flatten()
            .map(|&i| &self.visits[i])
    }

    pub fn visit_count_for(&self, address: &str) -> usize {
        self.by_address.get(address).map_or(0, Vec::len)
    }

    pub fn hits_for(&self, url: &str) -> u64 {
        self.url_hits.get(url).copied().unwrap_or(0)
    }

    pub fn total_visits(&self) -> usize {
        self.visits.len()
    }

    pub fn unique_addresses(&self) -> usize {
        self.by_address.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }
}

/// Owns the aggregate state during one parse pass.
#[derive(Debug, Default)]
pub struct Aggregator {
    state: AggregateState,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything gathered so far.
    pub fn reset(&mut self) {
        self.state.visits.clear();
        self.state.by_address.clear();
        self.state.url_hits.clear();
        self.state.status_counts.clear();
    }

    /// Parse one line and record it.
    ///
    /// Returns `Ok(false)` when the line was skipped, leaving state untouched.
    pub fn ingest(&mut self, line: &str) -> Result<bool, LineError> {
        match parse_line(line)? {
            Some(visit) => {
                self.record(visit);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn record(&mut self, visit: Visit) {
        let state = &mut self.state;
        let slot = state.visits.len();

        state
            .by_address
            .get_or_insert_with(visit.address.as_str(), Vec::new)
            .push(slot);
        *state.url_hits.get_or_insert_with(visit.url.as_str(), || 0) += 1;
        *state.status_counts.entry(visit.status).or_insert(0) += 1;

        state.visits.push(visit);
    }

    pub fn state(&self) -> &AggregateState {
        &self.state
    }

    pub fn into_state(self) -> AggregateState {
        self.state
    }
}
