use crate::access_log::AggregateState;
use crate::geoip::GeoResolver;
use crate::views::LocationRecord;

/// Resolve every distinct IPv4 address once and keep the ones with a
/// meaningful location.
///
/// Addresses are already unique and in first-seen order, so each one reaches
/// the resolver at most once per call.
pub fn geographic_insights(
    state: &AggregateState,
    resolver: &dyn GeoResolver,
) -> Vec<LocationRecord> {
    state
        .addresses()
        .filter(|address| !address.contains(':'))
        .filter_map(|address| {
            let location = resolver.resolve(address)?;
            if !location.has_coordinates() {
                return None;
            }

            Some(LocationRecord {
                address: address.to_string(),
                city: location.city,
                country: location.country,
                latitude: location.latitude,
                longitude: location.longitude,
                visit_count: state.visit_count_for(address),
            })
        })
        .collect()
}
