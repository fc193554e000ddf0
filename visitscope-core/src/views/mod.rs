//! Read-only views derived from an [`AggregateState`](crate::access_log::AggregateState).
//!
//! None of the builders mutate the state, so they can be called in any order
//! once a parse pass is complete.

mod bots;
mod content;
mod engagement;
mod geographic;
mod journey;
mod trends;
mod types;

#[cfg(test)]
mod tests;

pub use bots::search_engine_visibility;
pub use content::interest_in_content;
pub use engagement::core_feature_engagement;
pub use geographic::geographic_insights;
pub use journey::user_journeys;
pub use trends::traffic_trends;
pub use types::{AddressVisits, HourlyTraffic, LocationRecord, UrlCount};
