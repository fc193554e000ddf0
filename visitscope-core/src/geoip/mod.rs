//! Client address → location lookup.
//!
//! Lookups never fail from the caller's point of view: an unsupported
//! address family, a miss in the database and a store error all end up as
//! "no location". Store errors are the only outcome worth a log line.

mod error;
mod maxmind;
mod table;
mod types;


pub use error::GeoError;
pub use maxmind::MaxMindResolver;
pub use table::StaticResolver;
pub use types::{GeoLocation, GeoLookup, UNKNOWN};

pub trait GeoResolver: Send + Sync {
    fn lookup(&self, address: &str) -> GeoLookup;

    fn resolve(&self, address: &str) -> Option<GeoLocation> {
        match self.lookup(address) {
            GeoLookup::Found(location) => Some(location),
            GeoLookup::NotFound | GeoLookup::Unsupported => None,
            GeoLookup::Failed(reason) => {
                tracing::debug!(address, %reason, "geo lookup failed");
                None
            }
        }
    }
}
