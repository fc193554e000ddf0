use crate::geoip::{GeoLocation, GeoLookup, GeoResolver};
use ahash::AHashMap;

/// In-memory address table. Useful for fixtures where no database exists.
#[derive(Debug, Default, Clone)]
pub struct StaticResolver {
    entries: AHashMap<String, GeoLocation>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, address: &str, location: GeoLocation) -> Self {
        self.entries.insert(address.to_string(), location);
        self
    }
}

impl GeoResolver for StaticResolver {
    fn lookup(&self, address: &str) -> GeoLookup {
        if address.contains(':') {
            return GeoLookup::Unsupported;
        }

        match self.entries.get(address) {
            Some(location) => GeoLookup::Found(location.clone()),
            None => GeoLookup::NotFound,
        }
    }
}
