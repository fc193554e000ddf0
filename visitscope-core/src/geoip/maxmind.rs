use crate::geoip::{GeoError, GeoLocation, GeoLookup, GeoResolver, UNKNOWN};
use maxminddb::PathElement;
use std::net::IpAddr;
use std::path::Path;

const CITY_NAME: [PathElement<'static>; 3] = [
    PathElement::Key("city"),
    PathElement::Key("names"),
    PathElement::Key("en"),
];

const COUNTRY_NAME: [PathElement<'static>; 3] = [
    PathElement::Key("country"),
    PathElement::Key("names"),
    PathElement::Key("en"),
];

const LATITUDE: [PathElement<'static>; 2] =
    [PathElement::Key("location"), PathElement::Key("latitude")];

const LONGITUDE: [PathElement<'static>; 2] =
    [PathElement::Key("location"), PathElement::Key("longitude")];

/// City-level resolver backed by a memory-mapped MaxMind database.
pub struct MaxMindResolver {
    reader: maxminddb::Reader<maxminddb::Mmap>,
}

impl MaxMindResolver {
    /// Open the database once at startup. A missing or corrupt file is fatal.
    pub fn open(path: &Path) -> Result<Self, GeoError> {
        if !path.is_file() {
            return Err(GeoError::open(path, "file does not exist"));
        }

        // Safety note on the memory-mapped file:
        // - File is opened read-only
        // - Lifetime is bound to MaxMindResolver
        // - visitscope does not mutate the mmdb file
        let reader =
            unsafe { maxminddb::Reader::open_mmap(path) }.map_err(|e| GeoError::open(path, e))?;

        tracing::info!(path = %path.display(), "geoip database opened");

        Ok(Self { reader })
    }

    fn lookup_ip(&self, ip: IpAddr) -> Result<Option<GeoLocation>, String> {
        let lookup = self.reader.lookup(ip).map_err(|e| e.to_string())?;

        let city = lookup
            .decode_path::<String>(&CITY_NAME)
            .map_err(|e| e.to_string())?;
        let country = lookup
            .decode_path::<String>(&COUNTRY_NAME)
            .map_err(|e| e.to_string())?;
        let latitude = lookup
            .decode_path::<f64>(&LATITUDE)
            .map_err(|e| e.to_string())?;
        let longitude = lookup
            .decode_path::<f64>(&LONGITUDE)
            .map_err(|e| e.to_string())?;

        Ok(location_from(city, country, latitude, longitude))
    }
}

/// Build a location from whatever fields the database record carried.
///
/// Names default to [`UNKNOWN`] and coordinates to 0; a record with none of
/// the four fields is no location at all.
pub(crate) fn location_from(
    city: Option<String>,
    country: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Option<GeoLocation> {
    if city.is_none() && country.is_none() && latitude.is_none() && longitude.is_none() {
        return None;
    }

    Some(GeoLocation {
        city: city.unwrap_or_else(|| UNKNOWN.to_string()),
        country: country.unwrap_or_else(|| UNKNOWN.to_string()),
        latitude: latitude.unwrap_or(0.0),
        longitude: longitude.unwrap_or(0.0),
    })
}

/// Decide whether `address` can be looked up at all.
pub(crate) fn lookup_address(address: &str) -> Result<IpAddr, GeoLookup> {
    if address.contains(':') {
        return Err(GeoLookup::Unsupported);
    }

    address
        .parse::<IpAddr>()
        .map_err(|_| GeoLookup::Failed(format!("'{address}' is not an IP address")))
}

impl GeoResolver for MaxMindResolver {
    fn lookup(&self, address: &str) -> GeoLookup {
        let ip = match lookup_address(address) {
            Ok(ip) => ip,
            Err(outcome) => return outcome,
        };

        match self.lookup_ip(ip) {
            Ok(Some(location)) => GeoLookup::Found(location),
            Ok(None) => GeoLookup::NotFound,
            Err(reason) => GeoLookup::Failed(reason),
        }
    }
}
