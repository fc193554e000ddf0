use serde::Serialize;

/// Placeholder used when the database has no name for a city or country.
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoLocation {
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    /// (0, 0) is open ocean and means the database had no coordinates.
    pub fn has_coordinates(&self) -> bool {
        !(self.latitude == 0.0 && self.longitude == 0.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeoLookup {
    Found(GeoLocation),
    /// The address is valid but the database has no record for it.
    NotFound,
    /// IPv6 literals are never looked up.
    Unsupported,
    /// The address could not be read or the store returned an error.
    Failed(String),
}
