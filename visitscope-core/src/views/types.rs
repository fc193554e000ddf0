use crate::access_log::Visit;
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

const HOUR_LABEL_FORMAT: &str = "%Y-%m-%d %H:00";

/// One client address with a selection of its visits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressVisits<'a> {
    pub address: &'a str,
    pub visits: Vec<&'a Visit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UrlCount<'a> {
    pub url: &'a str,
    pub hits: u64,
}

/// A resolved client location, shaped for the `/api/locations` payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationRecord {
    #[serde(rename = "ip")]
    pub address: String,
    pub city: String,
    pub country: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    #[serde(rename = "visits")]
    pub visit_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourlyTraffic {
    #[serde(serialize_with = "serialize_hour")]
    pub hour: NaiveDateTime,
    pub hits: u64,
}

impl HourlyTraffic {
    /// `YYYY-MM-DD HH:00`
    pub fn label(&self) -> String {
        self.hour.format(HOUR_LABEL_FORMAT).to_string()
    }
}

fn serialize_hour<S: Serializer>(hour: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&hour.format(HOUR_LABEL_FORMAT))
}
