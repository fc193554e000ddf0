use crate::access_log::{LineError, Visit};
use chrono::{NaiveDateTime, Timelike};

const LEVEL_SEPARATOR: &str = " - INFO - ";
const REQUEST_OPEN: &str = " - \"GET ";
const PROTOCOL: &str = "HTTP/1.1\" ";
const ENDPOINT_SUFFIX: &str = ":0";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const MAX_FRACTION_DIGITS: usize = 6;

/// Fields cut out of a line before any of them is interpreted.
#[derive(Debug)]
struct RawFields<'a> {
    stamp: &'a str,
    address: &'a str,
    url: &'a str,
    status: u16,
}

/// Parse one access log line.
///
/// Returns:
/// - `Ok(Some(visit))` for a well-formed `GET` line
/// - `Ok(None)` for anything that does not have the access log shape
/// - `Err(_)` when the shape matched but the timestamp is unreadable
///
/// The status must be exactly three digits followed by whitespace or the end
/// of the line; `" 2000"` or `" 200-"` is not a match.
pub fn parse_line(line: &str) -> Result<Option<Visit>, LineError> {
    let line = line.trim_end_matches(['\r', '\n']);

    let Some(fields) = split_fields(line) else {
        return Ok(None);
    };

    let timestamp = parse_timestamp(fields.stamp)?;

    Ok(Some(Visit {
        timestamp,
        address: fields.address.to_string(),
        url: fields.url.to_string(),
        status: fields.status,
    }))
}

fn split_fields(line: &str) -> Option<RawFields<'_>> {
    let (head, rest) = line.split_once(LEVEL_SEPARATOR)?;
    let stamp = split_stamp(head)?;

    let (endpoint, request) = rest.split_once(REQUEST_OPEN)?;
    let address = split_address(endpoint)?;

    let (url, tail) = request.split_once(' ')?;
    if url.is_empty() || url.contains(char::is_whitespace) {
        return None;
    }

    let status = split_status(tail.strip_prefix(PROTOCOL)?)?;

    Some(RawFields {
        stamp,
        address,
        url,
        status,
    })
}

/// The stamp is the last `<date> <time>` pair before the level separator.
/// Anything in front of it (a process tag, say) is ignored, and may be
/// separated from the date by any whitespace.
fn split_stamp(head: &str) -> Option<&str> {
    let (before_time, time) = head.rsplit_once(' ')?;
    let date = before_time.rsplit(char::is_whitespace).next()?;

    let date_ok = !date.is_empty() && date.chars().all(|c| c.is_ascii_digit() || c == '-');
    let time_ok = !time.is_empty()
        && time
            .chars()
            .all(|c| c.is_ascii_digit() || c == ':' || c == ',');

    if !date_ok || !time_ok {
        return None;
    }

    let start = head.len() - time.len() - 1 - date.len();
    Some(&head[start..])
}

/// `<address>:<port>:0`, where the address may be a bracketed IPv6 literal.
fn split_address(endpoint: &str) -> Option<&str> {
    let endpoint = endpoint.strip_suffix(ENDPOINT_SUFFIX)?;
    let (address, port) = endpoint.rsplit_once(':')?;

    if port.is_empty() || !port.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let address = address.strip_prefix('[').unwrap_or(address);
    let address = address.strip_suffix(']').unwrap_or(address);

    if address.is_empty() || address.contains(['[', ']']) || address.contains(char::is_whitespace)
    {
        return None;
    }

    Some(address)
}

/// Exactly three digits, then end of line or whitespace.
fn split_status(tail: &str) -> Option<u16> {
    let digits = tail.get(..3)?;
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    match tail[3..].chars().next() {
        None => {}
        Some(c) if c.is_whitespace() => {}
        Some(_) => return None,
    }

    digits.parse().ok()
}

/// `YYYY-MM-DD HH:MM:SS,ffffff`: the comma and one to six fractional digits
/// are required.
fn parse_timestamp(stamp: &str) -> Result<NaiveDateTime, LineError> {
    let fraction_error = || LineError::Fraction {
        value: stamp.to_string(),
    };

    let (whole, fraction) = stamp.split_once(',').ok_or_else(fraction_error)?;

    if fraction.is_empty()
        || fraction.len() > MAX_FRACTION_DIGITS
        || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(fraction_error());
    }

    let parsed = NaiveDateTime::parse_from_str(whole, TIMESTAMP_FORMAT).map_err(|source| {
        LineError::Timestamp {
            value: stamp.to_string(),
            source,
        }
    })?;

    // Right-pad to nanoseconds: "5" is 500ms, "000123" is 123µs.
    let nanos: u32 = format!("{fraction:0<9}").parse().map_err(|_| fraction_error())?;

    parsed.with_nanosecond(nanos).ok_or_else(fraction_error)
}
