use crate::access_log::{LineError, parse_line};
use chrono::{NaiveDate, Timelike};
use pretty_assertions::assert_eq;

const HERO_MAP: &str =
    r#"2024-01-01 10:00:00,000 - INFO - 8.8.8.8:5000:0 - "GET /static/js/hero-map.js HTTP/1.1" 200"#;

#[test]
fn parses_well_formed_line() {
    let visit = parse_line(HERO_MAP).unwrap().expect("line should match");

    let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();

    assert_eq!(visit.timestamp, expected);
    assert_eq!(visit.address, "8.8.8.8");
    assert_eq!(visit.url, "/static/js/hero-map.js");
    assert_eq!(visit.status, 200);
}

#[test]
fn strips_ipv6_brackets() {
    let line = r#"2024-01-01 10:00:00,000 - INFO - [2001:db8::1]:5000:0 - "GET / HTTP/1.1" 200"#;
    let visit = parse_line(line).unwrap().unwrap();

    assert_eq!(visit.address, "2001:db8::1");
}

#[test]
fn keeps_fractional_seconds() {
    let line = r#"2024-01-01 10:00:00,123456 - INFO - 1.2.3.4:80:0 - "GET / HTTP/1.1" 200"#;
    let visit = parse_line(line).unwrap().unwrap();

    assert_eq!(visit.timestamp.nanosecond(), 123_456_000);
}

#[test]
fn ignores_trailing_newline_and_text_after_status() {
    let line =
        "2024-01-01 10:00:00,000 - INFO - 1.2.3.4:80:0 - \"GET /a HTTP/1.1\" 304 1024 bytes\r\n";
    let visit = parse_line(line).unwrap().unwrap();

    assert_eq!(visit.url, "/a");
    assert_eq!(visit.status, 304);
}

#[test]
fn ignores_prefix_before_stamp() {
    let line = r#"web-1 | 2024-01-01 10:00:00,000 - INFO - 1.2.3.4:80:0 - "GET /a HTTP/1.1" 200"#;
    let visit = parse_line(line).unwrap().unwrap();

    assert_eq!(visit.address, "1.2.3.4");
}

#[test]
fn tab_may_separate_prefix_from_stamp() {
    let line = "web-1\t2024-01-01 10:00:00,000 - INFO - 1.2.3.4:80:0 - \"GET /a HTTP/1.1\" 200";
    let visit = parse_line(line).unwrap().expect("line should match");

    assert_eq!(visit.url, "/a");
    assert_eq!(visit.timestamp.nanosecond(), 0);
}

#[test]
fn rejects_non_get_methods() {
    let line = r#"2024-01-01 10:00:00,000 - INFO - 1.2.3.4:80:0 - "POST /login HTTP/1.1" 200"#;
    assert!(parse_line(line).unwrap().is_none());
}

#[test]
fn rejects_missing_status() {
    let line = r#"2024-01-01 10:00:00,000 - INFO - 1.2.3.4:80:0 - "GET /a HTTP/1.1""#;
    assert!(parse_line(line).unwrap().is_none());
}

#[test]
fn rejects_status_that_is_not_three_digits() {
    for status in ["20", "2000", "200-", "abc", "20x"] {
        let line = format!(
            r#"2024-01-01 10:00:00,000 - INFO - 1.2.3.4:80:0 - "GET /a HTTP/1.1" {status}"#
        );
        assert!(
            parse_line(&line).unwrap().is_none(),
            "status {status:?} should not match"
        );
    }
}

#[test]
fn rejects_extra_whitespace_in_literal_tokens() {
    let lines = [
        r#"2024-01-01 10:00:00,000  - INFO - 1.2.3.4:80:0 - "GET /a HTTP/1.1" 200"#,
        r#"2024-01-01 10:00:00,000 - INFO -  1.2.3.4:80:0 - "GET /a HTTP/1.1" 200"#,
        r#"2024-01-01 10:00:00,000 - INFO - 1.2.3.4:80:0 - "GET  /a HTTP/1.1" 200"#,
        r#"2024-01-01 10:00:00,000 - INFO - 1.2.3.4:80:0 - "GET /a  HTTP/1.1" 200"#,
        r#"2024-01-01 10:00:00,000 - INFO - 1.2.3.4:80:0 - "GET /a HTTP/1.1"  200"#,
    ];

    for line in lines {
        assert!(parse_line(line).unwrap().is_none(), "should not match: {line}");
    }
}

#[test]
fn rejects_other_levels_and_protocols() {
    let lines = [
        r#"2024-01-01 10:00:00,000 - WARNING - 1.2.3.4:80:0 - "GET /a HTTP/1.1" 200"#,
        r#"2024-01-01 10:00:00,000 - INFO - 1.2.3.4:80:0 - "GET /a HTTP/2" 200"#,
        r#"2024-01-01 10:00:00,000 - INFO - 1.2.3.4:80:1 - "GET /a HTTP/1.1" 200"#,
        r#"2024-01-01 10:00:00,000 - INFO - 1.2.3.4:0 - "GET /a HTTP/1.1" 200"#,
        "Started server process [4242]",
        "",
    ];

    for line in lines {
        assert!(parse_line(line).unwrap().is_none(), "should not match: {line}");
    }
}

#[test]
fn shaped_line_with_impossible_date_is_an_error() {
    let line = r#"2024-13-45 10:00:00,000 - INFO - 1.2.3.4:80:0 - "GET /a HTTP/1.1" 200"#;

    let err = parse_line(line).unwrap_err();
    assert!(matches!(err, LineError::Timestamp { .. }), "got {err:?}");
}

#[test]
fn shaped_line_without_fraction_is_an_error() {
    let line = r#"2024-01-01 10:00:00 - INFO - 1.2.3.4:80:0 - "GET /a HTTP/1.1" 200"#;

    let err = parse_line(line).unwrap_err();
    assert!(matches!(err, LineError::Fraction { .. }), "got {err:?}");
}

#[test]
fn fraction_longer_than_microseconds_is_an_error() {
    let line = r#"2024-01-01 10:00:00,1234567 - INFO - 1.2.3.4:80:0 - "GET /a HTTP/1.1" 200"#;

    let err = parse_line(line).unwrap_err();
    assert!(matches!(err, LineError::Fraction { .. }), "got {err:?}");
}

#[test]
fn single_fraction_digit_is_tenths() {
    let line = r#"2024-01-01 10:00:00,5 - INFO - 1.2.3.4:80:0 - "GET /a HTTP/1.1" 200"#;
    let visit = parse_line(line).unwrap().unwrap();

    assert_eq!(visit.timestamp.nanosecond(), 500_000_000);
}
