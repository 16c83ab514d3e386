//! Tests for clocks and timestamp formatting

use chrono::{NaiveDate, Timelike};
use core_kernel::{format_timestamp, parse_timestamp, Clock, CoreError, FixedClock, SystemClock};

#[test]
fn test_fixed_clock_reports_same_instant() {
    let clock = FixedClock::at(2024, 3, 15, 9, 30, 5).unwrap();
    assert_eq!(clock.now(), clock.now());
    assert_eq!(clock.now().hour(), 9);
}

#[test]
fn test_fixed_clock_rejects_invalid_date() {
    assert!(FixedClock::at(2024, 2, 30, 0, 0, 0).is_none());
    assert!(FixedClock::at(2024, 1, 1, 24, 0, 0).is_none());
}

#[test]
fn test_format_timestamp_layout() {
    let at = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap();
    assert_eq!(format_timestamp(&at), "2024-01-02 03:04:05");
}

#[test]
fn test_parse_timestamp_accepts_formatted_output() {
    let clock = FixedClock::at(2025, 12, 31, 23, 59, 59).unwrap();
    let text = format_timestamp(&clock.now());
    assert_eq!(parse_timestamp(&text).unwrap(), clock.now());
}

#[test]
fn test_parse_timestamp_rejects_other_layouts() {
    let result = parse_timestamp("31/12/2025 23:59");
    assert_eq!(
        result,
        Err(CoreError::InvalidTimestamp("31/12/2025 23:59".to_string()))
    );
}

#[test]
fn test_system_clock_formats_with_nineteen_characters() {
    let text = format_timestamp(&SystemClock.now());
    assert_eq!(text.len(), 19);
}
