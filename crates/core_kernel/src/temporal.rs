//! Clock abstraction and timestamp formatting
//!
//! Log entries and reports are stamped with local wall-clock time in the
//! `YYYY-MM-DD HH:MM:SS` layout. Components take a [`Clock`] so tests can pin
//! the time instead of reading the system clock.

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::error::CoreError;

/// Layout used for every persisted timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the current local time
pub trait Clock: Send + Sync {
    /// Returns the current local date and time
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the operating system's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock that always reports the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Creates a fixed clock from calendar components.
    ///
    /// Returns `None` if the components do not form a valid date and time.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS`
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses a timestamp written by [`format_timestamp`]
///
/// # Errors
///
/// Returns `CoreError::InvalidTimestamp` if the text does not match the layout
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, CoreError> {
    NaiveDateTime::parse_from_str(text.trim(), TIMESTAMP_FORMAT)
        .map_err(|_| CoreError::InvalidTimestamp(text.to_string()))
}
