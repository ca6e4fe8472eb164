//! Timestamp formatting and the wall-clock source
//!
//! The prefix uses a compact `HH:mm:ss:SSS` clock time by default. ISO 8601
//! and custom strftime formats are available for consumers that want a full
//! date in the prefix.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// Timestamp format options for the log prefix
///
/// # Examples
///
/// ```
/// use act_logger::core::TimestampFormat;
/// use chrono::{Local, TimeZone};
///
/// let at = Local.with_ymd_and_hms(2025, 1, 8, 9, 5, 3).single().unwrap();
/// assert_eq!(TimestampFormat::Clock.format(&at), "09:05:03:000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// 24-hour clock with milliseconds: `10:30:45:123`
    #[default]
    Clock,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+01:00`
    Iso8601,

    /// Custom strftime format
    ///
    /// ```
    /// use act_logger::core::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S".to_string());
    /// ```
    Custom(String),
}

const CLOCK_PATTERN: &str = "%H:%M:%S:%3f";

impl TimestampFormat {
    /// Format `datetime`; a custom pattern chrono cannot render falls back to
    /// the `Clock` form.
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let pattern = match self {
            TimestampFormat::Clock => CLOCK_PATTERN,
            TimestampFormat::Iso8601 => "%Y-%m-%dT%H:%M:%S%.3f%:z",
            TimestampFormat::Custom(format_str) => format_str.as_str(),
        };

        let mut out = String::new();
        if write!(out, "{}", datetime.format(pattern)).is_ok() {
            return out;
        }
        datetime.format(CLOCK_PATTERN).to_string()
    }
}

/// Source of the current local time used in prefixes
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same instant; useful for reproducible output
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Local>);

impl FixedClock {
    pub fn new(at: DateTime<Local>) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
