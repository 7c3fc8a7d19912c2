//! Timestamp formatting utilities
//!
//! Every format here is an RFC 3339 profile: timezone-qualified and
//! lexically sortable for timestamps sharing one offset.

use chrono::{DateTime, FixedOffset, Local, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp format for the `datetime` field
///
/// # Examples
///
/// ```
/// use logfmt_logger::TimestampFormat;
/// use chrono::DateTime;
///
/// let ts = DateTime::parse_from_rfc3339("2025-01-08T10:30:45.123+02:00").unwrap();
/// assert_eq!(TimestampFormat::Rfc3339.format(&ts), "2025-01-08T10:30:45+02:00");
/// assert_eq!(TimestampFormat::Rfc3339Millis.format(&ts), "2025-01-08T10:30:45.123+02:00");
/// assert_eq!(TimestampFormat::Rfc3339Utc.format(&ts), "2025-01-08T08:30:45Z");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// Local time with offset, whole seconds: `2025-01-08T10:30:45+02:00`
    #[default]
    Rfc3339,

    /// Local time with offset and milliseconds: `2025-01-08T10:30:45.123+02:00`
    Rfc3339Millis,

    /// Local time with offset and microseconds: `2025-01-08T10:30:45.123456+02:00`
    ///
    /// Provides higher precision for ordering concurrent log entries.
    Rfc3339Micros,

    /// UTC with a `Z` suffix, whole seconds: `2025-01-08T08:30:45Z`
    Rfc3339Utc,
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<FixedOffset>) -> String {
        match self {
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, false),
            TimestampFormat::Rfc3339Millis => {
                datetime.to_rfc3339_opts(SecondsFormat::Millis, false)
            }
            TimestampFormat::Rfc3339Micros => {
                datetime.to_rfc3339_opts(SecondsFormat::Micros, false)
            }
            TimestampFormat::Rfc3339Utc => datetime
                .with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Current local time, keeping its UTC offset.
#[must_use]
pub fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}
