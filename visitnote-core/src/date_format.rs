//! Human-readable appointment timestamps.
//!
//! Produces strings like "Jan 5, 2025 at 3:45 PM". Upstream data sometimes
//! carries malformed dates, so both formatters echo the raw input instead of
//! failing when it cannot be parsed.
//!
//! Timestamps carrying an offset are shown in that offset's wall-clock time,
//! not converted to the viewer's local zone: `2025-03-10T21:30:00Z` is
//! always "9:30 PM" regardless of where the formatter runs.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const SHORT_FORMAT: &str = "%b %-d, %Y at %-I:%M %p";
const LONG_FORMAT: &str = "%B %-d, %Y at %-I:%M %p";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// "Jan 5, 2025 at 3:45 PM", or `iso` unchanged if it does not parse.
pub fn format_short(iso: &str) -> String {
    format_with(iso, SHORT_FORMAT)
}

/// "January 5, 2025 at 3:45 PM", or `iso` unchanged if it does not parse.
pub fn format_long(iso: &str) -> String {
    format_with(iso, LONG_FORMAT)
}

fn format_with(iso: &str, pattern: &str) -> String {
    match parse_wall_clock(iso) {
        Some(dt) => dt.format(pattern).to_string(),
        None => {
            tracing::debug!(input = iso, "unparseable timestamp, showing raw value");
            iso.to_string()
        }
    }
}

/// Parse an ISO-8601 timestamp into the wall-clock time it names.
///
/// Offset timestamps keep their own offset's local time; naive ones are taken
/// as-is; a bare date means midnight.
pub fn parse_wall_clock(iso: &str) -> Option<NaiveDateTime> {
    let s = iso.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
