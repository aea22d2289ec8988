// Display formatting for schedule cells and the per-mosque "updated at" footer.

use chrono::{DateTime, Local, NaiveDateTime};

use crate::status::parse_time_of_day;

/// Shown for an absent or unreadable time.
pub const NONE_LABEL: &str = "None";

const UPDATED_AT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Format a time-of-day string as a 12-hour clock value, e.g. `"5:15 AM"`.
pub fn format_time(time: Option<&str>) -> String {
    time.and_then(parse_time_of_day)
        .map(|t| t.format("%-I:%M %p").to_string())
        .unwrap_or_else(|| NONE_LABEL.to_string())
}

/// Parse a server timestamp. RFC 3339 values are converted to local time;
/// naive ISO values are taken as local already.
pub fn parse_updated_at(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    UPDATED_AT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Format the block's last-updated timestamp as `dd/mm/yy, hh:mm am`.
pub fn format_updated_at(updated_at: Option<&str>) -> String {
    updated_at
        .and_then(parse_updated_at)
        .map(|dt| dt.format("%d/%m/%y, %I:%M %P").to_string())
        .unwrap_or_else(|| NONE_LABEL.to_string())
}
