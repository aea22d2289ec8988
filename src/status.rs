// Time-of-day parsing and the available / finished / none classification of a
// prayer row against the current wall-clock time.

use chrono::{NaiveDateTime, NaiveTime, Timelike};

/// Accepted time-of-day formats, tried in order. The first that parses wins;
/// nothing further is inferred from an ambiguous string.
pub const TIME_FORMATS: &[&str] = &[
    "%H:%M:%S",    // 04:59:00
    "%H:%M:%S%.f", // 04:59:00.000
    "%H:%M",       // 04:59
    "%I:%M %p",    // 4:59 AM
    "%I:%M:%S %p", // 4:59:00 AM
    "%I:%M%p",     // 4:59AM
];

/// Parse a time-of-day string using [`TIME_FORMATS`]. Returns `None` when no
/// format matches.
pub fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(raw, fmt).ok())
}

/// Derived per-row state. Recomputed on every render, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The congregation has not started yet.
    Available,
    /// The congregation time has passed (or is exactly now).
    Finished,
    /// No congregation time, or one that could not be parsed.
    None,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Available => "Available",
            Status::Finished => "Finished",
            Status::None => "None",
        }
    }
}

/// Classify a slot by its congregation time. Only the time-of-day of `now` is
/// compared (truncated to whole seconds); both sides are local wall-clock
/// values. Equal times count as finished.
pub fn evaluate(congregation: Option<&str>, now: NaiveDateTime) -> Status {
    let Some(at) = congregation.and_then(parse_time_of_day) else {
        return Status::None;
    };
    let current = now.time().with_nanosecond(0).unwrap_or_else(|| now.time());
    if current < at {
        Status::Available
    } else {
        Status::Finished
    }
}
