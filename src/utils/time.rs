//! Time utilities: parsing HH:MM, lenient decoding of stored values, formatting.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Decode a time-of-day read from storage.
/// Anything that is not `HH:MM` or `HH:MM:SS` decodes as midnight.
pub fn parse_stored_time(raw: &str) -> NaiveTime {
    parse_time(raw).unwrap_or(NaiveTime::MIN)
}

/// Render a stored time value as zero-padded `HH:MM`; malformed input → "00:00".
pub fn format_time_value(raw: &str) -> String {
    format_time(parse_stored_time(raw))
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Drop seconds and sub-second precision.
pub fn truncate_to_minute(t: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(t.hour(), t.minute(), 0).unwrap_or(t)
}
