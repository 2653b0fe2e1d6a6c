//! Date utilities and the civil clock.
//!
//! "Now" is always read at a fixed UTC offset so that classification does not
//! depend on the host's local zone.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

pub const DEFAULT_UTC_OFFSET_HOURS: i32 = -3;

pub fn civil_offset(hours: i32) -> AppResult<FixedOffset> {
    hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| AppError::Config(format!("Invalid UTC offset: {hours}h")))
}

/// Wall-clock date/time of `instant` at the given fixed offset.
pub fn civil_time_at(instant: DateTime<Utc>, offset: FixedOffset) -> NaiveDateTime {
    instant.with_timezone(&offset).naive_local()
}

pub fn civil_now(offset: FixedOffset) -> NaiveDateTime {
    civil_time_at(Utc::now(), offset)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a civil date-time given as `YYYY-MM-DDTHH:MM` (or with a space).
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Display label used on cards: `dd/mm/YYYY`.
pub fn format_date_label(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}
