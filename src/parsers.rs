//! Parsing of date-time strings into absolute instants.
//!
//! Input strings originate from persisted timestamps serialized to text, so
//! the accepted grammar is deliberately small: RFC 3339 with an offset,
//! naive date-times with a `T` or space separator, and bare dates. Naive
//! values are interpreted as UTC so that parsing is deterministic regardless
//! of the host's local zone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::{FormatError, FormatResult};

/// Parses `source` into an absolute UTC instant.
pub(crate) fn parse_instant(source: &str) -> FormatResult<DateTime<Utc>> {
    let trimmed = source.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    // SQL-style timestamp rendering, e.g. "2024-05-20 12:00:00".
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(NaiveDateTime::new(date, NaiveTime::MIN).and_utc());
    }

    Err(FormatError::date()
        .with_message(format!("'{trimmed}' could not be parsed as a date-time.")))
}
