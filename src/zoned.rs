//! Normalization of date inputs into zone-tagged instants.

use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;

use crate::parsers::parse_instant;
use crate::{FormatResult, TimeZone};

/// A formatting input: either an instant or text parseable into one.
///
/// Text inputs are typically persisted timestamps serialized to strings; see
/// [`crate::parsers`] for the accepted grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    Instant(DateTime<Utc>),
    Text(&'a str),
}

impl From<DateTime<Utc>> for DateInput<'_> {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Instant(value)
    }
}

impl From<DateTime<FixedOffset>> for DateInput<'_> {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Instant(value.with_timezone(&Utc))
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

/// An absolute instant tagged with the time zone it will be rendered in.
///
/// This is the intermediate between normalization and rendering; it is never
/// persisted and holds no state beyond the pair itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedInstant {
    instant: DateTime<Utc>,
    zone: TimeZone,
}

impl ZonedInstant {
    /// Normalizes `input` into an instant tagged with `zone`.
    ///
    /// The instant is absolute: converting the zone never changes the point
    /// in time, only the wall-clock fields later derived from it. Fails with
    /// a date error when a text input cannot be parsed.
    pub fn normalize(input: DateInput<'_>, zone: TimeZone) -> FormatResult<Self> {
        let instant = match input {
            DateInput::Instant(instant) => instant,
            DateInput::Text(text) => parse_instant(text)?,
        };
        Ok(Self { instant, zone })
    }

    /// Returns the underlying absolute instant.
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// Returns the tagged time zone.
    pub fn zone(&self) -> TimeZone {
        self.zone
    }

    /// Returns the wall-clock view of the instant in the tagged zone.
    pub(crate) fn wall(&self) -> DateTime<Tz> {
        self.instant.with_timezone(&self.zone.0)
    }
}
