//! IANA time zone identifiers.

use core::fmt;
use core::str::FromStr;

use chrono_tz::Tz;

use crate::{FormatError, FormatResult};

/// A validated IANA time zone, e.g. `"Europe/Madrid"` or `"America/New_York"`.
///
/// Identifiers are checked against the compiled zone database at
/// construction; an unrecognized identifier is a caller error and is never
/// silently corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeZone(pub(crate) Tz);

impl TimeZone {
    /// The UTC zone.
    pub const UTC: Self = Self(Tz::UTC);

    /// Parses a `TimeZone` from a provided `&str`.
    pub fn try_from_str(source: &str) -> FormatResult<Self> {
        source
            .parse::<Tz>()
            .map(Self)
            .map_err(|_| {
                FormatError::time_zone()
                    .with_message(format!("'{source}' is not a recognized IANA time zone."))
            })
    }

    /// Returns the zone's canonical identifier.
    pub fn identifier(&self) -> &'static str {
        self.0.name()
    }
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::UTC
    }
}

impl FromStr for TimeZone {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_str(s)
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn recognizes_iana_identifiers() {
        let tz = TimeZone::try_from_str("America/New_York").unwrap();
        assert_eq!(tz.identifier(), "America/New_York");
        assert_eq!(TimeZone::try_from_str("UTC").unwrap(), TimeZone::UTC);
    }

    #[test]
    fn rejects_unknown_identifiers() {
        let err = TimeZone::try_from_str("Mars/Olympus").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TimeZone);
        assert!(err.message().contains("Mars/Olympus"));
    }

    #[test]
    fn default_is_utc() {
        assert_eq!(TimeZone::default(), TimeZone::UTC);
    }
}
