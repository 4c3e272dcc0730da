//! The error type for zoned formatting operations.

use core::fmt;
use std::borrow::Cow;

/// The category of a [`FormatError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An input date string could not be parsed into an instant.
    Date,
    /// A time zone identifier was not recognized by the IANA database.
    TimeZone,
    /// A format pattern contained an unrecognized or malformed token.
    Pattern,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Date => "invalid date",
            Self::TimeZone => "invalid time zone",
            Self::Pattern => "invalid pattern",
        };
        f.write_str(name)
    }
}

/// The error returned by the formatting pipeline.
///
/// Unsupported language codes are deliberately not represented here: locale
/// resolution falls back to the default locale instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.msg.is_empty() {
            write!(f, ": {}", self.msg)?;
        }
        Ok(())
    }
}

impl std::error::Error for FormatError {}

impl FormatError {
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Creates an unparsable-date error.
    #[must_use]
    pub const fn date() -> Self {
        Self::new(ErrorKind::Date)
    }

    /// Creates an unrecognized-time-zone error.
    #[must_use]
    pub const fn time_zone() -> Self {
        Self::new(ErrorKind::TimeZone)
    }

    /// Creates a malformed-pattern error.
    #[must_use]
    pub const fn pattern() -> Self {
        Self::new(ErrorKind::Pattern)
    }

    /// Attaches a message to this error.
    #[must_use]
    pub fn with_message(mut self, msg: impl Into<Cow<'static, str>>) -> Self {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the attached message, which may be empty.
    pub fn message(&self) -> &str {
        &self.msg
    }
}
