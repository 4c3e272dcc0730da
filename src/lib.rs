//! `zoned_fmt` renders absolute instants as human-readable strings for a
//! given IANA time zone, format pattern, and language.
//!
//! ```rust
//! use zoned_fmt::{format_date, format_date_language};
//!
//! // Default language (English).
//! let out = format_date("2024-05-20T12:00:00Z".into(), "d MMMM yyyy", "UTC").unwrap();
//! assert_eq!(out, "20 May 2024");
//!
//! // Explicit language; region subtags are stripped before lookup.
//! let out = format_date_language(
//!     "2024-05-20T12:00:00Z".into(),
//!     "d 'de' MMMM",
//!     "es-ES",
//!     "Europe/Madrid",
//! )
//! .unwrap();
//! assert_eq!(out, "20 de mayo");
//! ```
//!
//! The pipeline is stateless: an input is normalized into a [`ZonedInstant`],
//! the pattern is parsed, a locale is resolved from the language code
//! (falling back to English for unsupported codes), and the wall-clock
//! fields are rendered. No call observes or mutates state visible to other
//! calls, so every entry point is safe to use concurrently.
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod fmt;
pub mod locale;
pub mod pattern;

mod parsers;
mod timezone;
mod zoned;

use writeable::Writeable;

#[doc(inline)]
pub use error::{ErrorKind, FormatError};
pub use fmt::FormattableZoned;
pub use locale::{LanguageCode, Locale};
pub use pattern::FormatPattern;
pub use timezone::TimeZone;
pub use zoned::{DateInput, ZonedInstant};

/// The crate-wide result type.
pub type FormatResult<T> = Result<T, FormatError>;

/// Formats `date` in `time_zone` using the default language (English).
///
/// Callers holding an ambient language setting (an i18n context, a request
/// locale) are expected to pass it through [`format_date_language`]; this
/// function is the explicit-default convenience for language-neutral
/// surfaces.
pub fn format_date(date: DateInput<'_>, pattern: &str, time_zone: &str) -> FormatResult<String> {
    format_date_language(date, pattern, LanguageCode::DEFAULT.as_str(), time_zone)
}

/// Formats `date` in `time_zone` using an explicitly supplied language code.
///
/// Unsupported or malformed language codes fall back to English and never
/// fail; unparsable dates, unrecognized zones, and malformed patterns
/// propagate as [`FormatError`]s.
pub fn format_date_language(
    date: DateInput<'_>,
    pattern: &str,
    language: &str,
    time_zone: &str,
) -> FormatResult<String> {
    let pattern = FormatPattern::parse(pattern)?;
    let zone = TimeZone::try_from_str(time_zone)?;
    let zoned = ZonedInstant::normalize(date, zone)?;
    let locale = Locale::resolve(language);
    Ok(FormattableZoned::new(&zoned, &pattern, locale)
        .write_to_string()
        .into_owned())
}
