//! Format pattern parsing.
//!
//! Patterns use TR35-style field letters (`"EEEE, d MMMM yyyy"`,
//! `"d 'de' MMMM"`), matching the hand-authored display patterns of the
//! calling components. A pattern is parsed once per formatting call and
//! borrows its source string.

use std::borrow::Cow;

use crate::{FormatError, FormatResult};

/// A single datetime field selected by a pattern token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    /// `y` — unpadded year.
    Year,
    /// `yy` — two-digit year.
    YearTwoDigit,
    /// `yyyy` — zero-padded four-digit year.
    YearPadded,
    /// `M` / `MM` — month number.
    Month { padded: bool },
    /// `MMM` — abbreviated month name.
    MonthAbbreviated,
    /// `MMMM` — wide month name.
    MonthWide,
    /// `d` / `dd` — day of month.
    Day { padded: bool },
    /// `E`..`EEE` — abbreviated weekday name.
    WeekdayAbbreviated,
    /// `EEEE` — wide weekday name.
    WeekdayWide,
    /// `H` / `HH` — hour of day, 0–23.
    Hour23 { padded: bool },
    /// `h` / `hh` — hour of day-period, 1–12.
    Hour12 { padded: bool },
    /// `m` / `mm` — minute.
    Minute { padded: bool },
    /// `s` / `ss` — second.
    Second { padded: bool },
    /// `a` — day period (AM/PM).
    DayPeriod,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PatternItem<'a> {
    Field(Field),
    Literal(Cow<'a, str>),
}

/// A parsed format pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatPattern<'a> {
    pub(crate) items: Vec<PatternItem<'a>>,
}

impl<'a> FormatPattern<'a> {
    /// Parses a pattern string.
    ///
    /// Fails with a pattern error on unrecognized field letters, unsupported
    /// repetition counts, or an unterminated quoted literal. Malformed
    /// patterns indicate a programming error in the calling component, so
    /// they are reported eagerly rather than rendered best-effort.
    pub fn parse(source: &'a str) -> FormatResult<Self> {
        let mut items = Vec::new();
        let mut rest = source;

        while let Some(ch) = rest.chars().next() {
            if ch.is_ascii_alphabetic() {
                let len = run_len(rest, ch);
                items.push(PatternItem::Field(field_for(ch, len)?));
                rest = &rest[len..];
            } else if ch == '\'' {
                let (literal, consumed) = parse_quoted(rest)?;
                items.push(PatternItem::Literal(literal));
                rest = &rest[consumed..];
            } else {
                let end = rest
                    .find(|c: char| c.is_ascii_alphabetic() || c == '\'')
                    .unwrap_or(rest.len());
                items.push(PatternItem::Literal(Cow::Borrowed(&rest[..end])));
                rest = &rest[end..];
            }
        }

        Ok(Self { items })
    }
}

fn run_len(source: &str, ch: char) -> usize {
    source.chars().take_while(|&c| c == ch).count()
}

fn field_for(ch: char, len: usize) -> FormatResult<Field> {
    let field = match (ch, len) {
        ('y', 1) => Field::Year,
        ('y', 2) => Field::YearTwoDigit,
        ('y', 4) => Field::YearPadded,
        ('M', 1) => Field::Month { padded: false },
        ('M', 2) => Field::Month { padded: true },
        ('M', 3) => Field::MonthAbbreviated,
        ('M', 4) => Field::MonthWide,
        ('d', 1) => Field::Day { padded: false },
        ('d', 2) => Field::Day { padded: true },
        ('E', 1..=3) => Field::WeekdayAbbreviated,
        ('E', 4) => Field::WeekdayWide,
        ('H', 1) => Field::Hour23 { padded: false },
        ('H', 2) => Field::Hour23 { padded: true },
        ('h', 1) => Field::Hour12 { padded: false },
        ('h', 2) => Field::Hour12 { padded: true },
        ('m', 1) => Field::Minute { padded: false },
        ('m', 2) => Field::Minute { padded: true },
        ('s', 1) => Field::Second { padded: false },
        ('s', 2) => Field::Second { padded: true },
        ('a', 1) => Field::DayPeriod,
        _ => {
            #[cfg(feature = "log")]
            log::error!("unrecognized pattern token '{}'", ch.to_string().repeat(len));
            return Err(FormatError::pattern().with_message(format!(
                "'{}' is not a recognized pattern token.",
                ch.to_string().repeat(len)
            )));
        }
    };
    Ok(field)
}

/// Parses a quoted literal starting at a `'`, returning the unescaped text
/// and the number of bytes consumed. A doubled quote is an escaped
/// apostrophe, inside or outside a quoted section.
fn parse_quoted(source: &str) -> FormatResult<(Cow<'_, str>, usize)> {
    debug_assert!(source.starts_with('\''));
    if source.starts_with("''") {
        return Ok((Cow::Borrowed("'"), 2));
    }

    let inner = &source[1..];
    let mut close = None;
    let mut escaped = false;
    let mut pos = 0;
    while let Some(offset) = inner[pos..].find('\'') {
        let at = pos + offset;
        if inner[at + 1..].starts_with('\'') {
            escaped = true;
            pos = at + 2;
        } else {
            close = Some(at);
            break;
        }
    }
    let Some(close) = close else {
        return Err(FormatError::pattern().with_message("Unterminated quote in pattern."));
    };

    let literal = if escaped {
        Cow::Owned(inner[..close].replace("''", "'"))
    } else {
        Cow::Borrowed(&inner[..close])
    };
    // Opening quote, literal body, closing quote.
    Ok((literal, close + 2))
}
