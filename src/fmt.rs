//! Rendering of zoned instants through a parsed pattern.

use core::fmt::Write;

use chrono::{Datelike, Timelike};
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::locale::Locale;
use crate::pattern::{Field, FormatPattern, PatternItem};
use crate::zoned::ZonedInstant;

/// A zoned instant paired with the pattern and locale it renders with.
///
/// Rendering is deterministic: the output depends only on the instant, the
/// zone, the pattern, and the read-only locale table.
pub struct FormattableZoned<'a> {
    zoned: &'a ZonedInstant,
    pattern: &'a FormatPattern<'a>,
    locale: &'static Locale,
}

impl<'a> FormattableZoned<'a> {
    pub fn new(
        zoned: &'a ZonedInstant,
        pattern: &'a FormatPattern<'a>,
        locale: &'static Locale,
    ) -> Self {
        Self {
            zoned,
            pattern,
            locale,
        }
    }
}

impl Writeable for FormattableZoned<'_> {
    fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        let wall = self.zoned.wall();
        for item in &self.pattern.items {
            match item {
                PatternItem::Literal(text) => sink.write_str(text)?,
                PatternItem::Field(field) => write_field(sink, *field, &wall, self.locale)?,
            }
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::at_least(self.pattern.items.len())
    }
}

impl_display_with_writeable!(FormattableZoned<'_>);

fn write_field<W: Write + ?Sized>(
    sink: &mut W,
    field: Field,
    wall: &chrono::DateTime<chrono_tz::Tz>,
    locale: &Locale,
) -> core::fmt::Result {
    match field {
        Field::Year => write!(sink, "{}", wall.year()),
        Field::YearTwoDigit => write!(sink, "{:02}", wall.year().rem_euclid(100)),
        Field::YearPadded => write!(sink, "{:04}", wall.year()),
        Field::Month { padded } => write_number(sink, wall.month(), padded),
        Field::MonthAbbreviated => {
            sink.write_str(locale.months_abbreviated[wall.month0() as usize])
        }
        Field::MonthWide => sink.write_str(locale.months_wide[wall.month0() as usize]),
        Field::Day { padded } => write_number(sink, wall.day(), padded),
        Field::WeekdayAbbreviated => {
            sink.write_str(locale.weekdays_abbreviated[weekday_index(wall)])
        }
        Field::WeekdayWide => sink.write_str(locale.weekdays_wide[weekday_index(wall)]),
        Field::Hour23 { padded } => write_number(sink, wall.hour(), padded),
        Field::Hour12 { padded } => write_number(sink, wall.hour12().1, padded),
        Field::Minute { padded } => write_number(sink, wall.minute(), padded),
        Field::Second { padded } => write_number(sink, wall.second(), padded),
        Field::DayPeriod => sink.write_str(locale.day_periods[usize::from(wall.hour12().0)]),
    }
}

fn write_number<W: Write + ?Sized>(sink: &mut W, value: u32, padded: bool) -> core::fmt::Result {
    if padded {
        write!(sink, "{value:02}")
    } else {
        write!(sink, "{value}")
    }
}

fn weekday_index(wall: &chrono::DateTime<chrono_tz::Tz>) -> usize {
    wall.weekday().num_days_from_sunday() as usize
}
