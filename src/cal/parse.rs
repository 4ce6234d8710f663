//! Parsing the textual ISO 8601 forms into instants.
//!
//! Each entry point runs the same pipeline: recognize the grammar
//! (`cal::scan`), range-check the captured fields, then do the epoch
//! arithmetic. Grammar mismatches come back as [`Error::Syntax`], field
//! violations as [`Error::OutOfRange`].

use std::str::FromStr;

use crate::cal::datetime::{CalendarDate, ClockTime, Error, Month, OrdinalDate, WeekDate, Weekday};
use crate::cal::offset::Offset;
use crate::cal::scan::{self, ZoneFields};
use crate::instant::Instant;


/// Parses an extended datetime string of the form
/// `YYYY-MM-DDTHH:mm:ss.sss`, optionally followed by `Z` or a signed
/// `±HH:mm` offset.
///
/// An offset suffix shifts the constructed instant; input without any
/// suffix is taken as UTC, since instants don’t model local zones.
///
/// ### Examples
///
/// ```
/// use isocal::parse;
///
/// let instant = parse::extended_datetime("2020-01-01T00:00:00.000Z").unwrap();
/// assert_eq!(instant.milliseconds(), 1_577_836_800_000);
///
/// assert!(parse::extended_datetime("2020-01-01Q00:00:00.000Z").is_err());
/// ```
pub fn extended_datetime(input: &str) -> Result<Instant, Error> {
    let fields = scan::extended_datetime(input).ok_or(Error::Syntax("extended date-time"))?;

    let month = Month::from_one(fields.month as i8)?;
    let date = CalendarDate::ymd(fields.year, month, fields.day as i8)?;
    let time = ClockTime::hms_ms(fields.hour as i8, fields.minute as i8,
                                 fields.second as i8, fields.millisecond as i16)?;

    let offset = match fields.zone {
        Some(ZoneFields::Offset { hours, minutes }) => Offset::of_minutes((hours * 60 + minutes) as i32)?,
        Some(ZoneFields::Utc) | None => Offset::utc(),
    };

    Ok(Instant::from_fields(date, time, offset))
}


/// Parses an ISO week date string: `YYYY-Www`, or `YYYY-Www-d`. When
/// the weekday is absent it defaults to Monday.
///
/// The week number is checked against the ISO week count of the year in
/// question; the resulting day can fall in the previous or next
/// Gregorian year, and the epoch arithmetic is written so that needs no
/// further validation.
///
/// ### Examples
///
/// ```
/// use isocal::parse;
///
/// // Week 1 of 2020 starts on Monday the 30th of December, 2019.
/// let short = parse::iso_week_date("2020-W01").unwrap();
/// let long = parse::iso_week_date("2020-W01-1").unwrap();
/// assert_eq!(short, long);
/// ```
pub fn iso_week_date(input: &str) -> Result<Instant, Error> {
    let fields = scan::week_date(input).ok_or(Error::Syntax("ISO week date"))?;

    let weekday = match fields.weekday {
        Some(d) => Weekday::from_one(d as i8)?,
        None => Weekday::Monday,
    };

    let week_date = WeekDate::new(fields.year, fields.week, weekday)?;
    Ok(week_date.to_instant())
}


/// Parses an ordinal date string: `YYYY-ddd`.
///
/// ### Examples
///
/// ```
/// use isocal::parse;
///
/// assert!(parse::ordinal_date("2020-366").is_ok());
/// assert!(parse::ordinal_date("2019-366").is_err());
/// ```
pub fn ordinal_date(input: &str) -> Result<Instant, Error> {
    let fields = scan::ordinal_date(input).ok_or(Error::Syntax("ordinal date"))?;

    let ordinal = OrdinalDate::new(fields.year, fields.yearday)?;
    Ok(ordinal.to_instant())
}


impl FromStr for Instant {
    type Err = Error;

    /// Parses an instant from the extended datetime form.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        extended_datetime(input)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn date() {
        let instant = extended_datetime("1985-04-12T23:20:50.520Z").unwrap();
        assert_eq!(instant.to_utc_date(), CalendarDate::ymd(1985, Month::April, 12).unwrap());
    }

    #[test]
    fn fail() {
        let instant = extended_datetime("");
        assert_eq!(instant, Err(Error::Syntax("extended date-time")));
    }
}
