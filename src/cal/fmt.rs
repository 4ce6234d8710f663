//! Formatting dates as the textual ISO 8601 forms, plus the `Debug`
//! renderings of the calendar types.

use std::fmt;

use crate::cal::datetime::{CalendarDate, ClockTime, Error, Month, OrdinalDate, WeekDate};
use crate::instant::Instant;


/// Formats a calendar date in the ISO 8601 week format: the long form
/// `YYYY-Www-d`, or the short form `YYYY-Www` when `short` is set.
///
/// The fields are validated first, and the week-numbering year in the
/// output can differ from the year passed in when the date falls in a
/// week belonging to the previous or next ISO year.
///
/// ### Examples
///
/// ```
/// use isocal::{fmt, Month};
///
/// assert_eq!(fmt::iso_week(2020, Month::January, 1, false).unwrap(), "2020-W01-3");
/// assert_eq!(fmt::iso_week(2020, Month::January, 1, true).unwrap(), "2020-W01");
/// assert_eq!(fmt::iso_week(2021, Month::January, 1, false).unwrap(), "2020-W53-5");
/// ```
pub fn iso_week(year: i64, month: Month, day: i8, short: bool) -> Result<String, Error> {
    let date = CalendarDate::ymd(year, month, day)?;
    let week_date = WeekDate::from_date(&date);

    if short {
        Ok(format!("{:04}-W{:02}", week_date.year(), week_date.week()))
    }
    else {
        Ok(format!("{:04}-W{:02}-{}", week_date.year(), week_date.week(),
                   week_date.weekday().iso_number()))
    }
}

/// Formats the UTC date of an instant in the ISO 8601 week format.
pub fn iso_week_from_instant(instant: Instant, short: bool) -> Result<String, Error> {
    let date = instant.to_utc_date();
    iso_week(date.year(), date.month(), date.day(), short)
}


/// Formats a calendar date in the ISO 8601 ordinal date format,
/// `YYYY-ddd`.
///
/// ### Examples
///
/// ```
/// use isocal::{fmt, Month};
///
/// assert_eq!(fmt::iso_ordinal_date(2020, Month::January, 1).unwrap(), "2020-001");
/// assert_eq!(fmt::iso_ordinal_date(2020, Month::December, 31).unwrap(), "2020-366");
/// ```
pub fn iso_ordinal_date(year: i64, month: Month, day: i8) -> Result<String, Error> {
    let date = CalendarDate::ymd(year, month, day)?;
    let ordinal = OrdinalDate::from_date(&date);

    Ok(format!("{:04}-{:03}", ordinal.year(), ordinal.yearday()))
}

/// Formats the UTC date of an instant in the ISO 8601 ordinal date
/// format.
pub fn iso_ordinal_date_from_instant(instant: Instant) -> Result<String, Error> {
    let date = instant.to_utc_date();
    iso_ordinal_date(date.year(), date.month(), date.day())
}


/// Formats an instant as the canonical extended datetime string,
/// `YYYY-MM-DDTHH:mm:ss.sssZ`. Fails when the instant falls outside the
/// four-digit year range.
pub fn iso_datetime_from_instant(instant: Instant) -> Result<String, Error> {
    let (date, time) = instant.to_utc_datetime();
    let date = CalendarDate::ymd(date.year(), date.month(), date.day())?;

    Ok(format!("{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
               date.year(), date.month() as i64, date.day(),
               time.hour(), time.minute(), time.second(), time.millisecond()))
}


impl fmt::Debug for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CalendarDate({:04}-{:02}-{:02})", self.year(), self.month() as i64, self.day())
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02}:{:02}.{:03})",
               self.hour(), self.minute(), self.second(), self.millisecond())
    }
}

impl fmt::Debug for WeekDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WeekDate({:04}-W{:02}-{})", self.year(), self.week(), self.weekday().iso_number())
    }
}

impl fmt::Debug for OrdinalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrdinalDate({:04}-{:03})", self.year(), self.yearday())
    }
}
