//! Exact points on a timeline.

use std::fmt;

use crate::cal::datetime::{CalendarDate, ClockTime, Month};
use crate::cal::math::{self, MILLISECONDS_IN_DAY};
use crate::cal::offset::Offset;
use crate::system::sys_time;


/// Number of days guaranteed to be in four years.
const DAYS_IN_4Y: i64 = 365 * 4 + 1;

/// Number of days guaranteed to be in a hundred years.
const DAYS_IN_100Y: i64 = 365 * 100 + 24;

/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;


/// Number of days between **1st January, 1970** and **1st March, 2000**.
///
/// This might seem like an odd reference point to use instead of the
/// epoch itself, but by sitting immediately after a possible leap-year
/// day on a year that’s a multiple of 400, it reduces the calendar
/// decomposition below to simple division over the Gregorian calendar’s
/// 400-year cycle. Instants are still measured from 1970; this value
/// (and the function that depends on it) stays private to this module.
const EPOCH_DIFFERENCE: i64 = 30 * 365   // 30 years between 2000 and 1970...
                            + 7          // plus seven days for leap years...
                            + 31 + 29;   // plus all the days in January and February in 2000.


/// This rather strange triangle is an array of the number of days
/// elapsed at the end of each month, starting at the beginning of March
/// (the first month after the reference point above), going backwards,
/// ignoring February.
const TIME_TRIANGLE: &[i64; 11] =
    &[31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31 + 31,  // January
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31,  // December
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30,  // November
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31,  // October
      31 + 30 + 31 + 30 + 31 + 31 + 30,  // September
      31 + 30 + 31 + 30 + 31 + 31,  // August
      31 + 30 + 31 + 30 + 31,  // July
      31 + 30 + 31 + 30,  // June
      31 + 30 + 31,  // May
      31 + 30,  // April
      31]; // March


/// An **instant** is an exact point on the timeline, irrespective of
/// calendar format, with millisecond precision.
///
/// Internally, this is represented by a 64-bit count of milliseconds
/// relative to midnight, 1st January, 1970 (UTC).
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct Instant {
    milliseconds: i64,
}

impl Instant {

    /// Creates a new Instant set to the given number of milliseconds
    /// since the Unix epoch.
    pub fn at_ms(milliseconds: i64) -> Self {
        Self { milliseconds }
    }

    /// Creates a new Instant set to the given number of seconds since
    /// the Unix epoch, and zero milliseconds.
    pub fn at(seconds: i64) -> Self {
        Self::at_ms(seconds * 1_000)
    }

    /// Creates a new Instant set to the Unix epoch.
    pub fn at_epoch() -> Self {
        Self::at(0)
    }

    /// Creates a new Instant set to the computer’s current time.
    pub fn now() -> Self {
        let (seconds, milliseconds) = unsafe { sys_time() };
        Self::at_ms(seconds * 1_000 + milliseconds as i64)
    }

    /// Returns the number of milliseconds since the epoch at this
    /// instant.
    pub fn milliseconds(&self) -> i64 {
        self.milliseconds
    }

    /// Builds the instant for already-validated date, time, and offset
    /// fields. The offset is subtracted here, and nowhere else; hour 24
    /// and second 60 simply carry over into the following day and
    /// minute.
    pub fn from_fields(date: CalendarDate, time: ClockTime, offset: Offset) -> Self {
        let days = math::day_from_epoch_year(date.year()) + date.yearday() - 1;

        Self::at_ms(days * MILLISECONDS_IN_DAY
            + time.to_milliseconds()
            - offset.as_milliseconds())
    }

    /// The UTC calendar date this instant falls on.
    pub fn to_utc_date(&self) -> CalendarDate {
        self.to_utc_datetime().0
    }

    /// The UTC calendar date and clock time this instant falls on.
    pub fn to_utc_datetime(&self) -> (CalendarDate, ClockTime) {
        let (days, milliseconds) = math::split_cycles(self.milliseconds, MILLISECONDS_IN_DAY);

        (date_from_days_since_epoch(days - EPOCH_DIFFERENCE),
         ClockTime::from_milliseconds_since_midnight(milliseconds))
    }
}

/// Computes a calendar date — year, month, and day — given the number
/// of days that have passed since the 1st of March, 2000.
fn date_from_days_since_epoch(days: i64) -> CalendarDate {

    // The Gregorian calendar works in 400-year cycles, which repeat
    // themselves ever after.
    //
    // This calculation works by finding the number of 400-year,
    // 100-year, and 4-year cycles, then constantly subtracting the
    // number of leftover days.
    let (num_400y_cycles, mut remainder) = math::split_cycles(days, DAYS_IN_400Y);

    let num_100y_cycles = remainder / DAYS_IN_100Y;
    remainder -= num_100y_cycles * DAYS_IN_100Y;  // remainder is now days left in this 100-year cycle

    let num_4y_cycles = remainder / DAYS_IN_4Y;
    remainder -= num_4y_cycles * DAYS_IN_4Y;  // remainder is now days left in this 4-year cycle

    let mut years = std::cmp::min(remainder / 365, 3);
    remainder -= years * 365;  // remainder is now days left in this year

    // Turn all those cycles into an actual number of years.
    years +=   4 * num_4y_cycles
           + 100 * num_100y_cycles
           + 400 * num_400y_cycles;

    // Work out the month and the number of days into the month by
    // scanning the time triangle, finding the month that has the
    // correct number of days elapsed at the end of it.
    // (it’s “11 - index” below because the triangle goes backwards)
    let result = TIME_TRIANGLE.iter()
                              .enumerate()
                              .find(|&(_, days)| *days <= remainder);

    let (mut month, month_days) = match result {
        Some((index, days)) => (11 - index as i64, remainder - *days),
        None => (0, remainder),  // No month found? Then it’s February.
    };

    // Add 2 to the month in order to compensate for the year starting
    // in March.
    month += 2;

    if month >= 12 {
        years += 1;   // wrap around for January and February
        month -= 12;  // (yes, again)
    }

    // The wrap immediately above keeps the month number inside the
    // range (0..12), so this cannot fail.
    let month = Month::from_zero(month as i8).unwrap();

    CalendarDate::from_parts(years + 2000, month, (month_days + 1) as i8)
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Instant({}ms)", self.milliseconds)
    }
}
