//! Calendar value types: dates, clock times, week dates, and ordinal
//! dates, with the field validation every conversion goes through.

use thiserror::Error as ThisError;

use crate::cal::math;
use crate::instant::Instant;

use self::Month::*;
use self::Weekday::*;


pub(crate) const MIN_YEAR: i64 = 1;
pub(crate) const MAX_YEAR: i64 = 9999;
pub(crate) const MAX_HOUR: i64 = 24;
pub(crate) const MAX_MINUTE: i64 = 59;
pub(crate) const MAX_SECOND: i64 = 60;
pub(crate) const MAX_MILLISECOND: i64 = 999;


/// Anything that can go wrong while parsing, validating, or formatting
/// a date. The two variants are deliberately coarse so that callers can
/// branch on *why* an input was rejected: bad syntax, or a field that
/// matched the grammar but falls outside its domain.
#[derive(ThisError, PartialEq, Eq, Debug, Copy, Clone)]
pub enum Error {

    /// The input text did not match the grammar named in the message.
    #[error("input is not a valid {0} string")]
    Syntax(&'static str),

    /// A field is outside its valid range. The bounds are computed where
    /// they depend on the calendar (day counts, week counts).
    #[error("{field} must be >= {min} and <= {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March
/// (0-indexed)? In this case, it’s 1-indexed, to have January become 1
/// when you use `as i32` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

static MONTHS: &[Month] = &[
    January,  February,  March,
    April,    May,       June,
    July,     August,    September,
    October,  November,  December,
];

#[allow(clippy::match_same_arms)]
impl Month {

    /// Returns the number of days in this month, depending on whether
    /// it’s a leap year or not.
    ///
    /// ### Examples
    ///
    /// ```
    /// use isocal::Month;
    ///
    /// assert_eq!(Month::February.days_in_month(true), 29);
    /// assert_eq!(Month::February.days_in_month(false), 28);
    /// ```
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Returns the number of days that have elapsed in a year *before*
    /// this month begins, with no leap year check.
    fn days_before_start(self) -> i64 {
        match self {
            January =>   0, February =>  31, March     =>  59,
            April   =>  90, May      => 120, June      => 151,
            July    => 181, August   => 212, September => 243,
            October => 273, November => 304, December  => 334,
        }
    }

    /// Returns the day of the year (1-based) on which this month begins.
    /// From March onward the start day shifts by one in leap years.
    pub fn start_day(self, leap_year: bool) -> i64 {
        let leap_offset = if leap_year && self >= March { 1 } else { 0 };
        self.days_before_start() + leap_offset + 1
    }

    /// Returns the month containing the given day of the year: the
    /// greatest month whose start day is not after `yearday`.
    ///
    /// ### Examples
    ///
    /// ```
    /// use isocal::Month;
    ///
    /// // Day 60 is the 29th of February on leap years, and the 1st of
    /// // March otherwise.
    /// assert_eq!(Month::by_yearday(60, true), Ok(Month::February));
    /// assert_eq!(Month::by_yearday(60, false), Ok(Month::March));
    /// ```
    pub fn by_yearday(yearday: i64, leap_year: bool) -> Result<Self, Error> {
        let last = if leap_year { 366 } else { 365 };
        if yearday < 1 || yearday > last {
            return Err(Error::OutOfRange { field: "day", min: 1, max: last });
        }

        let month = MONTHS.iter().rev().find(|m| m.start_day(leap_year) <= yearday);

        // January starts on day 1, so the search cannot come up empty.
        Ok(*month.unwrap())
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use isocal::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i8) -> Result<Self, Error> {
        Ok(match month {
             1 => January,   2 => February,   3 => March,
             4 => April,     5 => May,        6 => June,
             7 => July,      8 => August,     9 => September,
            10 => October,  11 => November,  12 => December,
             _ => return Err(Error::OutOfRange { field: "month", min: 1, max: 12 }),
        })
    }

    /// Returns the month based on a number, with January as **Month 0**,
    /// February as **Month 1**, and so on.
    pub fn from_zero(month: i8) -> Result<Self, Error> {
        Ok(match month {
            0 => January,   1 => February,   2 => March,
            3 => April,     4 => May,        5 => June,
            6 => July,      7 => August,     8 => September,
            9 => October,  10 => November,  11 => December,
            _ => return Err(Error::OutOfRange { field: "month", min: 0, max: 11 }),
        })
    }
}


/// A named day of the week.
///
/// Weekdays don’t get an `Ord` instance because there’s no real
/// standard as to whether Sunday should come before Monday, or the
/// other way around; the ISO number below is explicit about it instead.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Weekday {
    Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday,
}

impl Weekday {

    /// The ISO 8601 weekday number: 1 for Monday through 7 for Sunday.
    pub fn iso_number(self) -> i8 {
        match self {
            Monday   => 1,  Tuesday  => 2,
            Wednesday => 3, Thursday => 4,
            Friday   => 5,  Saturday => 6,
            Sunday   => 7,
        }
    }

    /// Return the weekday based on its ISO number, with Monday as Day 1
    /// and Sunday as Day 7.
    ///
    /// ```rust
    /// use isocal::Weekday;
    /// assert_eq!(Weekday::from_one(4), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_one(8).is_err());
    /// ```
    pub fn from_one(weekday: i8) -> Result<Self, Error> {
        Ok(match weekday {
            1 => Monday,     2 => Tuesday,   3 => Wednesday,
            4 => Thursday,   5 => Friday,    6 => Saturday,
            7 => Sunday,
            _ => return Err(Error::OutOfRange { field: "weekday", min: 1, max: 7 }),
        })
    }
}


/// A **calendar date** is a year, a month, and a day of the month.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct CalendarDate {
    year:  i64,
    month: Month,
    day:   i8,
}

impl CalendarDate {

    /// Creates a new calendar date from the given year, month, and day
    /// fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use isocal::{CalendarDate, Month};
    ///
    /// let date = CalendarDate::ymd(1969, Month::July, 20).unwrap();
    /// assert_eq!(date.year(), 1969);
    /// assert_eq!(date.month(), Month::July);
    /// assert_eq!(date.day(), 20);
    ///
    /// assert!(CalendarDate::ymd(2100, Month::February, 29).is_err());
    /// ```
    pub fn ymd(year: i64, month: Month, day: i8) -> Result<Self, Error> {
        if year < MIN_YEAR || year > MAX_YEAR {
            return Err(Error::OutOfRange { field: "year", min: MIN_YEAR, max: MAX_YEAR });
        }

        let day_count = month.days_in_month(math::is_leap_year(year));
        if day < 1 || day > day_count {
            return Err(Error::OutOfRange { field: "day", min: 1, max: day_count as i64 });
        }

        Ok(Self { year, month, day })
    }

    /// Creates a date without checking the fields. Only for use where
    /// the values are already known to form a valid date.
    pub(crate) fn from_parts(year: i64, month: Month, day: i8) -> Self {
        Self { year, month, day }
    }

    /// The year, in absolute terms: the year 2014 has a year value of
    /// 2014, rather than 14 or 114 or anything like that.
    pub fn year(&self) -> i64 {
        self.year
    }

    /// The month of the year.
    pub fn month(&self) -> Month {
        self.month
    }

    /// The day of the month, from 1 to 31.
    pub fn day(&self) -> i8 {
        self.day
    }

    /// The day of the year, from 1 to 366.
    pub fn yearday(&self) -> i64 {
        self.month.start_day(math::is_leap_year(self.year)) + self.day as i64 - 1
    }

    /// The day of the week, computed by Zeller’s congruence.
    pub fn weekday(&self) -> Weekday {
        let dow = math::weekday(self.year, self.month as i64, self.day as i64);

        // Zeller output runs from 0 (Monday) to 6 (Sunday), so the shift
        // to ISO numbering stays inside 1..=7.
        Weekday::from_one(dow as i8 + 1).unwrap()
    }
}


/// A **clock time** is a time of day: hour, minute, second, and
/// millisecond.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct ClockTime {
    hour:   i8,
    minute: i8,
    second: i8,
    millisecond: i16,
}

impl ClockTime {

    /// Returns the time at midnight, with all fields initialised to 0.
    pub fn midnight() -> Self {
        Self { hour: 0, minute: 0, second: 0, millisecond: 0 }
    }

    /// Creates a new clock time with the given hour, minute, and second
    /// fields. The millisecond field is set to 0.
    pub fn hms(hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        Self::hms_ms(hour, minute, second, 0)
    }

    /// Creates a new clock time with the given hour, minute, second,
    /// and millisecond fields.
    ///
    /// The values are checked for validity before instantiation. Two of
    /// the bounds are deliberately loose: hour 24 is accepted whatever
    /// the other fields hold (ISO 8601’s end-of-day notation), and
    /// second 60 is accepted to tolerate leap-second timestamps — no
    /// leap-second adjustment is performed on it.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use isocal::ClockTime;
    ///
    /// assert!(ClockTime::hms_ms(23, 59, 59, 999).is_ok());
    /// assert!(ClockTime::hms_ms(23, 59, 60, 0).is_ok());
    /// assert!(ClockTime::hms_ms(12, 60, 0, 0).is_err());
    /// ```
    pub fn hms_ms(hour: i8, minute: i8, second: i8, millisecond: i16) -> Result<Self, Error> {
        if hour < 0 || hour as i64 > MAX_HOUR {
            return Err(Error::OutOfRange { field: "hour", min: 0, max: MAX_HOUR });
        }
        if minute < 0 || minute as i64 > MAX_MINUTE {
            return Err(Error::OutOfRange { field: "minute", min: 0, max: MAX_MINUTE });
        }
        if second < 0 || second as i64 > MAX_SECOND {
            return Err(Error::OutOfRange { field: "second", min: 0, max: MAX_SECOND });
        }
        if millisecond < 0 || millisecond as i64 > MAX_MILLISECOND {
            return Err(Error::OutOfRange { field: "millisecond", min: 0, max: MAX_MILLISECOND });
        }

        Ok(Self { hour, minute, second, millisecond })
    }

    /// Computes the hour, minute, second, and millisecond fields from
    /// the number of milliseconds that have elapsed since midnight.
    pub(crate) fn from_milliseconds_since_midnight(milliseconds: i64) -> Self {
        Self {
            hour:   (milliseconds / 3_600_000) as i8,
            minute: (milliseconds / 60_000 % 60) as i8,
            second: (milliseconds / 1_000 % 60) as i8,
            millisecond: (milliseconds % 1_000) as i16,
        }
    }

    /// Calculates the number of milliseconds into the day this time is
    /// at. Hour 24 and second 60 simply carry over into the next day
    /// and minute.
    pub(crate) fn to_milliseconds(&self) -> i64 {
        self.hour as i64 * 3_600_000
            + self.minute as i64 * 60_000
            + self.second as i64 * 1_000
            + self.millisecond as i64
    }

    /// The hour of the day.
    pub fn hour(&self) -> i8 {
        self.hour
    }

    /// The minute of the hour.
    pub fn minute(&self) -> i8 {
        self.minute
    }

    /// The second of the minute.
    pub fn second(&self) -> i8 {
        self.second
    }

    /// The millisecond of the second.
    pub fn millisecond(&self) -> i16 {
        self.millisecond
    }
}


/// An **ISO week date**: a week-numbering year, a week, and a weekday.
///
/// The week-numbering year can differ from the Gregorian year of the
/// same day near year boundaries, because week 1 is anchored on the
/// week containing the year’s first Thursday.
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct WeekDate {
    year:    i64,
    week:    i8,
    weekday: Weekday,
}

impl WeekDate {

    /// Creates a week date from the given fields, checking the week
    /// number against the ISO week count of the year in question.
    pub fn new(year: i64, week: i64, weekday: Weekday) -> Result<Self, Error> {
        if year < MIN_YEAR || year > MAX_YEAR {
            return Err(Error::OutOfRange { field: "year", min: MIN_YEAR, max: MAX_YEAR });
        }

        let week_count = math::weeks_in_iso_year(year);
        if week < 1 || week > week_count {
            return Err(Error::OutOfRange { field: "week", min: 1, max: week_count });
        }

        Ok(Self { year, week: week as i8, weekday })
    }

    /// Computes the ISO week date of the given calendar date.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use isocal::{CalendarDate, Month, WeekDate};
    ///
    /// // The 30th of December 2019 already belongs to week 1 of 2020.
    /// let date = CalendarDate::ymd(2019, Month::December, 30).unwrap();
    /// let week_date = WeekDate::from_date(&date);
    /// assert_eq!(week_date.year(), 2020);
    /// assert_eq!(week_date.week(), 1);
    /// ```
    pub fn from_date(date: &CalendarDate) -> Self {
        let weekday = date.weekday();
        let mut year = date.year();
        let mut week = (date.yearday() - weekday.iso_number() as i64 + 10) / 7;

        if week == 0 {
            // The first days of January can fall in the final week of
            // the previous ISO year.
            year -= 1;
            week = math::weeks_in_iso_year(year);
        }
        else if week == 53 && math::weeks_in_iso_year(year) == 52 {
            // And the last days of December in week 1 of the next one.
            year += 1;
            week = 1;
        }

        Self { year, week: week as i8, weekday }
    }

    /// The day of the year this week date falls on, relative to its
    /// week-numbering year. Can be zero or negative, or exceed the
    /// year’s day count, when the week straddles a year boundary.
    pub fn yearday(&self) -> i64 {
        math::yearday_from_week_date(self.year, self.week as i64, self.weekday.iso_number() as i64)
    }

    /// The instant at the start (midnight) of this week date.
    pub fn to_instant(&self) -> Instant {
        Instant::at_ms(math::time_from_year(self.year)
            + (self.yearday() - 1) * math::MILLISECONDS_IN_DAY)
    }

    /// The week-numbering year.
    pub fn year(&self) -> i64 {
        self.year
    }

    /// The week of the year, from 1 to 53.
    pub fn week(&self) -> i8 {
        self.week
    }

    /// The day of the week.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}


/// An **ordinal date**: a year and a day of that year.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct OrdinalDate {
    year:    i64,
    yearday: i16,
}

impl OrdinalDate {

    /// Creates an ordinal date from the given fields, checking the day
    /// number against the day count of the year in question.
    pub fn new(year: i64, yearday: i64) -> Result<Self, Error> {
        if year < MIN_YEAR || year > MAX_YEAR {
            return Err(Error::OutOfRange { field: "year", min: MIN_YEAR, max: MAX_YEAR });
        }

        let day_count = math::days_in_year(year);
        if yearday < 1 || yearday > day_count {
            return Err(Error::OutOfRange { field: "day", min: 1, max: day_count });
        }

        Ok(Self { year, yearday: yearday as i16 })
    }

    /// The ordinal date of the given calendar date.
    pub fn from_date(date: &CalendarDate) -> Self {
        Self { year: date.year(), yearday: date.yearday() as i16 }
    }

    /// Converts this ordinal date back to a calendar date.
    pub fn to_date(&self) -> CalendarDate {
        let leap_year = math::is_leap_year(self.year);

        // The yearday was checked against this year on construction.
        let month = Month::by_yearday(self.yearday as i64, leap_year).unwrap();
        let day = self.yearday as i64 - month.start_day(leap_year) + 1;

        CalendarDate::from_parts(self.year, month, day as i8)
    }

    /// The instant at the start (midnight) of this ordinal date.
    pub fn to_instant(&self) -> Instant {
        Instant::at_ms(math::time_from_year(self.year)
            + (self.yearday as i64 - 1) * math::MILLISECONDS_IN_DAY)
    }

    /// The year.
    pub fn year(&self) -> i64 {
        self.year
    }

    /// The day of the year, from 1 to 366.
    pub fn yearday(&self) -> i16 {
        self.yearday
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn some_leap_years() {
        for year in [2004, 2008, 2012, 2016] {
            assert!(CalendarDate::ymd(year, February, 29).is_ok());
            assert!(CalendarDate::ymd(year + 1, February, 29).is_err());
        }
        assert!(CalendarDate::ymd(1600, February, 29).is_ok());
        assert!(CalendarDate::ymd(1601, February, 29).is_err());
    }

    #[test]
    fn month_start_days() {
        assert_eq!(January.start_day(false), 1);
        assert_eq!(February.start_day(true), 32);
        assert_eq!(March.start_day(false), 60);
        assert_eq!(March.start_day(true), 61);
        assert_eq!(December.start_day(false), 335);
        assert_eq!(December.start_day(true), 336);
    }

    #[test]
    fn month_from_yearday_boundaries() {
        assert_eq!(Month::by_yearday(1, false), Ok(January));
        assert_eq!(Month::by_yearday(31, false), Ok(January));
        assert_eq!(Month::by_yearday(32, false), Ok(February));
        assert_eq!(Month::by_yearday(59, false), Ok(February));
        assert_eq!(Month::by_yearday(60, false), Ok(March));
        assert_eq!(Month::by_yearday(60, true), Ok(February));
        assert_eq!(Month::by_yearday(61, true), Ok(March));
        assert_eq!(Month::by_yearday(365, false), Ok(December));
        assert_eq!(Month::by_yearday(366, true), Ok(December));

        assert_eq!(Month::by_yearday(366, false),
                   Err(Error::OutOfRange { field: "day", min: 1, max: 365 }));
        assert_eq!(Month::by_yearday(0, false),
                   Err(Error::OutOfRange { field: "day", min: 1, max: 365 }));
    }

    #[test]
    fn yeardays() {
        let date = CalendarDate::ymd(2015, September, 25).unwrap();
        assert_eq!(date.yearday(), 268);

        let date = CalendarDate::ymd(2016, September, 24).unwrap();
        assert_eq!(date.yearday(), 268);
    }

    #[test]
    fn weekdays() {
        assert_eq!(CalendarDate::ymd(2020, January, 1).unwrap().weekday(), Wednesday);
        assert_eq!(CalendarDate::ymd(2019, December, 30).unwrap().weekday(), Monday);
        assert_eq!(CalendarDate::ymd(2000, February, 29).unwrap().weekday(), Tuesday);
    }

    #[test]
    fn permissive_clock_bounds() {
        assert!(ClockTime::hms(24, 0, 0).is_ok());
        assert!(ClockTime::hms_ms(24, 59, 0, 0).is_ok());
        assert!(ClockTime::hms_ms(23, 59, 60, 999).is_ok());

        assert_eq!(ClockTime::hms(25, 0, 0),
                   Err(Error::OutOfRange { field: "hour", min: 0, max: 24 }));
        assert_eq!(ClockTime::hms_ms(0, 0, 61, 0),
                   Err(Error::OutOfRange { field: "second", min: 0, max: 60 }));
        assert_eq!(ClockTime::hms_ms(0, 0, 0, 1000),
                   Err(Error::OutOfRange { field: "millisecond", min: 0, max: 999 }));
    }

    #[test]
    fn week_counts_are_enforced() {
        assert!(WeekDate::new(2020, 53, Monday).is_ok());
        assert_eq!(WeekDate::new(2019, 53, Monday),
                   Err(Error::OutOfRange { field: "week", min: 1, max: 52 }));
        assert_eq!(WeekDate::new(2020, 0, Monday),
                   Err(Error::OutOfRange { field: "week", min: 1, max: 53 }));
    }

    #[test]
    fn week_dates_near_year_boundaries() {
        let date = CalendarDate::ymd(2020, January, 1).unwrap();
        let week_date = WeekDate::from_date(&date);
        assert_eq!((week_date.year(), week_date.week(), week_date.weekday()),
                   (2020, 1, Wednesday));

        let date = CalendarDate::ymd(2021, January, 1).unwrap();
        let week_date = WeekDate::from_date(&date);
        assert_eq!((week_date.year(), week_date.week(), week_date.weekday()),
                   (2020, 53, Friday));

        let date = CalendarDate::ymd(2024, December, 31).unwrap();
        let week_date = WeekDate::from_date(&date);
        assert_eq!((week_date.year(), week_date.week(), week_date.weekday()),
                   (2025, 1, Tuesday));
    }

    #[test]
    fn ordinal_dates_convert_back() {
        let ordinal = OrdinalDate::new(2020, 60).unwrap();
        assert_eq!(ordinal.to_date(), CalendarDate::ymd(2020, February, 29).unwrap());

        let ordinal = OrdinalDate::new(2019, 60).unwrap();
        assert_eq!(ordinal.to_date(), CalendarDate::ymd(2019, March, 1).unwrap());

        let ordinal = OrdinalDate::new(2020, 366).unwrap();
        assert_eq!(ordinal.to_date(), CalendarDate::ymd(2020, December, 31).unwrap());
    }
}
