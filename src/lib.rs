#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Library for [ISO 8601](https://en.wikipedia.org/wiki/ISO_8601) calendar
//! arithmetic: parsing and formatting of extended date-times, ISO
//! week-numbering dates, and ordinal (day-of-year) dates, converting
//! between their textual forms and millisecond instants.
//!
//! # Examples
//!
//! ```
//! use isocal::{fmt, parse, Month};
//!
//! let instant = parse::extended_datetime("2020-01-01T00:00:00.000Z").unwrap();
//! assert_eq!(instant.milliseconds(), 1_577_836_800_000);
//!
//! assert_eq!(fmt::iso_week(2020, Month::January, 1, false).unwrap(), "2020-W01-3");
//! assert_eq!(fmt::iso_ordinal_date(2020, Month::January, 1).unwrap(), "2020-001");
//! ```

mod cal;
mod instant;
mod system;

pub use cal::convenience::Today;
pub use cal::datetime::{CalendarDate, ClockTime, Error, Month, OrdinalDate, WeekDate, Weekday};
pub use cal::fmt;
pub use cal::math;
pub use cal::offset::Offset;
#[cfg(feature = "parse")]
pub use cal::parse;
pub use instant::Instant;
