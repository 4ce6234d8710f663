//! Adds convenience functions to some structs.
//!
//! # Example
//! ```
//! use isocal::CalendarDate;
//! use isocal::Today;
//! let today: CalendarDate = CalendarDate::today();
//! ```
use crate::cal::datetime::CalendarDate;
use crate::instant::Instant;

/// Adds `CalendarDate::today() -> CalendarDate`
pub trait Today {
    fn today() -> CalendarDate;
}

impl Today for CalendarDate {
    fn today() -> CalendarDate {
        Instant::now().to_utc_date()
    }
}
