//! ISO 8601 date and time calculations, which use years, months, days,
//! weeks, and ordinal day numbers.

pub mod convenience;
pub mod datetime;
pub mod fmt;
pub mod math;
pub mod offset;
#[cfg(feature = "parse")]
pub mod parse;
#[cfg(feature = "parse")]
pub(crate) mod scan;
