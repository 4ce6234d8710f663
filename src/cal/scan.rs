//! Grammar recognition for the textual ISO 8601 forms.
//!
//! The recognizer owns syntax only: it either rejects the input outright
//! or hands back the captured integer fields. Interpreting and
//! range-checking those fields is the parser’s job.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref EXTENDED_DATETIME: Regex = Regex::new(
        r"^(\d{4})-(\d{2})-(\d{2})T(\d{2}):(\d{2}):(\d{2})\.(\d{3})(Z|[+-]\d{2}:\d{2})?$"
    ).unwrap();

    static ref WEEK_DATE: Regex = Regex::new(
        r"^(\d{4})-W([0-5]\d)(?:-([1-7]))?$"
    ).unwrap();

    static ref ORDINAL_DATE: Regex = Regex::new(
        r"^(\d{4})-(\d{3})$"
    ).unwrap();
}


/// The fields captured from an extended datetime string.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DateTimeFields {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
    pub millisecond: i64,
    pub zone: Option<ZoneFields>,
}

/// A recognized zone suffix: `Z`, or a signed `HH:mm` offset with the
/// sign already applied to both components.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub(crate) enum ZoneFields {
    Utc,
    Offset { hours: i64, minutes: i64 },
}

/// The fields captured from an ISO week date string.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WeekFields {
    pub year: i64,
    pub week: i64,
    pub weekday: Option<i64>,
}

/// The fields captured from an ordinal date string.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OrdinalFields {
    pub year: i64,
    pub yearday: i64,
}


pub(crate) fn extended_datetime(input: &str) -> Option<DateTimeFields> {
    let caps = EXTENDED_DATETIME.captures(input)?;

    Some(DateTimeFields {
        year:        field(&caps, 1),
        month:       field(&caps, 2),
        day:         field(&caps, 3),
        hour:        field(&caps, 4),
        minute:      field(&caps, 5),
        second:      field(&caps, 6),
        millisecond: field(&caps, 7),
        zone:        caps.get(8).map(|m| zone_fields(m.as_str())),
    })
}

pub(crate) fn week_date(input: &str) -> Option<WeekFields> {
    let caps = WEEK_DATE.captures(input)?;

    Some(WeekFields {
        year:    field(&caps, 1),
        week:    field(&caps, 2),
        weekday: caps.get(3).map(|m| m.as_str().parse().unwrap()),
    })
}

pub(crate) fn ordinal_date(input: &str) -> Option<OrdinalFields> {
    let caps = ORDINAL_DATE.captures(input)?;

    Some(OrdinalFields {
        year:    field(&caps, 1),
        yearday: field(&caps, 2),
    })
}


fn zone_fields(suffix: &str) -> ZoneFields {
    if suffix == "Z" {
        return ZoneFields::Utc;
    }

    let sign = if suffix.starts_with('-') { -1 } else { 1 };
    let hours: i64 = suffix[1..3].parse().unwrap();
    let minutes: i64 = suffix[4..6].parse().unwrap();

    ZoneFields::Offset { hours: sign * hours, minutes: sign * minutes }
}

// The groups are all-digit and at most four wide, so parsing them back
// out cannot fail.
fn field(caps: &Captures<'_>, index: usize) -> i64 {
    caps.get(index).unwrap().as_str().parse().unwrap()
}
