//! UTC offset suffixes on datetime strings.

use std::fmt;

use crate::cal::datetime::Error;


/// A UTC offset recognized at the end of a datetime string: either UTC
/// itself (a `Z` suffix, or no suffix at all), or a signed whole-minute
/// offset from it.
///
/// The parsing core never applies the offset to its field arithmetic;
/// it is folded in once, at instant construction.
#[derive(PartialEq, Eq, Copy, Clone)]
pub struct Offset {
    offset_minutes: Option<i32>,
}

impl Offset {

    /// The zero offset, UTC itself.
    pub fn utc() -> Self {
        Self { offset_minutes: None }
    }

    /// An offset of the given number of minutes ahead of (positive) or
    /// behind (negative) UTC. Offsets beyond ±23:59 are rejected.
    pub fn of_minutes(minutes: i32) -> Result<Self, Error> {
        if minutes <= -1440 || minutes >= 1440 {
            Err(Error::OutOfRange { field: "offset", min: -1439, max: 1439 })
        }
        else {
            Ok(Self { offset_minutes: Some(minutes) })
        }
    }

    /// Whether this is the UTC offset.
    pub fn is_utc(self) -> bool {
        self.offset_minutes.is_none()
    }

    /// The hour component of the offset.
    pub fn hours(self) -> i8 {
        match self.offset_minutes {
            Some(m) => (m / 60) as i8,
            None => 0,
        }
    }

    /// The minute component of the offset.
    pub fn minutes(self) -> i8 {
        match self.offset_minutes {
            Some(m) => (m % 60) as i8,
            None => 0,
        }
    }

    pub(crate) fn as_milliseconds(self) -> i64 {
        self.offset_minutes.unwrap_or(0) as i64 * 60_000
    }
}

impl fmt::Debug for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset_minutes {
            None => write!(f, "Offset(Z)"),
            Some(m) => {
                let sign = if m < 0 { '-' } else { '+' };
                write!(f, "Offset({}{:02}:{:02})", sign, (m / 60).abs(), (m % 60).abs())
            },
        }
    }
}


#[cfg(test)]
mod test {
    use super::Offset;

    #[test]
    fn fixed_minutes() {
        assert!(Offset::of_minutes(330).is_ok());
        assert!(Offset::of_minutes(-90).is_ok());
    }

    #[test]
    fn fixed_minutes_err() {
        assert!(Offset::of_minutes(1440).is_err());
        assert!(Offset::of_minutes(-100_000).is_err());
    }

    #[test]
    fn debug_zulu() {
        let offset = Offset::utc();
        let debugged = format!("{:?}", offset);
        assert_eq!(debugged, "Offset(Z)");
    }

    #[test]
    fn debug_offset() {
        let offset = Offset::of_minutes(-25).unwrap();
        let debugged = format!("{:?}", offset);
        assert_eq!(debugged, "Offset(-00:25)");
    }

    #[test]
    fn debug_half_hour() {
        let offset = Offset::of_minutes(5 * 60 + 30).unwrap();
        let debugged = format!("{:?}", offset);
        assert_eq!(debugged, "Offset(+05:30)");
    }
}
