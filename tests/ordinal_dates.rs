use isocal::{fmt, parse, Error, Month};


#[test]
fn the_first_day() {
    let instant = parse::ordinal_date("2020-001").unwrap();
    assert_eq!(instant.milliseconds(), 1_577_836_800_000);
}

#[test]
fn the_last_day_of_a_leap_year() {
    let instant = parse::ordinal_date("2020-366").unwrap();
    assert_eq!(instant, parse::extended_datetime("2020-12-31T00:00:00.000Z").unwrap());
}

#[test]
fn day_366_of_a_common_year() {
    assert_eq!(parse::ordinal_date("2019-366"),
               Err(Error::OutOfRange { field: "day", min: 1, max: 365 }));
}

#[test]
fn day_999() {
    assert_eq!(parse::ordinal_date("2020-999"),
               Err(Error::OutOfRange { field: "day", min: 1, max: 366 }));
}

#[test]
fn day_000() {
    assert_eq!(parse::ordinal_date("2020-000"),
               Err(Error::OutOfRange { field: "day", min: 1, max: 366 }));
}

#[test]
fn garbage() {
    assert_eq!(parse::ordinal_date("20aa-999"),
               Err(Error::Syntax("ordinal date")));
}

#[test]
fn formatting() {
    assert_eq!(fmt::iso_ordinal_date(2020, Month::January, 1).unwrap(), "2020-001");
    assert_eq!(fmt::iso_ordinal_date(2020, Month::December, 31).unwrap(), "2020-366");
    assert_eq!(fmt::iso_ordinal_date(2019, Month::December, 31).unwrap(), "2019-365");
    assert_eq!(fmt::iso_ordinal_date(999, Month::March, 1).unwrap(), "0999-060");
}

#[test]
fn formatting_the_leap_day() {
    assert_eq!(fmt::iso_ordinal_date(2000, Month::February, 29).unwrap(), "2000-060");
    assert_eq!(fmt::iso_ordinal_date(2001, Month::February, 29),
               Err(Error::OutOfRange { field: "day", min: 1, max: 28 }));
}
