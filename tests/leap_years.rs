use isocal::{math, CalendarDate, Month};


#[test]
fn year_1600() {
    assert!(math::is_leap_year(1600));
}

#[test]
fn year_1900() {
    assert!(math::is_leap_year(1900) == false);
}

#[test]
fn year_2000() {
    assert!(math::is_leap_year(2000));
}

#[test]
fn year_2038() {
    assert!(math::is_leap_year(2038) == false);
}


#[test]
fn day_counts() {
    assert_eq!(Month::February.days_in_month(true), 29);
    assert_eq!(Month::February.days_in_month(false), 28);
    assert_eq!(math::days_in_year(2020), 366);
    assert_eq!(math::days_in_year(2019), 365);
}

#[test]
fn february_the_29th() {
    for year in [2004, 2008, 2012, 2016] {
        assert!(CalendarDate::ymd(year, Month::February, 29).is_ok());
        assert!(CalendarDate::ymd(year + 1, Month::February, 29).is_err());
    }
    assert!(CalendarDate::ymd(1600, Month::February, 29).is_ok());
    assert!(CalendarDate::ymd(1601, Month::February, 29).is_err());
    assert!(CalendarDate::ymd(1602, Month::February, 29).is_err());
}
