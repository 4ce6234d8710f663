use isocal::{CalendarDate, Instant, Month, Today};


#[test]
fn the_epoch() {
    let date = Instant::at_epoch().to_utc_date();

    assert_eq!(date.year(), 1970);
    assert_eq!(date.month(), Month::January);
    assert_eq!(date.day(), 1);
}

#[test]
fn the_leap_day_of_2000() {
    let date = Instant::at_ms(951_782_400_000).to_utc_date();

    assert_eq!(date.year(), 2000);
    assert_eq!(date.month(), Month::February);
    assert_eq!(date.day(), 29);
}

#[test]
fn the_day_before_the_epoch() {
    let date = Instant::at_ms(-86_400_000).to_utc_date();

    assert_eq!(date.year(), 1969);
    assert_eq!(date.month(), Month::December);
    assert_eq!(date.day(), 31);
}

#[test]
fn the_distant_past() {
    let date = Instant::at_ms(-62_135_596_800_000).to_utc_date();

    assert_eq!(date.year(), 1);
    assert_eq!(date.month(), Month::January);
    assert_eq!(date.day(), 1);
}

#[test]
fn the_very_end_of_a_day() {
    let (date, time) = Instant::at_ms(86_399_999).to_utc_datetime();

    assert_eq!(date.day(), 1);
    assert_eq!(time.hour(), 23);
    assert_eq!(time.minute(), 59);
    assert_eq!(time.second(), 59);
    assert_eq!(time.millisecond(), 999);
}

#[test]
fn seconds_constructor() {
    assert_eq!(Instant::at(1_577_836_800), Instant::at_ms(1_577_836_800_000));
}

#[test]
fn today_is_not_before_2020() {
    let today = CalendarDate::today();
    assert!(today.year() >= 2020);
}
