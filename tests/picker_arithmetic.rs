extern crate dualcal;
use dualcal::{Calendar, Date, DateRange, DateTime, Month, Time};
use dualcal::{add_days_to_date, add_months_to_month_date, date_only, dates_only,
              days_in_month, is_same_day, is_same_month, month_date, month_delta,
              month_number};


fn afternoon_of(year: i64, month: Month, day: i8) -> DateTime {
    DateTime::new(Date::ymd(year, month, day).unwrap(),
                  Time::hms(16, 20, 0).unwrap())
}


#[test]
fn seven_months_from_june_to_january() {
    let start = afternoon_of(2019, Month::June, 15);
    let end = afternoon_of(2020, Month::January, 15);

    assert_eq!(month_delta(start, end, Calendar::Gregorian), 7);
    assert_eq!(month_delta(end, start, Calendar::Gregorian), -7);
}

#[test]
fn days_of_month_never_round_a_delta() {
    let late = afternoon_of(2019, Month::June, 30);
    let early = afternoon_of(2019, Month::July, 1);

    assert_eq!(month_delta(late, early, Calendar::Gregorian), 1);
    assert_eq!(month_delta(late, early, Calendar::Jalali), 0);  // both in Tir 1398
}

#[test]
fn three_months_ahead_is_the_first_of_april() {
    let start = afternoon_of(2019, Month::January, 15);
    let there = add_months_to_month_date(start, 3, Calendar::Gregorian);

    assert_eq!(there, Date::ymd(2019, Month::April, 1).unwrap().midnight());
    assert_eq!(there.time(), Time::midnight());
}

#[test]
fn month_addition_wraps_years_in_both_calendars() {
    let december = afternoon_of(2019, Month::December, 20);
    assert_eq!(add_months_to_month_date(december, 1, Calendar::Gregorian),
               Date::ymd(2020, Month::January, 1).unwrap().midnight());

    // 2025-03-01 is 11 Esfand 1403; a month later is Farvardin 1404,
    // which starts on 21 March 2025.
    let esfand = afternoon_of(2025, Month::March, 1);
    assert_eq!(add_months_to_month_date(esfand, 1, Calendar::Jalali),
               Date::ymd(2025, Month::March, 21).unwrap().midnight());
}

#[test]
fn day_addition_respects_month_lengths() {
    let date = afternoon_of(2024, Month::February, 28);
    assert_eq!(add_days_to_date(date, 2, Calendar::Gregorian),
               Date::ymd(2024, Month::March, 1).unwrap().midnight());

    // 2025-03-20 is 30 Esfand 1403, the leap day; the next day is Nowruz.
    let leap_day = afternoon_of(2025, Month::March, 20);
    assert_eq!(add_days_to_date(leap_day, 1, Calendar::Jalali),
               Date::ymd(2025, Month::March, 21).unwrap().midnight());
}

#[test]
fn february_lengths() {
    assert_eq!(days_in_month(afternoon_of(2000, Month::February, 1), Calendar::Gregorian), 29);
    assert_eq!(days_in_month(afternoon_of(1900, Month::February, 1), Calendar::Gregorian), 28);
    assert_eq!(days_in_month(afternoon_of(2024, Month::February, 1), Calendar::Gregorian), 29);
    assert_eq!(days_in_month(afternoon_of(2023, Month::February, 1), Calendar::Gregorian), 28);
}

#[test]
fn esfand_lengths() {
    // 2025-03-01 falls in Esfand 1403, a leap year; 2026-03-01 in Esfand 1404.
    assert_eq!(days_in_month(afternoon_of(2025, Month::March, 1), Calendar::Jalali), 30);
    assert_eq!(days_in_month(afternoon_of(2026, Month::March, 1), Calendar::Jalali), 29);
}

#[test]
fn same_day_ignores_the_clock() {
    let morning = DateTime::new(Date::ymd(2019, Month::June, 15).unwrap(),
                                Time::hm(8, 0).unwrap());
    let evening = afternoon_of(2019, Month::June, 15);

    assert!(is_same_day(Some(morning), Some(evening)));
    assert!(!is_same_day(Some(morning), Some(afternoon_of(2019, Month::June, 16))));
}

#[test]
fn absent_dates_compare_as_equal() {
    assert!(is_same_day(None, None));
    assert!(!is_same_day(None, Some(afternoon_of(2019, Month::June, 15))));
    assert!(is_same_month(None, None, Calendar::Jalali));
    assert!(!is_same_month(Some(afternoon_of(2019, Month::June, 15)), None, Calendar::Gregorian));
}

#[test]
fn months_agree_or_differ_by_calendar() {
    // A Gregorian month boundary that is no Jalali boundary...
    let a = afternoon_of(2019, Month::April, 30);
    let b = afternoon_of(2019, Month::May, 1);
    assert!(!is_same_month(Some(a), Some(b), Calendar::Gregorian));
    assert!(is_same_month(Some(a), Some(b), Calendar::Jalali));

    // ...and a Jalali boundary that is no Gregorian one.
    let c = afternoon_of(2019, Month::April, 20);
    let d = afternoon_of(2019, Month::April, 21);
    assert!(is_same_month(Some(c), Some(d), Calendar::Gregorian));
    assert!(!is_same_month(Some(c), Some(d), Calendar::Jalali));
}

#[test]
fn clearing_the_clock() {
    let date = afternoon_of(2019, Month::June, 15);
    let cleared = date_only(date);

    assert_eq!(cleared.date(), date.date());
    assert_eq!(cleared.time(), Time::midnight());
    assert_eq!(date_only(cleared), cleared);

    let range = DateRange { start: date, end: afternoon_of(2019, Month::July, 2) };
    let cleared = dates_only(range);
    assert_eq!(cleared.start, Date::ymd(2019, Month::June, 15).unwrap().midnight());
    assert_eq!(cleared.end, Date::ymd(2019, Month::July, 2).unwrap().midnight());
}

#[test]
fn month_numbers_follow_the_calendar() {
    let date = afternoon_of(2019, Month::April, 21);

    assert_eq!(month_number(date, Calendar::Gregorian), 4);
    assert_eq!(month_number(date, Calendar::Jalali), 2);  // 1 Ordibehesht 1398
}

#[test]
fn month_dates_keep_the_selected_year() {
    let date = afternoon_of(2019, Month::June, 15);

    assert_eq!(month_date(date, 2, Calendar::Gregorian).unwrap(),
               Date::ymd(2019, Month::February, 1).unwrap().midnight());

    // 2024-03-20 is 1 Farvardin 1403; month 12 of that Jalali year starts
    // on 19 February 2025.
    let nowruz = afternoon_of(2024, Month::March, 20);
    assert_eq!(month_date(nowruz, 12, Calendar::Jalali).unwrap(),
               Date::ymd(2025, Month::February, 19).unwrap().midnight());
}

#[test]
fn month_dates_reject_impossible_months() {
    let date = afternoon_of(2019, Month::June, 15);

    assert!(month_date(date, 0, Calendar::Gregorian).is_err());
    assert!(month_date(date, 13, Calendar::Gregorian).is_err());
    assert!(month_date(date, 13, Calendar::Jalali).is_err());
}
