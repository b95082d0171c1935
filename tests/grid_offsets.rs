extern crate dualcal;
use dualcal::{Calendar, Date, Month};
use dualcal::{add_months_to_month_date, first_day_of_week, first_day_offset};


#[test]
fn week_start_is_a_property_of_the_calendar() {
    assert_eq!(first_day_of_week(Calendar::Gregorian), 0);  // Sunday
    assert_eq!(first_day_of_week(Calendar::Jalali), 6);     // Saturday
}

#[test]
fn october_2018_has_one_leading_blank() {
    // 1 October 2018 was a Monday, one cell after Sunday.
    let date = Date::ymd(2018, Month::October, 15).unwrap().midnight();

    assert_eq!(first_day_offset(date, Calendar::Gregorian), 1);
}

#[test]
fn a_month_starting_on_sunday_has_none() {
    // 1 July 2018 was a Sunday.
    let date = Date::ymd(2018, Month::July, 20).unwrap().midnight();

    assert_eq!(first_day_offset(date, Calendar::Gregorian), 0);
}

#[test]
fn farvardin_1398_has_five_leading_blanks() {
    // 1 Farvardin 1398 was Thursday 21 March 2019, five cells after
    // Saturday. 1 April 2019 falls inside that Jalali month.
    let date = Date::ymd(2019, Month::April, 1).unwrap().midnight();

    assert_eq!(first_day_offset(date, Calendar::Jalali), 5);
}

#[test]
fn farvardin_1403_has_four_leading_blanks() {
    // 1 Farvardin 1403 was Wednesday 20 March 2024.
    let date = Date::ymd(2024, Month::March, 20).unwrap().midnight();

    assert_eq!(first_day_offset(date, Calendar::Jalali), 4);
}

#[test]
fn offsets_are_always_less_than_a_week() {
    let mut date = Date::ymd(2015, Month::January, 1).unwrap().midnight();

    for _ in 0..120 {
        for &calendar in [Calendar::Gregorian, Calendar::Jalali].iter() {
            let offset = first_day_offset(date, calendar);
            assert!(offset >= 0 && offset < 7,
                    "offset {} out of range for {:?} near {:?}", offset, calendar, date);
        }
        date = add_months_to_month_date(date, 1, Calendar::Gregorian);
    }
}
