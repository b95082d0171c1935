#![cfg(feature = "format")]

extern crate dualcal;
use dualcal::{BuiltinLocales, Calendar, Date, DateTime, Locale, Month, Time};
use dualcal::{format_date, format_medium_date, format_month_year, format_number,
              format_year, month_name};


fn nowruz_1403() -> DateTime {
    DateTime::new(Date::ymd(2024, Month::March, 20).unwrap(),
                  Time::hms(9, 30, 0).unwrap())
}

fn swedish() -> Locale {
    let months = vec!["januari", "februari", "mars", "april", "maj", "juni",
                      "juli", "augusti", "september", "oktober", "november", "december"]
        .into_iter().map(|name| name.to_owned()).collect();
    let weekdays = vec!["söndag", "måndag", "tisdag", "onsdag", "torsdag", "fredag", "lördag"]
        .into_iter().map(|name| name.to_owned()).collect();

    Locale::new("sv", months, weekdays, 1).unwrap()
}


#[test]
fn years_in_both_calendars() {
    let english = Locale::english();
    let persian = Locale::persian();

    assert_eq!(format_year(&english, &nowruz_1403(), Calendar::Gregorian), "2024");
    assert_eq!(format_year(&english, &nowruz_1403(), Calendar::Jalali), "1403");
    assert_eq!(format_year(&persian, &nowruz_1403(), Calendar::Jalali), "۱۴۰۳");
    assert_eq!(format_year(&persian, &nowruz_1403(), Calendar::Gregorian), "۲۰۲۴");
}

#[test]
fn month_and_year_headers() {
    assert_eq!(format_month_year(&Locale::english(), &nowruz_1403(), Calendar::Gregorian),
               "March 2024");
    assert_eq!(format_month_year(&Locale::english(), &nowruz_1403(), Calendar::Jalali),
               "Farvardin 1403");
    assert_eq!(format_month_year(&Locale::persian(), &nowruz_1403(), Calendar::Jalali),
               "فروردین ۱۴۰۳");
}

#[test]
fn unsupported_language_gets_an_empty_string_not_a_panic() {
    let swedish = swedish();

    assert_eq!(format_month_year(&swedish, &nowruz_1403(), Calendar::Jalali), "");
    assert_eq!(format_medium_date(&swedish, &nowruz_1403(), Calendar::Jalali), "");

    // The Gregorian paths work from the locale's own tables regardless.
    assert_eq!(format_month_year(&swedish, &nowruz_1403(), Calendar::Gregorian), "mars 2024");
    assert_eq!(format_date(&swedish, &nowruz_1403(), Calendar::Jalali), "1403/1/1");
}

#[test]
fn medium_dates_name_the_weekday() {
    // 20 March 2024 was a Wednesday.
    assert_eq!(format_medium_date(&Locale::english(), &nowruz_1403(), Calendar::Gregorian),
               "Wednesday, March 20");
    assert_eq!(format_medium_date(&Locale::english(), &nowruz_1403(), Calendar::Jalali),
               "Wednesday, Farvardin 1");
    assert_eq!(format_medium_date(&Locale::persian(), &nowruz_1403(), Calendar::Jalali),
               "چهارشنبه ۱ فروردین");
}

#[test]
fn numeric_dates_pad_by_language() {
    assert_eq!(format_date(&Locale::english(), &nowruz_1403(), Calendar::Gregorian),
               "2024/3/20");
    assert_eq!(format_date(&Locale::persian(), &nowruz_1403(), Calendar::Jalali),
               "۱۴۰۳/۰۱/۰۱");
    assert_eq!(format_date(&Locale::english(), &nowruz_1403(), Calendar::Jalali),
               "1403/1/1");
}

#[test]
fn month_names_for_pickers_month_list() {
    let persian = Locale::from_provider(&BuiltinLocales, "fa").unwrap();

    assert_eq!(month_name(&Locale::english(), 1, Calendar::Jalali), "Farvardin");
    assert_eq!(month_name(&persian, 1, Calendar::Jalali), "فروردین");
    assert_eq!(month_name(&persian, 1, Calendar::Gregorian), "ژانویه");
    assert_eq!(month_name(&Locale::english(), 9, Calendar::Gregorian), "September");
}

#[test]
fn number_transliteration() {
    assert_eq!(format_number("1404", "fa", ""), "۱۴۰۴");
    assert_eq!(format_number("7", "fa", "00"), "۰۷");
    assert_eq!(format_number("7", "en", "00"), "07");
    assert_eq!(format_number("123", "sv", ""), "123");
    assert_eq!(format_number("not a number", "fa", "00"), "not a number");
}
