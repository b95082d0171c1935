//! Locale-aware rendering of picker dates.
//!
//! These are the strings a calendar picker shows: a year label, a
//! month-and-year header, a medium "Weekday, Month Day" line, and a fixed
//! numeric `Y/M/DD` form. Each function takes the [`Locale`] the caller
//! resolved and the [`Calendar`] the UI is showing, and answers in that
//! calendar and language.
//!
//! Gregorian strings go through the pattern formatter in
//! [`format`](../format/index.html) with the locale's own name tables.
//! Jalali strings branch on the language instead: Persian gets the native
//! month names and digit glyphs, English gets the conventional romanised
//! month names, and any other language deliberately gets an empty string
//! back rather than an error, so the formatting surface stays total.
//!
//! Every numeral in every string passes through
//! [`format_number`](fn.format_number.html), which is the one place digit
//! glyphs are chosen.
//!
//! [`Locale`]: ../locales/struct.Locale.html
//! [`Calendar`]: ../cal/enum.Calendar.html

use cal::{Calendar, DatePiece};
use cal::gregorian::DateTime;
use cal::jalali::{JalaliDate, MONTH_NAMES_EN, MONTH_NAMES_FA};
use format::{Arguments, DateFormat, Field, NumArguments, TextArguments};
use locales::{digit_glyphs, Locale};

use pad::{Alignment, PadStr};


/// How a language renders Jalali dates, if this crate knows it at all.
enum Naming {
    /// The calendar’s native language: native month names, native digits.
    Native,

    /// The conventional romanised month names with ASCII digits.
    English,
}

fn jalali_naming(language: &str) -> Option<Naming> {
    match language {
        "fa" => Some(Naming::Native),
        "en" => Some(Naming::English),
        _    => None,
    }
}

fn empty() -> Arguments {
    Arguments::empty()
}

/// Two zero-padded digits, for the day field of the numeric form.
fn two_digits() -> Arguments {
    Arguments { alignment: Some(Alignment::Right), width: Some(2), pad_char: Some('0') }
}


/// Renders the given instant’s year in the selected calendar, in the
/// locale’s digit glyphs.
///
/// ### Examples
///
/// ```
/// use dualcal::{format_year, Calendar, Date, Locale, Month};
///
/// let date = Date::ymd(2024, Month::March, 20).unwrap().midnight();
///
/// assert_eq!(format_year(&Locale::english(), &date, Calendar::Gregorian), "2024");
/// assert_eq!(format_year(&Locale::persian(), &date, Calendar::Jalali), "۱۴۰۳");
/// ```
pub fn format_year(locale: &Locale, date: &DateTime, calendar: Calendar) -> String {
    let year = match calendar {
        Calendar::Gregorian => date.year(),
        Calendar::Jalali    => JalaliDate::from_date(date.date()).year(),
    };

    format_number(&year.to_string(), locale.language(), "")
}

/// Renders the given instant’s month and year, like `"January 2019"` or
/// `"فروردین ۱۴۰۳"`.
///
/// Jalali output in a language this crate has no Jalali tables for is the
/// empty string, never an error.
pub fn format_month_year(locale: &Locale, date: &DateTime, calendar: Calendar) -> String {
    match calendar {
        Calendar::Gregorian => {
            let format = DateFormat { fields: vec![
                Field::MonthName(TextArguments(empty())),
                Field::Literal(" "),
                Field::Year(NumArguments(empty())),
            ] };
            format.format(date, locale)
        },
        Calendar::Jalali => {
            let converted = JalaliDate::from_date(date.date());
            let month = converted.month() as usize - 1;

            match jalali_naming(locale.language()) {
                Some(Naming::Native) => {
                    format!("{} {}", MONTH_NAMES_FA[month], converted.rendered().year)
                },
                Some(Naming::English) => {
                    format!("{} {}", MONTH_NAMES_EN[month], converted.year())
                },
                None => String::new(),
            }
        },
    }
}

/// Renders the given instant in a medium "Weekday, Month Day" style, like
/// `"Friday, January 4"`.
///
/// The weekday name is looked up by the universal weekday numbering
/// (Sunday is 0) whichever calendar is selected, which is also how the
/// locale’s standalone weekday table is ordered. Jalali output in an
/// unsupported language is the empty string.
pub fn format_medium_date(locale: &Locale, date: &DateTime, calendar: Calendar) -> String {
    match calendar {
        Calendar::Gregorian => {
            let format = DateFormat { fields: vec![
                Field::WeekdayName(TextArguments(empty())),
                Field::Literal(", "),
                Field::MonthName(TextArguments(empty())),
                Field::Literal(" "),
                Field::Day(NumArguments(empty())),
            ] };
            format.format(date, locale)
        },
        Calendar::Jalali => {
            let converted = JalaliDate::from_date(date.date());
            let weekday = locale.weekday_name(date.weekday().days_from_sunday());
            let month = converted.month() as usize - 1;

            match jalali_naming(locale.language()) {
                Some(Naming::Native) => {
                    format!("{} {} {}", weekday, converted.rendered().day, MONTH_NAMES_FA[month])
                },
                Some(Naming::English) => {
                    format!("{}, {} {}", weekday, MONTH_NAMES_EN[month], converted.day())
                },
                None => String::new(),
            }
        },
    }
}

/// Renders the given instant in the fixed numeric `Y/M/DD` form, like
/// `"2019/1/04"`.
///
/// In the Jalali calendar’s native language the year is zero-padded to
/// four digits and the month and day to two, each transliterated on its
/// own; every other language gets plain un-padded ASCII numerals.
pub fn format_date(locale: &Locale, date: &DateTime, calendar: Calendar) -> String {
    match calendar {
        Calendar::Gregorian => {
            let format = DateFormat { fields: vec![
                Field::Year(NumArguments(empty())),
                Field::Literal("/"),
                Field::MonthNumber(NumArguments(empty())),
                Field::Literal("/"),
                Field::Day(NumArguments(two_digits())),
            ] };
            format.format(date, locale)
        },
        Calendar::Jalali => {
            let converted = JalaliDate::from_date(date.date());

            match jalali_naming(locale.language()) {
                Some(Naming::Native) => {
                    let parts = converted.rendered();
                    format!("{}/{}/{}", parts.padded_year, parts.padded_month, parts.padded_day)
                },
                _ => {
                    format!("{}/{}/{}", converted.year(), converted.month(), converted.day())
                },
            }
        },
    }
}

/// Returns the localized name of the 1-based month in the given calendar.
///
/// Month names don’t depend on the year in either calendar, so no date is
/// needed. For Jalali months, languages without native tables get the
/// romanised names.
pub fn month_name(locale: &Locale, month_number: i8, calendar: Calendar) -> String {
    let month = month_number as usize - 1;

    match calendar {
        Calendar::Gregorian => locale.month_name(month).to_owned(),
        Calendar::Jalali => {
            match jalali_naming(locale.language()) {
                Some(Naming::Native) => MONTH_NAMES_FA[month].to_owned(),
                _                    => MONTH_NAMES_EN[month].to_owned(),
            }
        },
    }
}

/// Renders a decimal number string in the given language’s digit glyphs,
/// optionally zero-padded to the width of the `0`-run in `pattern`.
///
/// This is the single chokepoint every numeral in this crate passes
/// through, so digits always come out consistently for a language. Input
/// that doesn’t parse as an integer is returned unchanged.
///
/// ### Examples
///
/// ```
/// use dualcal::format_number;
///
/// assert_eq!(format_number("7", "en", "00"), "07");
/// assert_eq!(format_number("7", "fa", "00"), "۰۷");
/// assert_eq!(format_number("1404", "fa", ""), "۱۴۰۴");
/// ```
pub fn format_number(number: &str, language: &str, pattern: &str) -> String {
    let value: i64 = match number.parse() {
        Ok(value) => value,
        Err(_)    => return number.to_owned(),
    };

    let width = pattern.chars().filter(|&c| c == '0').count();
    let padded = value.to_string().pad(width, '0', Alignment::Right, false);

    let glyphs = digit_glyphs(language);
    padded.chars()
          .map(|c| match c.to_digit(10) {
              Some(digit) => glyphs[digit as usize],
              None        => c,
          })
          .collect()
}
