//! Jalali (Persian solar) calendar conversions.
//!
//! Everything else in this crate trades in Gregorian fields, so this module
//! is the one place that knows the Jalali calendar’s shape: how to turn a
//! [`Date`](../gregorian/struct.Date.html) into the native (year, month,
//! day) triple and back, how long each month is, and which years get the
//! extra day of Esfand.
//!
//! The leap rule is the break-cycle formulation used by the common Jalali
//! converters: the calendar runs in 33-year sub-cycles whose lengths shift
//! at a handful of known years, and the rule walks those break points to
//! find the Gregorian date of 1 Farvardin for any supported year. This
//! agrees with the astronomical calendar where the simpler fixed-33-year
//! arithmetic drifts (1403 is a leap year; 1404 and 1407 are not).

use cal::DatePiece;
use cal::gregorian::{split_cycles, Date, Error, Month};

#[cfg(feature = "format")]
use localized::format_number;


/// Jalali years at which the length of a leap sub-cycle changes.
const BREAKS: [i64; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181,
    1210, 1635, 2060, 2097, 2192, 2262, 2324, 2394, 2456, 3178,
];

/// The earliest Jalali year the break table covers.
pub const MIN_YEAR: i64 = -60;

/// The latest Jalali year the break table covers.
pub const MAX_YEAR: i64 = 3176;

/// English renderings of the Jalali month names, Farvardin first.
pub static MONTH_NAMES_EN: [&'static str; 12] = [
    "Farvardin", "Ordibehesht", "Khordad",
    "Tir",       "Mordad",      "Shahrivar",
    "Mehr",      "Aban",        "Azar",
    "Dey",       "Bahman",      "Esfand",
];

/// The native month names, Farvardin first.
pub static MONTH_NAMES_FA: [&'static str; 12] = [
    "فروردین", "اردیبهشت", "خرداد",
    "تیر",     "مرداد",    "شهریور",
    "مهر",     "آبان",     "آذر",
    "دی",      "بهمن",     "اسفند",
];


/// What the break-table walk finds out about one Jalali year: its leap
/// status counter, the Gregorian year its Farvardin falls in, and the March
/// day number of 1 Farvardin.
struct Cycle {
    leap:  i64,
    year:  i64,
    march: i64,
}

/// Walks the break table for the given Jalali year.
///
/// Years outside the table’s span saturate to its ends rather than
/// erroring, so every function built on this one is total.
fn jal_cal(year: i64) -> Cycle {
    let jy = if year < MIN_YEAR { MIN_YEAR }
             else if year > MAX_YEAR { MAX_YEAR }
             else { year };

    let gy = jy + 621;
    let mut leap_j = -14;
    let mut jp = BREAKS[0];
    let mut jump = 0;

    // Count the leap days elapsed up to the sub-cycle containing this year.
    for &jm in BREAKS[1..].iter() {
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += (jump / 33) * 8 + (jump % 33) / 4;
        jp = jm;
    }

    let mut n = jy - jp;
    leap_j += (n / 33) * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    // Gregorian leap days over the same span, then the March day number of
    // 1 Farvardin falls out of the difference.
    let leap_g = gy / 4 - ((gy / 100 + 1) * 3) / 4 - 150;
    let march = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + ((jump + 4) / 33) * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    Cycle { leap: leap, year: gy, march: march }
}

/// The number of days since 1st January 1970 of 1 Farvardin of the cycle’s
/// year.
fn farvardin_first(cycle: &Cycle) -> i64 {
    Date::first_of_month(cycle.year, Month::March).days_since_1970() + cycle.march - 1
}

/// Returns whether this Jalali year is a leap year (30-day Esfand).
///
/// ### Examples
///
/// ```
/// use dualcal::cal::jalali;
///
/// assert_eq!(jalali::is_leap_year(1403), true);
/// assert_eq!(jalali::is_leap_year(1404), false);
/// ```
pub fn is_leap_year(year: i64) -> bool {
    jal_cal(year).leap == 0
}

/// Returns the number of days in the given month of the given Jalali year:
/// 31 for the first six months, 30 for the next five, and 29 or 30 for
/// Esfand depending on the leap rule.
pub fn month_length(year: i64, month: i8) -> i8 {
    match month {
        1..=6  => 31,
        7..=11 => 30,
        _      => if is_leap_year(year) { 30 } else { 29 },
    }
}


/// A date in the Jalali calendar’s own (year, month, day) fields.
///
/// This is the conversion library’s native triple. It never stands in for
/// an instant on its own; anything that needs an absolute position on the
/// timeline converts back to a Gregorian [`Date`](../gregorian/struct.Date.html)
/// with [`to_date`](#method.to_date).
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
pub struct JalaliDate {
    year:  i64,
    month: i8,
    day:   i8,
}

impl JalaliDate {

    /// Creates a new Jalali date from the given year, month, and day
    /// fields, checked against the month-length and leap rules.
    ///
    /// ### Examples
    ///
    /// ```
    /// use dualcal::JalaliDate;
    ///
    /// assert!(JalaliDate::new(1403, 12, 30).is_ok());
    /// assert!(JalaliDate::new(1404, 12, 30).is_err());
    /// ```
    pub fn new(year: i64, month: i8, day: i8) -> Result<JalaliDate, Error> {
        if year >= MIN_YEAR && year <= MAX_YEAR
        && month >= 1 && month <= 12
        && day >= 1 && day <= month_length(year, month) {
            Ok(JalaliDate { year: year, month: month, day: day })
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Converts a date in the universal representation to its Jalali
    /// fields.
    ///
    /// ### Examples
    ///
    /// ```
    /// use dualcal::{Date, JalaliDate, Month};
    ///
    /// let nowruz = Date::ymd(2024, Month::March, 20).unwrap();
    /// let converted = JalaliDate::from_date(nowruz);
    /// assert_eq!((converted.year(), converted.month(), converted.day()), (1403, 1, 1));
    /// ```
    pub fn from_date(date: Date) -> JalaliDate {
        let days = date.days_since_1970();

        // Guess the Jalali year from the Gregorian one, then see which side
        // of that year’s Farvardin the date falls on.
        let mut jy = date.year() - 621;
        let cycle = jal_cal(jy);
        let mut k = days - farvardin_first(&cycle);

        if k >= 0 {
            if k <= 185 {
                // The first six months are all 31 days long.
                return JalaliDate {
                    year:  jy,
                    month: (1 + k / 31) as i8,
                    day:   (k % 31 + 1) as i8,
                };
            }
            k -= 186;
        }
        else {
            // Before Farvardin: the date belongs to the previous Jalali
            // year, in its second half.
            jy -= 1;
            k += 179;
            if cycle.leap == 1 {
                k += 1;
            }
        }

        JalaliDate {
            year:  jy,
            month: (7 + k / 30) as i8,
            day:   (k % 30 + 1) as i8,
        }
    }

    /// Converts this Jalali date back to the universal representation.
    pub fn to_date(&self) -> Date {
        let cycle = jal_cal(self.year);
        let month = self.month as i64;

        // Days into the year: six 31-day months, then 30-day months.
        let offset = (month - 1) * 31 - (month / 7) * (month - 7) + self.day as i64 - 1;

        Date::from_days_since_1970(farvardin_first(&cycle) + offset)
    }

    /// The year field.
    pub fn year(&self) -> i64 { self.year }

    /// The month field, 1-based with Farvardin as month 1.
    pub fn month(&self) -> i8 { self.month }

    /// The day-of-month field, from 1 to 31.
    pub fn day(&self) -> i8 { self.day }

    /// The first day of this date’s month.
    pub fn first_of_month(&self) -> JalaliDate {
        JalaliDate { year: self.year, month: self.month, day: 1 }
    }

    /// This date’s year paired with the given month, with the day reset to
    /// 1. Returns an error for a month outside 1–12.
    pub fn with_month(&self, month: i8) -> Result<JalaliDate, Error> {
        if month >= 1 && month <= 12 {
            Ok(JalaliDate { year: self.year, month: month, day: 1 })
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// The first of the month this many months before or after this date’s
    /// month, rolling over year boundaries in Jalali years.
    ///
    /// ### Examples
    ///
    /// ```
    /// use dualcal::JalaliDate;
    ///
    /// let esfand = JalaliDate::new(1403, 12, 11).unwrap();
    /// let next = esfand.add_months(1);
    /// assert_eq!((next.year(), next.month(), next.day()), (1404, 1, 1));
    /// ```
    pub fn add_months(&self, months: i64) -> JalaliDate {
        let total = self.year * 12 + (self.month as i64 - 1) + months;
        let (year, month) = split_cycles(total, 12);

        JalaliDate { year: year, month: (month + 1) as i8, day: 1 }
    }

    /// The date this many days before or after this one, computed on the
    /// timeline and re-expressed in Jalali fields, so month rollover
    /// follows this calendar’s month lengths.
    pub fn add_days(&self, days: i64) -> JalaliDate {
        JalaliDate::from_date(self.to_date().add_days(days))
    }
}

/// The native-digit string renderings of one converted date.
///
/// One of these is built per formatting call and dropped at the end of it;
/// it bundles every rendering the Persian-language formatting paths pick
/// from, so a date gets converted and transliterated once per call at most.
#[cfg(feature = "format")]
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Rendered {

    /// The year as plain native digits, like `"۱۴۰۴"`.
    pub year: String,

    /// The month number as plain native digits.
    pub month: String,

    /// The day number as plain native digits.
    pub day: String,

    /// The year zero-padded to four digits.
    pub padded_year: String,

    /// The month number zero-padded to two digits.
    pub padded_month: String,

    /// The day number zero-padded to two digits.
    pub padded_day: String,
}

#[cfg(feature = "format")]
impl JalaliDate {

    /// Renders this date’s fields in native digits, padded and plain.
    pub fn rendered(&self) -> Rendered {
        Rendered {
            year:         format_number(&self.year.to_string(),  "fa", ""),
            month:        format_number(&self.month.to_string(), "fa", ""),
            day:          format_number(&self.day.to_string(),   "fa", ""),
            padded_year:  format_number(&self.year.to_string(),  "fa", "0000"),
            padded_month: format_number(&self.month.to_string(), "fa", "00"),
            padded_day:   format_number(&self.day.to_string(),   "fa", "00"),
        }
    }
}
