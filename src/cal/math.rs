//! Mode-dispatched date arithmetic for month-grid pickers.
//!
//! Every function here takes an explicit [`Calendar`](../enum.Calendar.html)
//! and answers one of the questions a picker asks while the user pages
//! through months: how far apart two months are, where a month starts,
//! how long it is, and how many blank cells lead its grid. Operations that
//! must respect the Jalali calendar’s month lengths convert to its native
//! fields, work there, and convert back; nothing ever branches on anything
//! but the calendar value passed in.
//!
//! All functions are pure: values in, value out, no state anywhere.

use cal::{Calendar, DatePiece};
use cal::gregorian::{split_cycles, Date, DateTime, Error, Month, Year};
use cal::jalali::{self, JalaliDate};


/// A pair of instants bounding a picker selection.
///
/// Keeping `start` ≤ `end` is the caller’s lookout; nothing here checks or
/// re-orders the endpoints.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct DateRange {
    pub start: DateTime,
    pub end:   DateTime,
}


/// Returns the given instant with the time of day cleared to midnight.
/// Idempotent.
pub fn date_only(date: DateTime) -> DateTime {
    date.date().midnight()
}

/// Clears the time of day from both endpoints of a range, independently.
pub fn dates_only(range: DateRange) -> DateRange {
    DateRange {
        start: date_only(range.start),
        end:   date_only(range.end),
    }
}

/// Returns whether two optional instants fall on the same calendar day.
///
/// Two absent values count as the same day; an absent and a present value
/// never do. The comparison is on (year, month, day) only, so times of day
/// don’t matter.
pub fn is_same_day(a: Option<DateTime>, b: Option<DateTime>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.date() == b.date(),
        (None, None)       => true,
        _                  => false,
    }
}

/// Returns whether two optional instants fall in the same month of the
/// same year, measured in the given calendar. Absence is handled the same
/// way as in [`is_same_day`](fn.is_same_day.html).
pub fn is_same_month(a: Option<DateTime>, b: Option<DateTime>, calendar: Calendar) -> bool {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        (None, None)       => return true,
        _                  => return false,
    };

    match calendar {
        Calendar::Gregorian => {
            a.year() == b.year() && a.month() == b.month()
        },
        Calendar::Jalali => {
            let a = JalaliDate::from_date(a.date());
            let b = JalaliDate::from_date(b.date());
            a.year() == b.year() && a.month() == b.month()
        },
    }
}

/// Returns the signed number of months between two instants’ months in the
/// given calendar: `(end.year - start.year) * 12 + (end.month -
/// start.month)`, with both operands read in that calendar’s own fields.
/// Days of the month never round the result either way.
///
/// ### Examples
///
/// ```
/// use dualcal::{Calendar, Date, Month, month_delta};
///
/// let start = Date::ymd(2019, Month::June, 15).unwrap().midnight();
/// let end   = Date::ymd(2020, Month::January, 15).unwrap().midnight();
///
/// assert_eq!(month_delta(start, end, Calendar::Gregorian), 7);
/// assert_eq!(month_delta(end, start, Calendar::Gregorian), -7);
/// ```
pub fn month_delta(start: DateTime, end: DateTime, calendar: Calendar) -> i64 {
    match calendar {
        Calendar::Gregorian => {
            (end.year() - start.year()) * 12
                + (end.month().months_from_january() as i64
                   - start.month().months_from_january() as i64)
        },
        Calendar::Jalali => {
            let start = JalaliDate::from_date(start.date());
            let end = JalaliDate::from_date(end.date());
            (end.year() - start.year()) * 12 + (end.month() as i64 - start.month() as i64)
        },
    }
}

/// Returns midnight on the first day of the month that lies the given
/// number of months away from the given instant’s month, counted in the
/// given calendar. Month 13 of year Y becomes month 1 of year Y + 1, and
/// so on, with that calendar’s own years.
///
/// ### Examples
///
/// ```
/// use dualcal::{Calendar, Date, Month, add_months_to_month_date};
///
/// let date = Date::ymd(2019, Month::January, 15).unwrap().midnight();
/// let there = add_months_to_month_date(date, 3, Calendar::Gregorian);
///
/// assert_eq!(there, Date::ymd(2019, Month::April, 1).unwrap().midnight());
/// ```
pub fn add_months_to_month_date(date: DateTime, months: i64, calendar: Calendar) -> DateTime {
    match calendar {
        Calendar::Gregorian => {
            let total = date.year() * 12 + date.month().months_from_january() as i64 + months;
            let (year, month) = split_cycles(total, 12);

            // We can unwrap since the split above leaves the month in the
            // range (0..12).
            let month = Month::from_zero(month as i8).unwrap();
            Date::first_of_month(year, month).midnight()
        },
        Calendar::Jalali => {
            JalaliDate::from_date(date.date()).add_months(months).to_date().midnight()
        },
    }
}

/// Returns midnight on the day the given number of days away from the
/// given instant, with rollover across month boundaries following the
/// given calendar’s month lengths.
pub fn add_days_to_date(date: DateTime, days: i64, calendar: Calendar) -> DateTime {
    match calendar {
        Calendar::Gregorian => {
            date.date().add_days(days).midnight()
        },
        Calendar::Jalali => {
            JalaliDate::from_date(date.date()).add_days(days).to_date().midnight()
        },
    }
}

/// Returns the number of days in the given instant’s month, in the given
/// calendar.
///
/// For the Gregorian calendar this is the usual 28/29/30/31 by the
/// proleptic leap rule; for the Jalali calendar the instant is converted
/// first and the native month-length rule answers.
///
/// ### Examples
///
/// ```
/// use dualcal::{Calendar, Date, Month, days_in_month};
///
/// let feb = Date::ymd(2000, Month::February, 1).unwrap().midnight();
/// assert_eq!(days_in_month(feb, Calendar::Gregorian), 29);
///
/// let feb = Date::ymd(1900, Month::February, 1).unwrap().midnight();
/// assert_eq!(days_in_month(feb, Calendar::Gregorian), 28);
/// ```
pub fn days_in_month(date: DateTime, calendar: Calendar) -> i8 {
    match calendar {
        Calendar::Gregorian => {
            date.month().days_in_month(Year(date.year()).is_leap_year())
        },
        Calendar::Jalali => {
            let converted = JalaliDate::from_date(date.date());
            jalali::month_length(converted.year(), converted.month())
        },
    }
}

/// Returns the weekday a week conventionally starts on in the given
/// calendar system, 0-based with Sunday as 0: Sunday for the Gregorian
/// calendar, Saturday for the Jalali one.
///
/// This is a property of the calendar system, not of any locale: a locale
/// wanting Gregorian dates with, say, a Monday week start has no way to
/// say so here. Callers laying out their own grids can read the locale’s
/// preference from `Locale::first_weekday` instead.
pub fn first_day_of_week(calendar: Calendar) -> i8 {
    match calendar {
        Calendar::Gregorian => 0,
        Calendar::Jalali    => 6,
    }
}

/// Returns how many leading blank cells precede day 1 of the given
/// instant’s month when the month is laid out as a weekly grid starting on
/// the calendar’s [`first_day_of_week`](fn.first_day_of_week.html). Always
/// in the range 0..7.
pub fn first_day_offset(date: DateTime, calendar: Calendar) -> i8 {
    let first = match calendar {
        Calendar::Gregorian => {
            Date::first_of_month(date.year(), date.month())
        },
        Calendar::Jalali => {
            JalaliDate::from_date(date.date()).first_of_month().to_date()
        },
    };

    // Both operands re-based so that Monday is 0, then subtracted. The
    // wrap-around keeps the remainder non-negative whichever weekday
    // comes out smaller.
    let weekday = first.weekday().days_from_monday();
    let week_start = (first_day_of_week(calendar) + 6) % 7;

    let offset = (weekday - week_start) % 7;
    if offset < 0 { offset + 7 } else { offset }
}

/// Returns the 1-based month number of the given instant in the given
/// calendar.
pub fn month_number(date: DateTime, calendar: Calendar) -> i8 {
    match calendar {
        Calendar::Gregorian => date.month() as i8,
        Calendar::Jalali    => JalaliDate::from_date(date.date()).month(),
    }
}

/// Returns midnight on day 1 of the given 1-based month, in the given
/// instant’s year as that calendar counts years. A month number outside
/// 1–12 is an error.
pub fn month_date(date: DateTime, month_number: i8, calendar: Calendar) -> Result<DateTime, Error> {
    let first = match calendar {
        Calendar::Gregorian => {
            Date::first_of_month(date.year(), Month::from_one(month_number)?)
        },
        Calendar::Jalali => {
            JalaliDate::from_date(date.date()).with_month(month_number)?.to_date()
        },
    };

    Ok(first.midnight())
}
