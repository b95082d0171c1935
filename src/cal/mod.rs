//! Calendar systems, date values, and the arithmetic a month-grid picker
//! needs, which use years, months, days, and (occasionally) times of day.

pub mod gregorian;
pub mod jalali;
pub mod math;

use self::gregorian::{Month, Weekday};


/// The **calendar** selector names the calendar system whose rules govern an
/// operation.
///
/// Every mode-sensitive function in this crate takes one of these
/// explicitly; nothing is ever inferred from ambient or global state. The
/// set of systems is fixed and closed, so operations dispatch with an
/// exhaustive `match` rather than through trait objects.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Calendar {

    /// The proleptic Gregorian calendar, which doubles as this crate’s
    /// universal interchange representation: every `Date` carries Gregorian
    /// fields, whatever calendar the UI is showing.
    Gregorian,

    /// The Jalali (Persian solar) calendar. Values are converted to its
    /// native (year, month, day) fields before any arithmetic that must
    /// respect its month lengths, and converted back afterwards.
    Jalali,
}


/// The **date piece** trait is used for date and time values that have
/// date components of years, months, and days.
pub trait DatePiece {

    /// The year, in absolute terms.
    /// This is in human-readable format, so the year 2014 actually has a
    /// year value of 2014, rather than 14 or 114 or anything like that.
    fn year(&self) -> i64;

    /// The month of the year.
    fn month(&self) -> Month;

    /// The day of the month, from 1 to 31.
    fn day(&self) -> i8;

    /// The day of the week.
    fn weekday(&self) -> Weekday;
}
