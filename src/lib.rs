#![crate_name = "dualcal"]
#![crate_type = "rlib"]
#![crate_type = "dylib"]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Library for [ dual-calendar ](https://crates.io/crates/dualcal) date
//! arithmetic and formatting.
//!
//! Calendar-picker UIs need the same handful of questions answered for
//! whichever calendar system the user is looking at: how many days are in
//! this month, how far apart are two months, how many blank cells come
//! before day 1 in a week grid, and what the date looks like as a string in
//! the user's language. This crate answers them uniformly for the Gregorian
//! and the Jalali (Persian solar) calendars; callers pick the system with an
//! explicit [`Calendar`](cal/enum.Calendar.html) value instead of branching
//! themselves.
//!
//! # Examples
//!
//! ```
//! use dualcal::{Calendar, Date, DateTime, Month, Time};
//! use dualcal::month_delta;
//!
//! let start = DateTime::new(Date::ymd(2019, Month::June, 15).unwrap(), Time::midnight());
//! let end   = DateTime::new(Date::ymd(2020, Month::January, 15).unwrap(), Time::midnight());
//! assert_eq!(month_delta(start, end, Calendar::Gregorian), 7);
//! ```

#[cfg(feature = "format")] extern crate locale;
#[cfg(feature = "format")] extern crate num_traits;
#[cfg(feature = "format")] extern crate pad;

pub mod cal;
#[cfg(feature = "format")] pub mod format;
#[cfg(feature = "format")] pub mod locales;
#[cfg(feature = "format")] pub mod localized;
mod util;

pub use cal::{Calendar, DatePiece};
pub use cal::gregorian::{Date, DateTime, Error, Month, Time, Weekday, Year};
pub use cal::jalali::JalaliDate;
pub use cal::math::{DateRange, add_days_to_date, add_months_to_month_date,
                    date_only, dates_only, days_in_month, first_day_of_week,
                    first_day_offset, is_same_day, is_same_month, month_date,
                    month_delta, month_number};

#[cfg(feature = "format")]
pub use locales::{BuiltinLocales, Locale, LocaleProvider};

#[cfg(feature = "format")]
pub use localized::{format_date, format_medium_date, format_month_year,
                    format_number, format_year, month_name};
