//! Locale symbol tables: month names, weekday names, week-start
//! preferences, and numeral glyphs.
//!
//! Nothing in this crate reads the active locale from ambient state. The
//! caller resolves a [`Locale`](struct.Locale.html) once (from the
//! built-in tables, from anything implementing
//! [`LocaleProvider`](trait.LocaleProvider.html), or from a `locale::Time`
//! it loaded itself) and passes a reference into every formatting call.
//! A `Locale` is plain read-only data, so sharing one across threads is
//! fine.

use locale;

use cal::gregorian::Error;


static EN_MONTHS: [&'static str; 12] = [
    "January", "February", "March",     "April",   "May",      "June",
    "July",    "August",   "September", "October", "November", "December",
];

static EN_WEEKDAYS: [&'static str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

static FA_MONTHS: [&'static str; 12] = [
    "ژانویه", "فوریه", "مارس",    "آوریل", "مه",     "ژوئن",
    "ژوئیه",  "اوت",   "سپتامبر", "اکتبر", "نوامبر", "دسامبر",
];

static FA_WEEKDAYS: [&'static str; 7] = [
    "یکشنبه", "دوشنبه", "سه‌شنبه", "چهارشنبه", "پنجشنبه", "جمعه", "شنبه",
];

static ASCII_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

static PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];


/// The glyphs the given language writes decimal digits with, zero first.
///
/// This backs the `format_number` chokepoint: Persian gets its native
/// digits, everything else gets ASCII.
pub(crate) fn digit_glyphs(language: &str) -> &'static [char; 10] {
    match language {
        "fa" => &PERSIAN_DIGITS,
        _    => &ASCII_DIGITS,
    }
}


/// A source of per-language symbol tables.
///
/// Implementations own and cache their tables; the engine only ever
/// borrows them long enough to copy what it needs into a
/// [`Locale`](struct.Locale.html). Any method may answer `None` for a
/// language it has no data for. Implementations must be safe for
/// concurrent reads; in practice they’re static data, so they are.
pub trait LocaleProvider {

    /// The language the surrounding UI is currently in, as a primary
    /// language subtag like `"en"` or `"fa"`.
    fn current_language(&self) -> &str;

    /// The full month names for the language, January first.
    fn month_names(&self, language: &str) -> Option<&[&'static str; 12]>;

    /// The standalone weekday names for the language, Sunday first.
    fn weekday_names(&self, language: &str) -> Option<&[&'static str; 7]>;

    /// The weekday the language’s region conventionally starts the week
    /// on, 0-based with Sunday as 0.
    fn first_weekday(&self, language: &str) -> Option<i8>;
}


/// The symbol tables this crate ships with: English and Persian.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct BuiltinLocales;

impl LocaleProvider for BuiltinLocales {
    fn current_language(&self) -> &str {
        "en"
    }

    fn month_names(&self, language: &str) -> Option<&[&'static str; 12]> {
        match language {
            "en" => Some(&EN_MONTHS),
            "fa" => Some(&FA_MONTHS),
            _    => None,
        }
    }

    fn weekday_names(&self, language: &str) -> Option<&[&'static str; 7]> {
        match language {
            "en" => Some(&EN_WEEKDAYS),
            "fa" => Some(&FA_WEEKDAYS),
            _    => None,
        }
    }

    fn first_weekday(&self, language: &str) -> Option<i8> {
        match language {
            "en" => Some(0),
            "fa" => Some(6),
            _    => None,
        }
    }
}


/// The symbol tables of one language, resolved once and then borrowed by
/// every formatting call.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Locale {
    language:      String,
    months:        Vec<String>,
    weekdays:      Vec<String>,
    first_weekday: i8,
}

impl Locale {

    /// Creates a locale from its parts: a language code, twelve month
    /// names (January first), seven standalone weekday names (Sunday
    /// first), and a 0-based week-start index. Wrong table lengths or a
    /// week start outside 0–6 are an error.
    pub fn new(language: &str, months: Vec<String>, weekdays: Vec<String>, first_weekday: i8) -> Result<Locale, Error> {
        if months.len() == 12 && weekdays.len() == 7
        && first_weekday >= 0 && first_weekday < 7 {
            Ok(Locale {
                language:      language.to_owned(),
                months:        months,
                weekdays:      weekdays,
                first_weekday: first_weekday,
            })
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// The English locale, built from the `locale` crate’s built-in
    /// tables.
    ///
    /// ### Examples
    ///
    /// ```
    /// let my_locale = dualcal::Locale::english();
    ///
    /// assert_eq!(my_locale.language(), "en");
    /// assert_eq!(my_locale.month_name(0), "January");
    /// ```
    pub fn english() -> Locale {
        Locale::from_time("en", &locale::Time::english(), 0)
    }

    /// The Persian locale, from the built-in tables.
    pub fn persian() -> Locale {
        // We can unwrap since the built-in provider always has "fa".
        Locale::from_provider(&BuiltinLocales, "fa").unwrap()
    }

    /// Adapts a `locale::Time` (for example one loaded with
    /// `locale::Time::load_user_locale()`) into a `Locale`, taking its
    /// long month and day names.
    pub fn from_time(language: &str, time: &locale::Time, first_weekday: i8) -> Locale {
        Locale {
            language:      language.to_owned(),
            months:        (0..12).map(|month| time.long_month_name(month)).collect(),
            weekdays:      (0..7).map(|day| time.long_day_name(day)).collect(),
            first_weekday: first_weekday,
        }
    }

    /// Resolves a language through a provider, or `None` if the provider
    /// has no tables for it.
    ///
    /// ### Examples
    ///
    /// ```
    /// use dualcal::{BuiltinLocales, Locale};
    ///
    /// assert!(Locale::from_provider(&BuiltinLocales, "fa").is_some());
    /// assert!(Locale::from_provider(&BuiltinLocales, "tlh").is_none());
    /// ```
    pub fn from_provider<P: LocaleProvider>(provider: &P, language: &str) -> Option<Locale> {
        let months = provider.month_names(language)?;
        let weekdays = provider.weekday_names(language)?;
        let first_weekday = provider.first_weekday(language)?;

        Some(Locale {
            language:      language.to_owned(),
            months:        months.iter().map(|name| (*name).to_owned()).collect(),
            weekdays:      weekdays.iter().map(|name| (*name).to_owned()).collect(),
            first_weekday: first_weekday,
        })
    }

    /// The language code this locale was resolved for.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The name of the month with the given 0-based index, so January
    /// is month 0.
    pub fn month_name(&self, months_from_january: usize) -> &str {
        &self.months[months_from_january]
    }

    /// The standalone name of the weekday with the given 0-based index,
    /// so Sunday is day 0.
    pub fn weekday_name(&self, days_from_sunday: usize) -> &str {
        &self.weekdays[days_from_sunday]
    }

    /// The weekday this locale’s region starts the week on, 0-based with
    /// Sunday as 0.
    ///
    /// The grid arithmetic in `cal::math` does *not* consult this (it
    /// uses the calendar system’s own convention), so the index is only
    /// here for callers laying out grids of their own.
    pub fn first_weekday(&self) -> i8 {
        self.first_weekday
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builtin_tables() {
        let persian = Locale::from_provider(&BuiltinLocales, "fa").unwrap();

        assert_eq!(persian.language(), "fa");
        assert_eq!(persian.month_name(2), "مارس");
        assert_eq!(persian.weekday_name(6), "شنبه");
        assert_eq!(persian.first_weekday(), 6);
    }

    #[test]
    fn unknown_language_has_no_tables() {
        assert_eq!(Locale::from_provider(&BuiltinLocales, "de"), None);
        assert_eq!(BuiltinLocales.first_weekday("de"), None);
    }

    #[test]
    fn table_lengths_are_checked() {
        let months = vec!["Uno".to_owned(); 12];
        let weekdays = vec!["Dia".to_owned(); 7];

        assert!(Locale::new("xx", months.clone(), weekdays.clone(), 1).is_ok());
        assert!(Locale::new("xx", months.clone(), weekdays.clone(), 7).is_err());
        assert!(Locale::new("xx", months, vec![], 1).is_err());
    }

    #[test]
    fn glyph_tables() {
        assert_eq!(digit_glyphs("fa")[0], '۰');
        assert_eq!(digit_glyphs("en")[0], '0');
        assert_eq!(digit_glyphs("anything-else")[9], '9');
    }
}
