//! Localized weekdays, months and date renderings

use core::fmt::Write;

use crate::calendar::CalendarFields;
use crate::Error;

/// WeekdaysList, Sunday first
pub type WeekdaysList<'a> = [&'a str; 7];

/// MonthsList, January first
pub type MonthsList<'a> = [&'a str; 12];

/// Source of locale data for the `%a %A %b %B %c %x %X` directives.
///
/// The formatter holds no locale data of its own; it asks an implementation of this
/// trait for names and for the locale's preferred date and time renderings.
/// Every method fails with [`Error::UnknownLocale`] when the implementation has no
/// data for `locale`.
pub trait Locales {
    /// Abbreviated month names.
    fn short_months(&self, locale: &str) -> Result<&MonthsList<'_>, Error>;

    /// Full month names.
    fn long_months(&self, locale: &str) -> Result<&MonthsList<'_>, Error>;

    /// Abbreviated weekday names, starting from Sunday.
    fn short_weekdays(&self, locale: &str) -> Result<&WeekdaysList<'_>, Error>;

    /// Full weekday names, starting from Sunday.
    fn long_weekdays(&self, locale: &str) -> Result<&WeekdaysList<'_>, Error>;

    /// Writes the medium-length date (`%x`).
    fn write_medium_date(
        &self,
        locale: &str,
        fields: &CalendarFields,
        w: &mut dyn Write,
    ) -> Result<(), Error>;

    /// Writes the short time (`%X`).
    fn write_short_time(
        &self,
        locale: &str,
        fields: &CalendarFields,
        w: &mut dyn Write,
    ) -> Result<(), Error>;

    /// Writes the medium date followed by the short time (`%c`).
    fn write_medium_date_time(
        &self,
        locale: &str,
        fields: &CalendarFields,
        w: &mut dyn Write,
    ) -> Result<(), Error> {
        self.write_medium_date(locale, fields, w)?;
        w.write_char(' ')?;
        self.write_short_time(locale, fields, w)
    }
}

/// The POSIX ("C") locale with English names.
///
/// Accepts the identifiers `""`, `"C"`, `"POSIX"` and any identifier whose language is
/// English (`"en"`, `"en_US"`, `"en-GB"`, ...).
///
/// The medium date reads `Mar 5, 2024` and the short time reads `2:30 PM`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CLocale;

static SHORT_MONTHS: MonthsList<'static> =
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];
static LONG_MONTHS: MonthsList<'static> = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
static SHORT_WEEKDAYS: WeekdaysList<'static> = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
static LONG_WEEKDAYS: WeekdaysList<'static> =
    ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

impl CLocale {
    fn check(locale: &str) -> Result<(), Error> {
        let language = locale.split(|c| c == '_' || c == '-' || c == '.').next().unwrap_or("");
        match (locale, language) {
            ("", _) | ("C", _) | ("POSIX", _) | (_, "en") => Ok(()),
            _ => Err(Error::UnknownLocale),
        }
    }
}

impl Locales for CLocale {
    fn short_months(&self, locale: &str) -> Result<&MonthsList<'_>, Error> {
        CLocale::check(locale)?;
        Ok(&SHORT_MONTHS)
    }

    fn long_months(&self, locale: &str) -> Result<&MonthsList<'_>, Error> {
        CLocale::check(locale)?;
        Ok(&LONG_MONTHS)
    }

    fn short_weekdays(&self, locale: &str) -> Result<&WeekdaysList<'_>, Error> {
        CLocale::check(locale)?;
        Ok(&SHORT_WEEKDAYS)
    }

    fn long_weekdays(&self, locale: &str) -> Result<&WeekdaysList<'_>, Error> {
        CLocale::check(locale)?;
        Ok(&LONG_WEEKDAYS)
    }

    fn write_medium_date(
        &self,
        locale: &str,
        fields: &CalendarFields,
        w: &mut dyn Write,
    ) -> Result<(), Error> {
        let month = self.short_months(locale)?[fields.month() as usize - 1];
        write!(w, "{} {}, {}", month, fields.day(), fields.year())?;
        Ok(())
    }

    fn write_short_time(
        &self,
        locale: &str,
        fields: &CalendarFields,
        w: &mut dyn Write,
    ) -> Result<(), Error> {
        CLocale::check(locale)?;
        let (is_pm, hour) = fields.hour12();
        write!(w, "{}:{:02} {}", hour, fields.minute(), if is_pm { "PM" } else { "AM" })?;
        Ok(())
    }
}
