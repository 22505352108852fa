// This is a part of Calendric.
// See README.md and LICENSE.txt for details.

//! Formatting of calendar fields.
//!
//! A format string is first split into [`Item`]s by [`StrftimeItems`], and every item is
//! then rendered against a [`CalendarFields`] by [`format_items`]. Both passes are
//! lazy, so [`format_fields`] renders the whole pattern in a single left-to-right scan.
//! The syntax of the format string is described in the [`strftime`] module.
//!
//! Names and the locale's preferred date and time renderings are not part of this
//! crate's formatting code: they come from an implementation of [`Locales`].
//! [`CLocale`] is the built-in implementation with English names.

use core::fmt::{self, Write};

use num_integer::mod_floor;

use crate::calendar::CalendarFields;
use crate::Error;

mod locales;
pub mod strftime;

pub use locales::{CLocale, Locales, MonthsList, WeekdaysList};
pub use strftime::StrftimeItems;

/// Numeric item types.
///
/// Every numeric item is left-padded with zeroes to its formatting width (FW).
/// A value longer than its width is printed as is.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Numeric {
    /// Full Gregorian year (FW=4).
    Year,
    /// Gregorian year modulo 100 (FW=2). Cannot be negative.
    YearMod100,
    /// Month (FW=2).
    Month,
    /// Day of the month (FW=2).
    Day,
    /// Hour number in the 24-hour clocks (FW=2).
    Hour,
    /// Hour number in the 12-hour clocks (FW=2).
    Hour12,
    /// The number of minutes since the last whole hour (FW=2).
    Minute,
    /// The number of seconds since the last whole minute (FW=2).
    Second,
    /// The number of milliseconds since the last whole second (FW=3).
    Millisecond,
    /// Day of the year (FW=3).
    Ordinal,
    /// Day of the week, where Sunday = 1 and Saturday = 7 (FW=1).
    WeekdayFromSun,
}

/// Fixed-format item types.
///
/// All of them are rendered by the [`Locales`] implementation.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Fixed {
    /// Abbreviated month names.
    ShortMonthName,
    /// Full month names.
    LongMonthName,
    /// Abbreviated day of the week names.
    ShortWeekdayName,
    /// Full day of the week names.
    LongWeekdayName,
    /// The locale's medium date followed by its short time.
    MediumDateTime,
    /// The locale's medium date.
    MediumDate,
    /// The locale's short time.
    ShortTime,
}

/// A single formatting item.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Item<'a> {
    /// A literally printed string.
    Literal(&'a str),
    /// Numeric item.
    Numeric(Numeric),
    /// Fixed-format item.
    Fixed(Fixed),
}

impl Numeric {
    /// Returns the formatting width and the value of this item for `fields`.
    fn width_and_value(self, fields: &CalendarFields) -> (usize, i64) {
        use self::Numeric::*;

        match self {
            Year => (4, i64::from(fields.year())),
            YearMod100 => (2, mod_floor(i64::from(fields.year()), 100)),
            Month => (2, i64::from(fields.month())),
            Day => (2, i64::from(fields.day())),
            Hour => (2, i64::from(fields.hour())),
            Hour12 => (2, i64::from(fields.hour12().1)),
            Minute => (2, i64::from(fields.minute())),
            Second => (2, i64::from(fields.second())),
            Millisecond => (3, i64::from(fields.millisecond())),
            Ordinal => (3, i64::from(fields.ordinal())),
            WeekdayFromSun => (1, i64::from(fields.weekday().number_from_sunday())),
        }
    }
}

/// Renders `items` for `fields` into `w`.
///
/// Names and locale renderings are requested from `locales` for the identifier `locale`
/// only when an item needs them, so a pattern without such items never fails with
/// [`Error::UnknownLocale`].
pub fn format_items<'a, W, I, L>(
    w: &mut W,
    fields: &CalendarFields,
    locales: &L,
    locale: &str,
    items: I,
) -> Result<(), Error>
where
    W: Write,
    I: IntoIterator<Item = Item<'a>>,
    L: Locales + ?Sized,
{
    for item in items {
        match item {
            Item::Literal(s) => w.write_str(s)?,

            Item::Numeric(spec) => {
                let (width, v) = spec.width_and_value(fields);
                if spec == Numeric::Year && !(0..10_000).contains(&v) {
                    // years outside 0..=9999 carry an explicit sign
                    write!(w, "{:+01$}", v, width + 1)?;
                } else {
                    write!(w, "{:01$}", v, width)?;
                }
            }

            Item::Fixed(spec) => {
                use self::Fixed::*;

                let month0 = fields.month() as usize - 1;
                let weekday0 = fields.weekday().num_days_from_sunday() as usize;
                match spec {
                    ShortMonthName => w.write_str(locales.short_months(locale)?[month0])?,
                    LongMonthName => w.write_str(locales.long_months(locale)?[month0])?,
                    ShortWeekdayName => w.write_str(locales.short_weekdays(locale)?[weekday0])?,
                    LongWeekdayName => w.write_str(locales.long_weekdays(locale)?[weekday0])?,
                    MediumDateTime => locales.write_medium_date_time(locale, fields, &mut *w)?,
                    MediumDate => locales.write_medium_date(locale, fields, &mut *w)?,
                    ShortTime => locales.write_short_time(locale, fields, &mut *w)?,
                }
            }
        }
    }

    Ok(())
}

/// Renders `fields` into `w` following the `strftime`-like `pattern`.
///
/// ```
/// use calendric::calendar::decompose;
/// use calendric::format::{format_fields, CLocale};
///
/// let fields = decompose(1_709_649_000_000);
/// let mut s = String::new();
/// format_fields(&mut s, &fields, &CLocale, "C", "%a %d %b %Y, %I:%M %%").unwrap();
/// assert_eq!(s, "Tue 05 Mar 2024, 02:30 %");
/// ```
#[inline]
pub fn format_fields<W, L>(
    w: &mut W,
    fields: &CalendarFields,
    locales: &L,
    locale: &str,
    pattern: &str,
) -> Result<(), Error>
where
    W: Write,
    L: Locales + ?Sized,
{
    format_items(w, fields, locales, locale, StrftimeItems::new(pattern))
}

/// Adapts a `fmt::Formatter` so `Display` impls can render through [`format_fields`].
pub(crate) fn display_fields(
    f: &mut fmt::Formatter<'_>,
    fields: &CalendarFields,
    pattern: &str,
) -> fmt::Result {
    format_fields(f, fields, &CLocale, "", pattern).map_err(|_| fmt::Error)
}

#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use super::{
        format_fields, format_items, CLocale, Fixed, Item, Locales, MonthsList, WeekdaysList,
    };
    use crate::calendar::{decompose, CalendarFields};
    use crate::Error;

    fn fmt_with<L: Locales>(
        fields: &CalendarFields,
        locales: &L,
        pattern: &str,
    ) -> Result<String, Error> {
        let mut s = String::new();
        format_fields(&mut s, fields, locales, "C", pattern)?;
        Ok(s)
    }

    fn fmt(fields: &CalendarFields, pattern: &str) -> String {
        fmt_with(fields, &CLocale, pattern).unwrap()
    }

    #[test]
    fn test_format_numeric() {
        let d = CalendarFields::from_ymd_hms_milli(2024, 3, 5, 14, 30, 0, 0).unwrap();
        assert_eq!(fmt(&d, "%Y-%m-%d %H:%M:%S"), "2024-03-05 14:30:00");
        assert_eq!(fmt(&d, "%y/%j/%w"), "24/065/3");
        assert_eq!(fmt(&d, "%I"), "02");

        let d = decompose(1_234_567_890_123);
        assert_eq!(fmt(&d, "%d/%m/%Y %H:%M:%S.%s"), "13/02/2009 23:31:30.123");
        assert_eq!(fmt(&d, "%I"), "11");

        let d = decompose(0);
        assert_eq!(fmt(&d, "%Y-%m-%d %H:%M:%S.%s %j %w"), "1970-01-01 00:00:00.000 001 5");
        assert_eq!(fmt(&d, "%I"), "12");

        let d = CalendarFields::from_ymd_hms_milli(1972, 12, 31, 12, 5, 9, 7).unwrap();
        assert_eq!(fmt(&d, "%j %I:%M:%S.%s"), "366 12:05:09.007");
    }

    #[test]
    fn test_format_year_padding() {
        let at = |y| CalendarFields::from_ymd_hms_milli(y, 1, 1, 0, 0, 0, 0).unwrap();
        assert_eq!(fmt(&at(7), "%Y %y"), "0007 07");
        assert_eq!(fmt(&at(2000), "%Y %y"), "2000 00");
        assert_eq!(fmt(&at(9999), "%Y %y"), "9999 99");
        assert_eq!(fmt(&at(0), "%Y %y"), "0000 00");
        assert_eq!(fmt(&at(12345), "%Y %y"), "+12345 45");
        assert_eq!(fmt(&at(-1), "%Y %y"), "-0001 99");
        assert_eq!(fmt(&at(-292_275_055), "%Y"), "-292275055");
    }

    #[test]
    fn test_format_hour12_all_hours() {
        let expected = ["12", "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11"];
        for hour in 0..24 {
            let d = CalendarFields::from_ymd_hms_milli(2000, 1, 1, hour, 0, 0, 0).unwrap();
            assert_eq!(fmt(&d, "%I"), expected[hour as usize % 12], "hour {}", hour);
        }
    }

    #[test]
    fn test_format_names() {
        let d = decompose(1_709_649_000_000);
        assert_eq!(fmt(&d, "%a %A %b %B"), "Tue Tuesday Mar March");
        assert_eq!(fmt(&d, "%x"), "Mar 5, 2024");
        assert_eq!(fmt(&d, "%X"), "2:30 PM");
        assert_eq!(fmt(&d, "%c"), "Mar 5, 2024 2:30 PM");

        let d = decompose(0);
        assert_eq!(fmt(&d, "%A, %B %d"), "Thursday, January 01");
    }

    #[test]
    fn test_format_literals() {
        let d = decompose(0);
        assert_eq!(fmt(&d, ""), "");
        assert_eq!(fmt(&d, "plain"), "plain");
        assert_eq!(fmt(&d, "%"), "%");
        assert_eq!(fmt(&d, "100%"), "100%");
        assert_eq!(fmt(&d, "%%Y"), "%Y");
        assert_eq!(fmt(&d, "%q%Y"), "q1970");
        assert_eq!(fmt(&d, "%é"), "é");
    }

    #[test]
    fn test_format_unknown_locale() {
        let d = decompose(0);
        let mut s = String::new();
        assert_eq!(
            format_fields(&mut s, &d, &CLocale, "xx_YY", "%Y %B"),
            Err(Error::UnknownLocale)
        );
        assert_eq!(s, "1970 ");

        // numeric-only patterns never consult the locale
        s.clear();
        assert_eq!(format_fields(&mut s, &d, &CLocale, "xx_YY", "%Y-%m"), Ok(()));
        assert_eq!(s, "1970-01");
    }

    #[test]
    fn test_format_writer_failure() {
        use crate::utils::BoundedWriter;

        let d = decompose(0);
        let mut w = BoundedWriter::new(6);
        assert_eq!(format_fields(&mut w, &d, &CLocale, "C", "%Y-%m-%d"), Err(Error::Format));
        let mut w = BoundedWriter::new(8);
        assert_eq!(format_fields(&mut w, &d, &CLocale, "C", "%x"), Err(Error::Format));
        let mut w = BoundedWriter::new(11);
        assert_eq!(format_fields(&mut w, &d, &CLocale, "C", "%x"), Ok(()));
    }

    struct Shouting;

    static MONTHS: MonthsList<'static> =
        ["JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC"];
    static WEEKDAYS: WeekdaysList<'static> = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

    impl Locales for Shouting {
        fn short_months(&self, _: &str) -> Result<&MonthsList<'_>, Error> {
            Ok(&MONTHS)
        }
        fn long_months(&self, _: &str) -> Result<&MonthsList<'_>, Error> {
            Ok(&MONTHS)
        }
        fn short_weekdays(&self, _: &str) -> Result<&WeekdaysList<'_>, Error> {
            Ok(&WEEKDAYS)
        }
        fn long_weekdays(&self, _: &str) -> Result<&WeekdaysList<'_>, Error> {
            Ok(&WEEKDAYS)
        }
        fn write_medium_date(
            &self,
            _: &str,
            fields: &CalendarFields,
            w: &mut dyn Write,
        ) -> Result<(), Error> {
            write!(w, "{}.{}.{}", fields.day(), fields.month(), fields.year())?;
            Ok(())
        }
        fn write_short_time(
            &self,
            _: &str,
            fields: &CalendarFields,
            w: &mut dyn Write,
        ) -> Result<(), Error> {
            write!(w, "{}h{:02}", fields.hour(), fields.minute())?;
            Ok(())
        }
    }

    #[test]
    fn test_format_custom_locales() {
        let d = decompose(1_709_649_000_000);
        assert_eq!(
            fmt_with(&d, &Shouting, "%a %b|%x|%X|%c").unwrap(),
            "TUE MAR|5.3.2024|14h30|5.3.2024 14h30"
        );

        let dynamic: &dyn Locales = &Shouting;
        let items = [Item::Literal("<"), Item::Fixed(Fixed::LongWeekdayName), Item::Literal(">")];
        let mut s = String::new();
        format_items(&mut s, &d, dynamic, "any", items).unwrap();
        assert_eq!(s, "<TUE>");
    }
}
