// This is a part of Calendric.
// See README.md and LICENSE.txt for details.

//! Date and time value with a validity state.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::string::String;
use core::fmt;

use crate::calendar::{
    compose, day_of_year, decompose, minutes_to_millis, CalendarFields, EPOCH_YEAR,
};
#[cfg(feature = "alloc")]
use crate::format::CLocale;
use crate::format::{display_fields, format_fields, Locales};
use crate::{Error, Weekday};

/// documented at re-export site
#[cfg(feature = "serde")]
pub(super) mod serde;


/// A date and time of the proleptic Gregorian calendar, or nothing at all.
///
/// A `DateTime` is either *valid*, holding a complete set of [`CalendarFields`],
/// or *invalid*, holding none. There is no partially set state.
/// A new `DateTime` is invalid ([`DateTime::default`]); it becomes valid through one of
/// the constructors or setters, and becomes invalid again after [`reset`](#method.reset)
/// or after a setter rejected its arguments.
///
/// The value is a wall-clock snapshot rather than a zoned instant: the offsets given to
/// [`from_timestamp_millis_with_offset`](#method.from_timestamp_millis_with_offset) are
/// folded into the timestamp and only kept for inspection.
///
/// Two `DateTime`s are equal when both are valid and agree on the year, month, day, hour,
/// minute and second. Milliseconds, weekday and offsets are not compared, and an invalid
/// `DateTime` is equal to nothing, not even to itself. For this reason `DateTime`
/// implements `PartialEq` but not `Eq`.
///
/// # Example
///
/// ```
/// use calendric::DateTime;
///
/// let dt = DateTime::from_ymd_hms(2024, 3, 5, 14, 30, 0).unwrap();
/// assert_eq!(dt.format_default("%Y-%m-%d %H:%M:%S").unwrap(), "2024-03-05 14:30:00");
/// assert_eq!(dt.timestamp_millis(), Some(1_709_649_000_000));
///
/// let mut dt = dt;
/// assert!(dt.set_date(2023, 13, 1).is_err());
/// assert!(!dt.is_valid());
/// assert_eq!(dt.year(), None);
/// ```
#[derive(Clone, Copy, Default)]
pub struct DateTime {
    fields: Option<CalendarFields>,
}

impl DateTime {
    /// Makes a new `DateTime` from the number of milliseconds since the epoch.
    ///
    /// Every `i64` is accepted, so the result is always valid.
    ///
    /// # Example
    ///
    /// ```
    /// use calendric::{DateTime, Weekday};
    ///
    /// let dt = DateTime::from_timestamp_millis(0);
    /// assert_eq!((dt.year(), dt.month(), dt.day()), (Some(1970), Some(1), Some(1)));
    /// assert_eq!(dt.weekday(), Some(Weekday::Thu));
    /// ```
    #[inline]
    #[must_use]
    pub fn from_timestamp_millis(millis: i64) -> DateTime {
        DateTime { fields: Some(decompose(millis)) }
    }

    /// Makes a new `DateTime` from the number of milliseconds since the epoch, shifted by a
    /// raw timezone offset and a daylight saving offset, both in minutes.
    ///
    /// The offsets are added to `millis` before the decomposition and are then available
    /// from [`tz_offset_minutes`](#method.tz_offset_minutes) and
    /// [`dst_offset_minutes`](#method.dst_offset_minutes).
    /// [`timestamp_millis`](#method.timestamp_millis) returns the shifted value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the shifted value does not fit in an `i64`.
    ///
    /// # Example
    ///
    /// ```
    /// use calendric::DateTime;
    ///
    /// let dt = DateTime::from_timestamp_millis_with_offset(0, 60, 60).unwrap();
    /// assert_eq!(dt.hour(), Some(2));
    /// assert_eq!(dt.tz_offset_minutes(), Some(60));
    /// assert_eq!(dt.timestamp_millis(), Some(7_200_000));
    /// ```
    pub fn from_timestamp_millis_with_offset(
        millis: i64,
        tz_offset_minutes: i32,
        dst_offset_minutes: i32,
    ) -> Result<DateTime, Error> {
        let shift = minutes_to_millis(tz_offset_minutes) + minutes_to_millis(dst_offset_minutes);
        let local = millis.checked_add(shift).ok_or(Error::OutOfRange)?;
        let fields = decompose(local).with_offsets(tz_offset_minutes, dst_offset_minutes);
        Ok(DateTime { fields: Some(fields) })
    }

    /// Makes a new `DateTime` from the calendar date and the time of day.
    /// The millisecond is zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] for a year before 1970, a month outside 1 to 12 or a
    /// day outside the month, and [`Error::InvalidTime`] for an hour above 23, or a minute
    /// or a second above 59. Returns [`Error::OutOfRange`] if the date is too far in the
    /// future for an `i64` millisecond timestamp.
    ///
    /// # Example
    ///
    /// ```
    /// use calendric::{DateTime, Error};
    ///
    /// assert!(DateTime::from_ymd_hms(2024, 2, 29, 23, 59, 59).is_ok());
    /// assert_eq!(DateTime::from_ymd_hms(2023, 2, 29, 0, 0, 0).err(), Some(Error::InvalidDate));
    /// assert_eq!(DateTime::from_ymd_hms(1969, 12, 31, 0, 0, 0).err(), Some(Error::InvalidDate));
    /// assert_eq!(DateTime::from_ymd_hms(2023, 1, 1, 24, 0, 0).err(), Some(Error::InvalidTime));
    /// ```
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<DateTime, Error> {
        if year < EPOCH_YEAR || day_of_year(day, month, year).is_none() {
            return Err(Error::InvalidDate);
        }
        let fields = CalendarFields::from_ymd_hms_milli(year, month, day, hour, minute, second, 0)
            .ok_or(Error::InvalidTime)?;
        let millis = compose(&fields).ok_or(Error::OutOfRange)?;
        Ok(DateTime::from_timestamp_millis(millis))
    }

    /// Makes this value equal to [`DateTime::from_timestamp_millis`].
    #[inline]
    pub fn set_timestamp_millis(&mut self, millis: i64) {
        *self = DateTime::from_timestamp_millis(millis);
    }

    /// Makes this value equal to [`DateTime::from_timestamp_millis_with_offset`].
    ///
    /// # Errors
    ///
    /// On error the value becomes invalid.
    pub fn set_timestamp_millis_with_offset(
        &mut self,
        millis: i64,
        tz_offset_minutes: i32,
        dst_offset_minutes: i32,
    ) -> Result<(), Error> {
        self.replace_with(DateTime::from_timestamp_millis_with_offset(
            millis,
            tz_offset_minutes,
            dst_offset_minutes,
        ))
    }

    /// Makes this value equal to [`DateTime::from_ymd_hms`].
    ///
    /// # Errors
    ///
    /// On error the value becomes invalid.
    pub fn set_ymd_hms(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<(), Error> {
        self.replace_with(DateTime::from_ymd_hms(year, month, day, hour, minute, second))
    }

    /// Sets the date, with the time at midnight.
    ///
    /// # Errors
    ///
    /// Same as [`DateTime::from_ymd_hms`]; on error the value becomes invalid.
    #[inline]
    pub fn set_date(&mut self, year: i32, month: u32, day: u32) -> Result<(), Error> {
        self.set_ymd_hms(year, month, day, 0, 0, 0)
    }

    /// Sets the time of day and keeps the date. The millisecond becomes zero.
    ///
    /// The offsets recorded by
    /// [`from_timestamp_millis_with_offset`](#method.from_timestamp_millis_with_offset)
    /// are kept as well.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateTime`] and leaves the value untouched if it is invalid.
    /// Otherwise fails like [`DateTime::from_ymd_hms`] and the value becomes invalid; this
    /// includes a date before 1970.
    ///
    /// # Example
    ///
    /// ```
    /// use calendric::{DateTime, Error};
    ///
    /// let mut dt = DateTime::from_ymd_hms(2024, 3, 5, 14, 30, 0).unwrap();
    /// dt.set_time(8, 15, 0).unwrap();
    /// assert_eq!(dt.to_string(), "2024-03-05 08:15:00");
    ///
    /// let mut invalid = DateTime::default();
    /// assert_eq!(invalid.set_time(8, 15, 0), Err(Error::InvalidDateTime));
    /// assert!(!invalid.is_valid());
    /// ```
    pub fn set_time(&mut self, hour: u32, minute: u32, second: u32) -> Result<(), Error> {
        let current = self.fields.ok_or(Error::InvalidDateTime)?;
        self.set_ymd_hms(current.year(), current.month(), current.day(), hour, minute, second)?;
        self.fields = self
            .fields
            .map(|f| f.with_offsets(current.tz_offset_minutes(), current.dst_offset_minutes()));
        Ok(())
    }

    fn replace_with(&mut self, result: Result<DateTime, Error>) -> Result<(), Error> {
        match result {
            Ok(dt) => {
                *self = dt;
                Ok(())
            }
            Err(e) => {
                self.reset();
                Err(e)
            }
        }
    }

    /// Makes this value invalid.
    #[inline]
    pub fn reset(&mut self) {
        self.fields = None;
    }

    /// Returns `true` if this value holds a date and time.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.fields.is_some()
    }

    /// Returns the calendar fields, or `None` if this value is invalid.
    #[inline]
    pub const fn fields(&self) -> Option<&CalendarFields> {
        self.fields.as_ref()
    }

    /// Returns the year number.
    #[inline]
    pub fn year(&self) -> Option<i32> {
        self.fields.map(|f| f.year())
    }

    /// Returns the month number, starting from 1.
    #[inline]
    pub fn month(&self) -> Option<u32> {
        self.fields.map(|f| f.month())
    }

    /// Returns the day of month, starting from 1.
    #[inline]
    pub fn day(&self) -> Option<u32> {
        self.fields.map(|f| f.day())
    }

    /// Returns the hour number, from 0 to 23.
    #[inline]
    pub fn hour(&self) -> Option<u32> {
        self.fields.map(|f| f.hour())
    }

    /// Returns the minute number, from 0 to 59.
    #[inline]
    pub fn minute(&self) -> Option<u32> {
        self.fields.map(|f| f.minute())
    }

    /// Returns the second number, from 0 to 59.
    #[inline]
    pub fn second(&self) -> Option<u32> {
        self.fields.map(|f| f.second())
    }

    /// Returns the milliseconds since the last whole second, from 0 to 999.
    #[inline]
    pub fn millisecond(&self) -> Option<u32> {
        self.fields.map(|f| f.millisecond())
    }

    /// Returns the day of week.
    ///
    /// Use [`Weekday::number_from_sunday`] for the numbering where Sunday is 1.
    #[inline]
    pub fn weekday(&self) -> Option<Weekday> {
        self.fields.map(|f| f.weekday())
    }

    /// Returns the day of year, starting from 1.
    #[inline]
    pub fn ordinal(&self) -> Option<u32> {
        self.fields.map(|f| f.ordinal())
    }

    /// Returns the raw timezone offset in minutes, zero unless set by
    /// [`from_timestamp_millis_with_offset`](#method.from_timestamp_millis_with_offset).
    #[inline]
    pub fn tz_offset_minutes(&self) -> Option<i32> {
        self.fields.map(|f| f.tz_offset_minutes())
    }

    /// Returns the daylight saving offset in minutes, zero unless set by
    /// [`from_timestamp_millis_with_offset`](#method.from_timestamp_millis_with_offset).
    #[inline]
    pub fn dst_offset_minutes(&self) -> Option<i32> {
        self.fields.map(|f| f.dst_offset_minutes())
    }

    /// Returns the number of milliseconds since the epoch, or `None` if this value is
    /// invalid.
    ///
    /// For a value built with offsets this is the shifted, wall-clock timestamp.
    #[inline]
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.fields.as_ref().and_then(compose)
    }

    /// Renders this value into `w` following the `strftime`-like `pattern`, with names from
    /// `locales` for the identifier `locale`.
    ///
    /// See the [`format::strftime`](crate::format::strftime) module for the syntax.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateTime`] if this value is invalid, and otherwise fails like
    /// [`format_fields`](crate::format::format_fields).
    pub fn format_to<W, L>(
        &self,
        w: &mut W,
        locales: &L,
        locale: &str,
        pattern: &str,
    ) -> Result<(), Error>
    where
        W: fmt::Write,
        L: Locales + ?Sized,
    {
        let fields = self.fields.as_ref().ok_or(Error::InvalidDateTime)?;
        format_fields(w, fields, locales, locale, pattern)
    }

    /// Formats this value following the `strftime`-like `pattern`, with names from
    /// `locales` for the identifier `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateTime`] if this value is invalid, and
    /// [`Error::UnknownLocale`] if `pattern` needs names that `locales` does not have.
    ///
    /// # Example
    ///
    /// ```
    /// use calendric::format::CLocale;
    /// use calendric::{DateTime, Error};
    ///
    /// let dt = DateTime::from_ymd_hms(2024, 3, 5, 14, 30, 0).unwrap();
    /// assert_eq!(dt.format(&CLocale, "en_US", "%A %x").unwrap(), "Tuesday Mar 5, 2024");
    /// assert_eq!(dt.format(&CLocale, "ja_JP", "%B").err(), Some(Error::UnknownLocale));
    ///
    /// let invalid = DateTime::default();
    /// assert_eq!(invalid.format(&CLocale, "C", "%Y").err(), Some(Error::InvalidDateTime));
    /// ```
    #[cfg(feature = "alloc")]
    pub fn format<L>(&self, locales: &L, locale: &str, pattern: &str) -> Result<String, Error>
    where
        L: Locales + ?Sized,
    {
        let mut result = String::new();
        self.format_to(&mut result, locales, locale, pattern)?;
        Ok(result)
    }

    /// Formats this value following the `strftime`-like `pattern`, with the names of the
    /// [`CLocale`](crate::format::CLocale).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateTime`] if this value is invalid.
    #[cfg(feature = "alloc")]
    #[inline]
    pub fn format_default(&self, pattern: &str) -> Result<String, Error> {
        self.format(&CLocale, "C", pattern)
    }
}

impl PartialEq for DateTime {
    fn eq(&self, other: &DateTime) -> bool {
        match (self.fields, other.fields) {
            (Some(a), Some(b)) => {
                (a.year(), a.month(), a.day(), a.hour(), a.minute(), a.second())
                    == (b.year(), b.month(), b.day(), b.hour(), b.minute(), b.second())
            }
            _ => false,
        }
    }
}

/// The `Debug` output adds milliseconds and offsets to the `Display` output.
impl fmt::Debug for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.fields {
            Some(ref fields) => {
                display_fields(f, fields, "%Y-%m-%dT%H:%M:%S.%s")?;
                if fields.tz_offset_minutes() != 0 || fields.dst_offset_minutes() != 0 {
                    let (tz, dst) = (fields.tz_offset_minutes(), fields.dst_offset_minutes());
                    write!(f, " (tz {:+}m, dst {:+}m)", tz, dst)?;
                }
                Ok(())
            }
            None => f.write_str("DateTime(invalid)"),
        }
    }
}

/// The `Display` output is `%Y-%m-%d %H:%M:%S`, or `invalid` for an invalid value.
impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.fields {
            Some(ref fields) => display_fields(f, fields, "%Y-%m-%d %H:%M:%S"),
            None => f.write_str("invalid"),
        }
    }
}
