// This is a part of Calendric.
// See README.md and LICENSE.txt for details.

//! The calendar engine.
//!
//! Pure conversions between a linear count of milliseconds since the epoch
//! (1970-01-01 00:00:00.000) and proleptic Gregorian calendar fields.
//! Every function here is total: invalid input yields `None` instead of a sentinel.
//!
//! The forward transform ([`decompose`]) first strips whole 400-year cycles, which
//! always hold exactly 146,097 days, and then walks the remaining years and months.
//! The walk is linear but bounded by 400 years and 12 months, so decomposing any
//! `i64` timestamp takes constant time.
//! The inverse transform ([`compose`]) is closed-form.

use num_integer::{div_floor, div_mod_floor, mod_floor};

use crate::Weekday;

/// The year of the epoch. Day 0 (January 1, 1970) is a Thursday.
pub const EPOCH_YEAR: i32 = 1970;

pub(crate) const MILLIS_PER_SECOND: i64 = 1_000;
pub(crate) const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const SECONDS_PER_DAY: i64 = 86_400;
const MILLIS_PER_DAY: i64 = SECONDS_PER_DAY * MILLIS_PER_SECOND;

/// Number of days in every span of 400 consecutive Gregorian years.
const DAYS_PER_400_YEARS: i64 = 146_097;

/// Leap days in the years 1 through 1969: `1969 / 4 - 1969 / 100 + 1969 / 400`.
const LEAP_DAYS_BEFORE_EPOCH: i64 = 477;

/// Returns `true` for a leap year of the proleptic Gregorian calendar.
///
/// ```
/// use calendric::calendar::is_leap_year;
///
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(2024));
/// assert!(!is_leap_year(2023));
/// ```
#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `year`, either 365 or 366.
#[inline]
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Returns the number of days of `month` (1 to 12), or `None` for any other month.
///
/// ```
/// use calendric::calendar::days_in_month;
///
/// assert_eq!(days_in_month(2, true), Some(29));
/// assert_eq!(days_in_month(2, false), Some(28));
/// assert_eq!(days_in_month(4, false), Some(30));
/// assert_eq!(days_in_month(13, false), None);
/// ```
#[inline]
pub const fn days_in_month(month: u32, is_leap: bool) -> Option<u32> {
    match month {
        1..=12 => Some(month_length(month, is_leap)),
        _ => None,
    }
}

// Odd months are long up to July, even months are long from August on.
// `month` must be within 1 to 12.
#[inline]
const fn month_length(month: u32, is_leap: bool) -> u32 {
    match month {
        2 if is_leap => 29,
        2 => 28,
        1..=7 => 30 + month % 2,
        _ => 31 - month % 2,
    }
}

/// Returns the 1-based ordinal of the given date within its year.
///
/// Returns `None` for a year before the epoch, a month outside 1 to 12,
/// or a day outside the month.
///
/// ```
/// use calendric::calendar::day_of_year;
///
/// assert_eq!(day_of_year(1, 1, 1970), Some(1));
/// assert_eq!(day_of_year(31, 12, 1972), Some(366));
/// assert_eq!(day_of_year(29, 2, 1971), None);
/// assert_eq!(day_of_year(1, 1, 1969), None);
/// ```
pub fn day_of_year(day: u32, month: u32, year: i32) -> Option<u32> {
    if year < EPOCH_YEAR {
        return None;
    }
    ordinal_from_md(year, month, day)
}

/// Same as [`day_of_year`] without the epoch restriction.
fn ordinal_from_md(year: i32, month: u32, day: u32) -> Option<u32> {
    let leap = is_leap_year(year);
    if day < 1 || day > days_in_month(month, leap)? {
        return None;
    }
    Some((1..month).map(|m| month_length(m, leap)).sum::<u32>() + day)
}

/// Number of days from the epoch to the given ordinal date, negative before the epoch.
///
/// This counts 365 days per elapsed year and corrects for every leap day in between:
/// one each 4 years, minus one each 100 years, plus one each 400 years.
/// The floor division keeps the correction exact on both sides of a century boundary
/// and for years before the epoch.
fn days_from_epoch(year: i32, ordinal: u32) -> i64 {
    let year = i64::from(year);
    let prior = year - 1;
    let leap_days =
        div_floor(prior, 4) - div_floor(prior, 100) + div_floor(prior, 400) - LEAP_DAYS_BEFORE_EPOCH;
    (year - i64::from(EPOCH_YEAR)) * 365 + leap_days + i64::from(ordinal) - 1
}

#[inline]
fn weekday_from_days(days: i64) -> Weekday {
    // day 0 is a Thursday, 4 days past a Sunday
    Weekday::from_days_from_sunday(mod_floor(days + 4, 7) as u32)
}

/// Calendar fields of a single instant.
///
/// A `CalendarFields` is always well-formed: the day fits its month, and the weekday
/// and the ordinal agree with the date. It can only be produced by [`decompose`] or by
/// the validating constructor [`CalendarFields::from_ymd_hms_milli`].
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct CalendarFields {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: u32,
    weekday: Weekday,
    ordinal: u32,
    tz_offset_minutes: i32,
    dst_offset_minutes: i32,
}

impl CalendarFields {
    /// Makes calendar fields from a date and a time, deriving the weekday and the ordinal.
    ///
    /// Any year is accepted. Returns `None` when another field is out of range.
    ///
    /// ```
    /// use calendric::calendar::CalendarFields;
    /// use calendric::Weekday;
    ///
    /// let fields = CalendarFields::from_ymd_hms_milli(2024, 3, 5, 14, 30, 0, 0).unwrap();
    /// assert_eq!(fields.weekday(), Weekday::Tue);
    /// assert_eq!(fields.ordinal(), 65);
    ///
    /// assert!(CalendarFields::from_ymd_hms_milli(2023, 2, 29, 0, 0, 0, 0).is_none());
    /// ```
    pub fn from_ymd_hms_milli(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Option<CalendarFields> {
        if hour > 23 || minute > 59 || second > 59 || millisecond > 999 {
            return None;
        }
        let ordinal = ordinal_from_md(year, month, day)?;
        Some(CalendarFields {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
            weekday: weekday_from_days(days_from_epoch(year, ordinal)),
            ordinal,
            tz_offset_minutes: 0,
            dst_offset_minutes: 0,
        })
    }

    /// Records the offsets that were applied to the timestamp before decomposition.
    #[inline]
    pub(crate) fn with_offsets(
        mut self,
        tz_offset_minutes: i32,
        dst_offset_minutes: i32,
    ) -> CalendarFields {
        self.tz_offset_minutes = tz_offset_minutes;
        self.dst_offset_minutes = dst_offset_minutes;
        self
    }

    /// The year number.
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The month number, starting from 1.
    #[inline]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// The day of month, starting from 1.
    #[inline]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// The hour number, from 0 to 23.
    #[inline]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// The hour number in the 12-hour clocks: `(is_pm, hour)` with `hour` from 1 to 12.
    #[inline]
    pub const fn hour12(&self) -> (bool, u32) {
        let hour12 = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        (self.hour >= 12, hour12)
    }

    /// The minute number, from 0 to 59.
    #[inline]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// The second number, from 0 to 59.
    #[inline]
    pub const fn second(&self) -> u32 {
        self.second
    }

    /// The milliseconds since the last whole second, from 0 to 999.
    #[inline]
    pub const fn millisecond(&self) -> u32 {
        self.millisecond
    }

    /// The day of week.
    #[inline]
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// The day of year, starting from 1.
    #[inline]
    pub const fn ordinal(&self) -> u32 {
        self.ordinal
    }

    /// The raw timezone offset in minutes that was applied before decomposition.
    #[inline]
    pub const fn tz_offset_minutes(&self) -> i32 {
        self.tz_offset_minutes
    }

    /// The daylight saving offset in minutes that was applied before decomposition.
    #[inline]
    pub const fn dst_offset_minutes(&self) -> i32 {
        self.dst_offset_minutes
    }
}

/// Splits a millisecond timestamp into calendar fields.
///
/// Every `i64` is accepted, including instants before the epoch.
///
/// ```
/// use calendric::calendar::decompose;
/// use calendric::Weekday;
///
/// let epoch = decompose(0);
/// assert_eq!((epoch.year(), epoch.month(), epoch.day()), (1970, 1, 1));
/// assert_eq!(epoch.weekday(), Weekday::Thu);
/// assert_eq!(epoch.weekday().number_from_sunday(), 5);
///
/// let before = decompose(-1);
/// assert_eq!((before.year(), before.month(), before.day()), (1969, 12, 31));
/// assert_eq!((before.hour(), before.minute(), before.second()), (23, 59, 59));
/// assert_eq!(before.millisecond(), 999);
/// ```
pub fn decompose(millis: i64) -> CalendarFields {
    let (days, time) = div_mod_floor(millis, MILLIS_PER_DAY);

    let millisecond = (time % MILLIS_PER_SECOND) as u32;
    let secs = (time / MILLIS_PER_SECOND) as u32;
    let second = secs % 60;
    let minute = secs / 60 % 60;
    let hour = secs / 3600;

    let weekday = weekday_from_days(days);

    // an i64 timestamp spans less than 2^21 cycles, so the year always fits in i32
    let (cycles, mut days) = div_mod_floor(days, DAYS_PER_400_YEARS);
    let mut year = EPOCH_YEAR + (cycles as i32) * 400;
    loop {
        let len = i64::from(days_in_year(year));
        if days < len {
            break;
        }
        days -= len;
        year += 1;
    }

    let ordinal = days as u32 + 1;
    let leap = is_leap_year(year);
    let mut month = 1;
    let mut day0 = ordinal - 1;
    while day0 >= month_length(month, leap) {
        day0 -= month_length(month, leap);
        month += 1;
    }

    CalendarFields {
        year,
        month,
        day: day0 + 1,
        hour,
        minute,
        second,
        millisecond,
        weekday,
        ordinal,
        tz_offset_minutes: 0,
        dst_offset_minutes: 0,
    }
}

/// Joins calendar fields into a millisecond timestamp.
///
/// Returns `None` when the result does not fit in an `i64`.
/// For any timestamp `t`, `compose(&decompose(t)) == Some(t)`.
///
/// ```
/// use calendric::calendar::{compose, decompose, CalendarFields};
///
/// let fields = CalendarFields::from_ymd_hms_milli(2000, 3, 1, 0, 0, 0, 0).unwrap();
/// assert_eq!(compose(&fields), Some(951_868_800_000));
/// assert_eq!(compose(&decompose(-1)), Some(-1));
///
/// let far = CalendarFields::from_ymd_hms_milli(i32::MAX, 1, 1, 0, 0, 0, 0).unwrap();
/// assert_eq!(compose(&far), None);
/// ```
pub fn compose(fields: &CalendarFields) -> Option<i64> {
    let days = days_from_epoch(fields.year, fields.ordinal);
    let time = i64::from(fields.hour) * 3_600_000
        + i64::from(fields.minute) * MILLIS_PER_MINUTE
        + i64::from(fields.second) * MILLIS_PER_SECOND
        + i64::from(fields.millisecond);

    // keep every partial sum between the result and zero
    if days < 0 {
        (days + 1).checked_mul(MILLIS_PER_DAY)?.checked_add(time - MILLIS_PER_DAY)
    } else {
        days.checked_mul(MILLIS_PER_DAY)?.checked_add(time)
    }
}

/// Converts minutes to milliseconds.
#[inline]
pub(crate) fn minutes_to_millis(minutes: i32) -> i64 {
    i64::from(minutes) * MILLIS_PER_MINUTE
}
