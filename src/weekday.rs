use core::fmt;

/// The day of week.
///
/// Days are counted from Sunday, which is day number 1 in the calendar fields
/// (see [`Weekday::number_from_sunday`]).
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Weekday {
    /// Sunday.
    Sun = 0,
    /// Monday.
    Mon = 1,
    /// Tuesday.
    Tue = 2,
    /// Wednesday.
    Wed = 3,
    /// Thursday.
    Thu = 4,
    /// Friday.
    Fri = 5,
    /// Saturday.
    Sat = 6,
}

impl Weekday {
    /// The next day in the week.
    ///
    /// `w`:        | `Sun` | `Mon` | `Tue` | `Wed` | `Thu` | `Fri` | `Sat`
    /// ----------- | ----- | ----- | ----- | ----- | ----- | ----- | -----
    /// `w.succ()`: | `Mon` | `Tue` | `Wed` | `Thu` | `Fri` | `Sat` | `Sun`
    #[inline]
    pub const fn succ(&self) -> Weekday {
        Weekday::from_days_from_sunday(self.num_days_from_sunday() + 1)
    }

    /// The previous day in the week.
    ///
    /// `w`:        | `Sun` | `Mon` | `Tue` | `Wed` | `Thu` | `Fri` | `Sat`
    /// ----------- | ----- | ----- | ----- | ----- | ----- | ----- | -----
    /// `w.pred()`: | `Sat` | `Sun` | `Mon` | `Tue` | `Wed` | `Thu` | `Fri`
    #[inline]
    pub const fn pred(&self) -> Weekday {
        Weekday::from_days_from_sunday(self.num_days_from_sunday() + 6)
    }

    /// Returns a day-of-week number starting from Sunday = 1.
    ///
    /// This is the weekday number stored in the calendar fields and rendered by `%w`.
    ///
    /// `w`:                      | `Sun` | `Mon` | `Tue` | `Wed` | `Thu` | `Fri` | `Sat`
    /// ------------------------- | ----- | ----- | ----- | ----- | ----- | ----- | -----
    /// `w.number_from_sunday()`: | 1     | 2     | 3     | 4     | 5     | 6     | 7
    #[inline]
    pub const fn number_from_sunday(&self) -> u32 {
        self.num_days_from_sunday() + 1
    }

    /// Returns a day-of-week number starting from Sunday = 0.
    ///
    /// `w`:                        | `Sun` | `Mon` | `Tue` | `Wed` | `Thu` | `Fri` | `Sat`
    /// --------------------------- | ----- | ----- | ----- | ----- | ----- | ----- | -----
    /// `w.num_days_from_sunday()`: | 0     | 1     | 2     | 3     | 4     | 5     | 6
    #[inline]
    pub const fn num_days_from_sunday(&self) -> u32 {
        *self as u32
    }

    /// Returns a day-of-week number starting from Monday = 1. (ISO 8601 weekday number)
    #[inline]
    pub const fn number_from_monday(&self) -> u32 {
        (self.num_days_from_sunday() + 6) % 7 + 1
    }

    /// Makes a weekday from a number of days past a Sunday. Wraps around every 7 days.
    #[inline]
    pub(crate) const fn from_days_from_sunday(n: u32) -> Weekday {
        match n % 7 {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Weekday::Sun => "Sun",
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
        })
    }
}

/// Any weekday can be represented as an integer from 0 to 6, which equals to
/// [`Weekday::num_days_from_sunday`](#method.num_days_from_sunday) in this implementation.
impl num_traits::FromPrimitive for Weekday {
    #[inline]
    fn from_i64(n: i64) -> Option<Weekday> {
        match n {
            0..=6 => Some(Weekday::from_days_from_sunday(n as u32)),
            _ => None,
        }
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Weekday> {
        match n {
            0..=6 => Some(Weekday::from_days_from_sunday(n as u32)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use num_traits::FromPrimitive;

    use super::Weekday;

    #[test]
    fn test_from_primitive() {
        assert_eq!(Weekday::from_u64(0), Some(Weekday::Sun));
        assert_eq!(Weekday::from_u64(4), Some(Weekday::Thu));
        assert_eq!(Weekday::from_u64(6), Some(Weekday::Sat));
        assert_eq!(Weekday::from_u64(7), None);
        assert_eq!(Weekday::from_i64(-1), None);
    }

    #[test]
    fn test_numbering() {
        assert_eq!(Weekday::Sun.number_from_sunday(), 1);
        assert_eq!(Weekday::Thu.number_from_sunday(), 5);
        assert_eq!(Weekday::Sat.number_from_sunday(), 7);
        assert_eq!(Weekday::Mon.number_from_monday(), 1);
        assert_eq!(Weekday::Sun.number_from_monday(), 7);
    }

    #[test]
    fn test_succ_pred() {
        for i in 0..7 {
            let day = Weekday::from_u64(i).unwrap();
            assert_eq!(day.succ().pred(), day);
            assert_eq!(day.pred().succ(), day);
            assert_eq!(day.succ().num_days_from_sunday(), (day.num_days_from_sunday() + 1) % 7);
        }
        assert_eq!(Weekday::Sat.succ(), Weekday::Sun);
        assert_eq!(Weekday::Sun.pred(), Weekday::Sat);
    }
}
