// This is a part of Calendric.
// See README.md and LICENSE.txt for details.

/*!
`strftime`-inspired date and time formatting syntax.

## Specifiers

Spec. | Example       | Description
----- | ------------- | -----------
      |               | **DATE SPECIFIERS:**
`%Y`  | `2001`        | The full proleptic Gregorian year, zero-padded to 4 digits. [2]
`%y`  | `01`          | The year modulo 100, zero-padded to 2 digits. [1]
      |               |
`%m`  | `07`          | Month number (01--12), zero-padded to 2 digits.
`%b`  | `Jul`         | Abbreviated month name, from the locale.
`%B`  | `July`        | Full month name, from the locale.
      |               |
`%d`  | `08`          | Day number (01--31), zero-padded to 2 digits.
`%j`  | `189`         | Day of the year (001--366), zero-padded to 3 digits.
      |               |
`%a`  | `Sun`         | Abbreviated weekday name, from the locale.
`%A`  | `Sunday`      | Full weekday name, from the locale.
`%w`  | `1`           | Sunday = 1, Monday = 2, ..., Saturday = 7.
      |               |
      |               | **TIME SPECIFIERS:**
`%H`  | `00`          | Hour number (00--23), zero-padded to 2 digits.
`%I`  | `12`          | Hour number in 12-hour clocks (01--12), zero-padded to 2 digits.
`%M`  | `34`          | Minute number (00--59), zero-padded to 2 digits.
`%S`  | `59`          | Second number (00--59), zero-padded to 2 digits.
`%s`  | `026`         | Milliseconds since the last whole second, zero-padded to 3 digits.
      |               |
      |               | **LOCALE SPECIFIERS:**
`%c`  | `Jul 8, 2001 12:34 AM` | Medium date and short time of the locale.
`%x`  | `Jul 8, 2001` | Medium date of the locale.
`%X`  | `12:34 AM`    | Short time of the locale.

Any other character after a `%` is printed as is, so `%%` prints a single `%`
and `%q` prints `q`. A `%` at the very end of the string is printed unchanged.

Notes:

1. `%y`:
   This is floor modulo, so the year -1 prints `99`.

2. `%Y`:
   Years outside 0 to 9999 print with an explicit sign, as in `-0001` or `+12345`.
*/

use super::{Fixed, Item, Numeric};

/// Parsing iterator for `strftime`-like format strings.
///
/// The format string is scanned once from left to right;
/// every call to `next` consumes either one specifier or one run of literal text.
#[derive(Clone, Debug)]
pub struct StrftimeItems<'a> {
    /// Remaining portion of the string.
    remainder: &'a str,
}

impl<'a> StrftimeItems<'a> {
    /// Creates a new parsing iterator from the `strftime`-like format string.
    pub const fn new(s: &'a str) -> StrftimeItems<'a> {
        StrftimeItems { remainder: s }
    }
}

impl<'a> Iterator for StrftimeItems<'a> {
    type Item = Item<'a>;

    fn next(&mut self) -> Option<Item<'a>> {
        let rest = match self.remainder.strip_prefix('%') {
            Some(rest) => rest,
            // we are done
            None if self.remainder.is_empty() => return None,
            // the next item is literal
            None => {
                let nextspec = self.remainder.find('%').unwrap_or(self.remainder.len());
                let item = Item::Literal(&self.remainder[..nextspec]);
                self.remainder = &self.remainder[nextspec..];
                return Some(item);
            }
        };

        let spec = match rest.chars().next() {
            Some(spec) => spec,
            None => {
                // a trailing `%` stands for itself
                let item = Item::Literal(self.remainder);
                self.remainder = rest;
                return Some(item);
            }
        };
        let (spec_str, remainder) = rest.split_at(spec.len_utf8());
        self.remainder = remainder;

        Some(match spec {
            'A' => Item::Fixed(Fixed::LongWeekdayName),
            'B' => Item::Fixed(Fixed::LongMonthName),
            'H' => Item::Numeric(Numeric::Hour),
            'I' => Item::Numeric(Numeric::Hour12),
            'M' => Item::Numeric(Numeric::Minute),
            'S' => Item::Numeric(Numeric::Second),
            'X' => Item::Fixed(Fixed::ShortTime),
            'Y' => Item::Numeric(Numeric::Year),
            'a' => Item::Fixed(Fixed::ShortWeekdayName),
            'b' => Item::Fixed(Fixed::ShortMonthName),
            'c' => Item::Fixed(Fixed::MediumDateTime),
            'd' => Item::Numeric(Numeric::Day),
            'j' => Item::Numeric(Numeric::Ordinal),
            'm' => Item::Numeric(Numeric::Month),
            's' => Item::Numeric(Numeric::Millisecond),
            'w' => Item::Numeric(Numeric::WeekdayFromSun),
            'x' => Item::Fixed(Fixed::MediumDate),
            'y' => Item::Numeric(Numeric::YearMod100),
            // no such specifier, print it as is
            _ => Item::Literal(spec_str),
        })
    }
}
