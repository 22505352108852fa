use core::fmt;

/// The error raised by date and time construction and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// A year, month or day outside its valid range.
    InvalidDate,
    /// An hour, minute or second outside its valid range.
    InvalidTime,
    /// The operation needs a valid date and time, but the value is invalid.
    InvalidDateTime,
    /// The millisecond count does not fit in an `i64`.
    OutOfRange,
    /// The locale provider has no data for the requested locale.
    UnknownLocale,
    /// The underlying writer failed.
    Format,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDate => write!(f, "invalid date"),
            Error::InvalidTime => write!(f, "invalid time"),
            Error::InvalidDateTime => write!(f, "invalid date time"),
            Error::OutOfRange => write!(f, "timestamp out of range"),
            Error::UnknownLocale => write!(f, "unknown locale"),
            Error::Format => write!(f, "formatting error"),
        }
    }
}

impl From<fmt::Error> for Error {
    #[inline]
    fn from(_: fmt::Error) -> Self {
        Error::Format
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
