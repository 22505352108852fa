//! Serialization/Deserialization with serde.
//!
//! `DateTime` serializes as a signed integer number of milliseconds since the epoch, which
//! is the only exchanged representation of this crate. This module holds an alternative
//! for `Option<DateTime>` fields, for use with serde's [`with` annotation][1].
//!
//! *Available on crate feature 'serde' only.*
//!
//! [1]: https://serde.rs/field-attrs.html#with
use core::fmt;
use serde::{de, ser};

pub use crate::datetime::serde::*;

/// Create a custom `de::Error` with `SerdeError::InvalidTimestamp`.
pub(crate) fn invalid_ts<E, T>(value: T) -> E
where
    E: de::Error,
    T: fmt::Display,
{
    E::custom(SerdeError::InvalidTimestamp(value))
}

/// Create a custom `ser::Error` with `SerdeError::InvalidDateTime`.
pub(crate) fn not_valid<E>() -> E
where
    E: ser::Error,
{
    E::custom(SerdeError::<u8>::InvalidDateTime)
}

enum SerdeError<T: fmt::Display> {
    InvalidTimestamp(T),
    InvalidDateTime,
}

impl<T: fmt::Display> fmt::Display for SerdeError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SerdeError::InvalidTimestamp(ts) => {
                write!(f, "value is not a legal timestamp: {}", ts)
            }
            SerdeError::InvalidDateTime => f.write_str("invalid date time cannot be serialized"),
        }
    }
}
