// This is a part of Calendric.
// See README.md and LICENSE.txt for details.

//! # Calendric: millisecond timestamps and calendar fields
//!
//! Calendric converts between a count of milliseconds since the epoch
//! (1970-01-01 00:00:00.000) and the fields of the proleptic Gregorian calendar,
//! and renders those fields with a small `strftime`-like language.
//!
//! The crate is made of three layers:
//!
//! * The [`calendar`] engine: pure conversions ([`calendar::decompose`] and
//!   [`calendar::compose`]) and the leap year arithmetic they rest on.
//! * The [`DateTime`] value: a set of [`CalendarFields`] that is either complete
//!   (*valid*) or absent (*invalid*), with constructors, setters and accessors.
//! * The [`format`] interpreter: a single left-to-right pass over a pattern such as
//!   `"%Y-%m-%d %H:%M:%S"`. Month and weekday names and the locale's date and time
//!   renderings come from an implementation of [`format::Locales`].
//!
//! ### Features
//!
//! Default features:
//!
//! - `alloc`: Enable features that depend on allocation (primarily string formatting)
//! - `std`: Enables functionality that depends on the standard library. This
//!   is a superset of `alloc` and adds interoperation with standard library types
//!   and traits.
//!
//! Optional features:
//!
//! - `serde`: Enable serialization/deserialization via serde, as a millisecond timestamp.
//!
//! ## Overview
//!
//! ### Construction
//!
//! ```rust
//! use calendric::{DateTime, Error, Weekday};
//!
//! // from a timestamp; every `i64` is accepted
//! let dt = DateTime::from_timestamp_millis(1_000_000_000_000);
//! assert_eq!(dt.to_string(), "2001-09-09 01:46:40");
//! assert_eq!(dt.weekday(), Some(Weekday::Sun));
//!
//! // from calendar fields, which are validated
//! let dt = DateTime::from_ymd_hms(2024, 3, 5, 14, 30, 0)?;
//! assert_eq!(dt.timestamp_millis(), Some(1_709_649_000_000));
//! assert_eq!(DateTime::from_ymd_hms(2023, 13, 1, 0, 0, 0).err(), Some(Error::InvalidDate));
//!
//! // with a timezone offset and a daylight saving offset, in minutes
//! let dt = DateTime::from_timestamp_millis_with_offset(0, -300, 60)?;
//! assert_eq!(dt.to_string(), "1969-12-31 20:00:00");
//! # Ok::<(), Error>(())
//! ```
//!
//! An invalid `DateTime` answers `None` to every accessor:
//!
//! ```rust
//! use calendric::DateTime;
//!
//! let mut dt = DateTime::from_timestamp_millis(0);
//! assert!(dt.set_date(2023, 2, 29).is_err());
//! assert!(!dt.is_valid());
//! assert_eq!(dt.year(), None);
//! assert_eq!(dt.timestamp_millis(), None);
//! ```
//!
//! ### Formatting
//!
//! ```rust
//! use calendric::format::CLocale;
//! use calendric::DateTime;
//!
//! let dt = DateTime::from_ymd_hms(2024, 3, 5, 14, 30, 0).unwrap();
//! assert_eq!(dt.format_default("%Y-%m-%d %H:%M:%S").unwrap(), "2024-03-05 14:30:00");
//! let long = dt.format(&CLocale, "en_US", "%A, %B %d, %I:%M").unwrap();
//! assert_eq!(long, "Tuesday, March 05, 02:30");
//! assert_eq!(dt.format(&CLocale, "C", "%c").unwrap(), "Mar 5, 2024 2:30 PM");
//! ```
//!
//! See the [`format::strftime`] module for the full list of specifiers.

#![doc(html_root_url = "https://docs.rs/calendric/latest/")]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![warn(unreachable_pub)]
#![deny(clippy::tests_outside_test_module)]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod calendar;
pub use calendar::CalendarFields;

mod datetime;
pub use datetime::DateTime;

mod error;
pub use error::Error;

pub mod format;

#[cfg(feature = "serde")]
pub mod serde;

mod utils;

mod weekday;
pub use weekday::Weekday;
