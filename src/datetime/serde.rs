use core::fmt;
use serde::{de, ser};

use super::DateTime;
use crate::serde::{invalid_ts, not_valid};

#[doc(hidden)]
#[derive(Debug)]
pub struct MilliSecondsTimestampVisitor;

/// Serialize into an integer number of milliseconds since the epoch.
///
/// An invalid `DateTime` fails to serialize.
impl ser::Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        match self.timestamp_millis() {
            Some(millis) => serializer.serialize_i64(millis),
            None => Err(not_valid()),
        }
    }
}

impl<'de> de::Visitor<'de> for MilliSecondsTimestampVisitor {
    type Value = DateTime;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a unix timestamp in milliseconds")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(DateTime::from_timestamp_millis(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        i64::try_from(value).map(DateTime::from_timestamp_millis).map_err(|_| invalid_ts(value))
    }
}

/// Deserialize from an integer number of milliseconds since the epoch.
impl<'de> de::Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_i64(MilliSecondsTimestampVisitor)
    }
}

/// Ser/de an `Option<DateTime>` to/from milliseconds since the epoch
///
/// Intended for use with `serde`s `with` attribute. `None` maps to `null`.
///
/// # Example:
///
/// ```rust
/// # use calendric::DateTime;
/// # use serde_derive::{Deserialize, Serialize};
/// use calendric::serde::ts_milliseconds_option;
/// #[derive(Deserialize, Serialize)]
/// struct S {
///     #[serde(with = "ts_milliseconds_option")]
///     time: Option<DateTime>,
/// }
///
/// let time = Some(DateTime::from_ymd_hms(2018, 5, 17, 2, 4, 59).unwrap());
/// let my_s = S { time };
///
/// let as_string = serde_json::to_string(&my_s)?;
/// assert_eq!(as_string, r#"{"time":1526522699000}"#);
/// let my_s: S = serde_json::from_str(&as_string)?;
/// assert_eq!(my_s.time, time);
/// # Ok::<(), serde_json::Error>(())
/// ```
pub mod ts_milliseconds_option {
    use core::fmt;
    use serde::{de, ser};

    use super::MilliSecondsTimestampVisitor;
    use crate::DateTime;

    /// Serialize an `Option<DateTime>` into an integer number of milliseconds or `none`
    ///
    /// Intended for use with `serde`s `serialize_with` attribute.
    pub fn serialize<S>(opt: &Option<DateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        match *opt {
            Some(ref dt) => serializer.serialize_some(dt),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an `Option<DateTime>` from an integer number of milliseconds or `none`
    ///
    /// Intended for use with `serde`s `deserialize_with` attribute.
    pub fn deserialize<'de, D>(d: D) -> Result<Option<DateTime>, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_option(OptionMilliSecondsTimestampVisitor)
    }

    struct OptionMilliSecondsTimestampVisitor;

    impl<'de> de::Visitor<'de> for OptionMilliSecondsTimestampVisitor {
        type Value = Option<DateTime>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a unix timestamp in milliseconds or none")
        }

        /// Deserialize a timestamp in milliseconds since the epoch
        fn visit_some<D>(self, d: D) -> Result<Self::Value, D::Error>
        where
            D: de::Deserializer<'de>,
        {
            d.deserialize_i64(MilliSecondsTimestampVisitor).map(Some)
        }

        /// Deserialize a timestamp in milliseconds since the epoch
        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        /// Deserialize a timestamp in milliseconds since the epoch
        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_derive::{Deserialize, Serialize};

    use super::ts_milliseconds_option;
    use crate::DateTime;

    #[test]
    fn test_serde_serialize() {
        let dt = DateTime::from_ymd_hms(2024, 3, 5, 14, 30, 0).unwrap();
        assert_eq!(serde_json::to_string(&dt).ok(), Some("1709649000000".to_owned()));
        let dt = DateTime::from_timestamp_millis(-1);
        assert_eq!(serde_json::to_string(&dt).ok(), Some("-1".to_owned()));

        let err = serde_json::to_string(&DateTime::default()).unwrap_err();
        assert_eq!(err.to_string(), "invalid date time cannot be serialized");
    }

    #[test]
    fn test_serde_deserialize() {
        let dt: DateTime = serde_json::from_str("1234567890123").unwrap();
        assert_eq!(dt.timestamp_millis(), Some(1_234_567_890_123));
        assert_eq!(dt.millisecond(), Some(123));

        let dt: DateTime = serde_json::from_str("-62135596800000").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (Some(1), Some(1), Some(1)));

        let dt: DateTime = serde_json::from_str("9223372036854775807").unwrap();
        assert_eq!(dt.timestamp_millis(), Some(i64::MAX));

        assert!(serde_json::from_str::<DateTime>("9223372036854775808").is_err());
        assert!(serde_json::from_str::<DateTime>("\"2024-03-05\"").is_err());
        assert!(serde_json::from_str::<DateTime>("1.5").is_err());
    }

    #[test]
    fn test_serde_option() {
        #[derive(Debug, PartialEq, Deserialize, Serialize)]
        struct Record {
            #[serde(with = "ts_milliseconds_option")]
            seen: Option<DateTime>,
        }

        let record = Record { seen: Some(DateTime::from_timestamp_millis(1_000)) };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"seen":1000}"#);
        assert_eq!(serde_json::from_str::<Record>(&json).unwrap(), record);

        let record = Record { seen: None };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"seen":null}"#);
        assert_eq!(serde_json::from_str::<Record>(&json).unwrap(), record);
    }

    // Bincode is relevant to test separately from JSON because
    // it is not self-describing.
    #[test]
    fn test_serde_bincode() {
        use bincode::{deserialize, serialize};

        let dt = DateTime::from_timestamp_millis(1_709_649_000_123);
        let encoded = serialize(&dt).unwrap();
        assert_eq!(encoded.len(), 8);
        let decoded: DateTime = deserialize(&encoded).unwrap();
        assert_eq!(decoded.timestamp_millis(), dt.timestamp_millis());
        assert_eq!(decoded, dt);
    }

    #[test]
    fn test_serde_bincode_optional() {
        use bincode::{deserialize, serialize};

        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Test {
            one: Option<i64>,
            #[serde(with = "ts_milliseconds_option")]
            two: Option<DateTime>,
        }

        let expected = Test { one: Some(1), two: Some(DateTime::from_timestamp_millis(-5)) };
        let bytes: Vec<u8> = serialize(&expected).unwrap();
        let actual = deserialize::<Test>(&(bytes)).unwrap();
        assert_eq!(expected, actual);
        assert_eq!(actual.two.and_then(|dt| dt.timestamp_millis()), Some(-5));
    }
}
