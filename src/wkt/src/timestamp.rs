// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Well-known point in time representation for Google APIs.
///
/// A Timestamp represents a point in time independent of any time zone or
/// local calendar, encoded as a count of seconds and fractions of seconds at
/// nanosecond resolution, relative to the Unix epoch.
///
/// The range is from 0001-01-01T00:00:00Z to 9999-12-31T23:59:59.999999999Z,
/// which guarantees conversions to and from [RFC 3339] strings.
///
/// # JSON Mapping
///
/// In JSON format the Timestamp type is encoded as an [RFC 3339] string, e.g.
/// `"2017-01-15T01:30:15.01Z"`.
///
/// # Examples
/// ```
/// # use memcache_wkt::{Timestamp, TimestampError};
/// let ts = Timestamp::try_from("2025-05-16T09:46:12.500Z")?;
/// assert_eq!(ts.seconds(), 1747388772);
/// assert_eq!(ts.nanos(), 500_000_000);
/// assert_eq!(ts, Timestamp::new(1747388772, 500_000_000)?);
/// # Ok::<(), TimestampError>(())
/// ```
///
/// [RFC 3339]: https://www.ietf.org/rfc/rfc3339.txt
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[non_exhaustive]
pub struct Timestamp {
    seconds: i64,
    nanos: i32,
}

/// Represent failures in converting or creating [Timestamp] instances.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum TimestampError {
    /// One of the components (seconds and/or nanoseconds) was out of range.
    #[error("seconds and/or nanoseconds out of range")]
    OutOfRange,

    /// There was a problem parsing or formatting a timestamp.
    #[error("cannot convert timestamp, source={0}")]
    Format(#[source] BoxedError),
}

type BoxedError = Box<dyn std::error::Error + Send + Sync>;
type Error = TimestampError;

impl Timestamp {
    const NS: i32 = 1_000_000_000;

    /// The minimum value for the `seconds` component. Corresponds to '0001-01-01T00:00:00Z'.
    pub const MIN_SECONDS: i64 = -62135596800;

    /// The maximum value for the `seconds` component. Corresponds to '9999-12-31T23:59:59Z'.
    pub const MAX_SECONDS: i64 = 253402300799;

    /// Creates a new [Timestamp], validating both components.
    pub fn new(seconds: i64, nanos: i32) -> Result<Self, Error> {
        if !(Self::MIN_SECONDS..=Self::MAX_SECONDS).contains(&seconds) {
            return Err(Error::OutOfRange);
        }
        if !(0..Self::NS).contains(&nanos) {
            return Err(Error::OutOfRange);
        }
        Ok(Self { seconds, nanos })
    }

    /// Creates a new [Timestamp], clamping both components to the valid range.
    pub fn clamp(seconds: i64, nanos: i32) -> Self {
        Self {
            seconds: seconds.clamp(Self::MIN_SECONDS, Self::MAX_SECONDS),
            nanos: nanos.clamp(0, Self::NS - 1),
        }
    }

    /// Seconds since the Unix epoch.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Non-negative fractions of a second at nanosecond resolution.
    pub fn nanos(&self) -> i32 {
        self.nanos
    }
}

impl crate::message::Message for Timestamp {
    fn typename() -> &'static str {
        "type.googleapis.com/google.protobuf.Timestamp"
    }
}

impl TryFrom<&str> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        use time::format_description::well_known::Rfc3339;
        let odt = time::OffsetDateTime::parse(value, &Rfc3339)
            .map_err(|e| Error::Format(e.into()))?;
        Self::new(odt.unix_timestamp(), odt.nanosecond() as i32)
    }
}

impl TryFrom<Timestamp> for String {
    type Error = TimestampError;

    fn try_from(value: Timestamp) -> Result<Self, Self::Error> {
        use time::format_description::well_known::Rfc3339;
        let nanos = value.seconds as i128 * Timestamp::NS as i128 + value.nanos as i128;
        time::OffsetDateTime::from_unix_timestamp_nanos(nanos)
            .map_err(|e| Error::Format(e.into()))?
            .format(&Rfc3339)
            .map_err(|e| Error::Format(e.into()))
    }
}

impl serde::ser::Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::Error as _;
        let formatted = String::try_from(*self).map_err(S::Error::custom)?;
        formatted.serialize(serializer)
    }
}

impl<'de> serde::de::Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;
        let value = String::deserialize(deserializer)?;
        Timestamp::try_from(value.as_str()).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(0, 0, "1970-01-01T00:00:00Z")]
    #[test_case(1747388772, 0, "2025-05-16T09:46:12Z")]
    #[test_case(1747388772, 500_000_000, "2025-05-16T09:46:12.5Z")]
    #[test_case(Timestamp::MIN_SECONDS, 0, "0001-01-01T00:00:00Z")]
    #[test_case(Timestamp::MAX_SECONDS, 0, "9999-12-31T23:59:59Z")]
    fn json(seconds: i64, nanos: i32, want: &str) -> anyhow::Result<()> {
        let ts = Timestamp::new(seconds, nanos)?;
        let got = serde_json::to_value(ts)?;
        assert_eq!(got, json!(want));
        let back = serde_json::from_value::<Timestamp>(got)?;
        assert_eq!(back, ts);
        Ok(())
    }

    #[test_case(Timestamp::MAX_SECONDS + 1, 0)]
    #[test_case(Timestamp::MIN_SECONDS - 1, 0)]
    #[test_case(0, -1)]
    #[test_case(0, 1_000_000_000)]
    fn out_of_range(seconds: i64, nanos: i32) {
        let got = Timestamp::new(seconds, nanos);
        assert!(matches!(got, Err(TimestampError::OutOfRange)), "{got:?}");
    }

    #[test]
    fn clamp() {
        let ts = Timestamp::clamp(i64::MAX, i32::MAX);
        assert_eq!(ts.seconds(), Timestamp::MAX_SECONDS);
        assert_eq!(ts.nanos(), 999_999_999);
    }

    #[test]
    fn parse_error() {
        let got = Timestamp::try_from("not a timestamp");
        assert!(matches!(got, Err(TimestampError::Format(_))), "{got:?}");
        let got = serde_json::from_value::<Timestamp>(json!("2025-13-01T00:00:00Z"));
        assert!(got.is_err(), "{got:?}");
    }
}
