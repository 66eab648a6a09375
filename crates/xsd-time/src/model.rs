//! Value types exchanged with callers.
//!
//! All types here are plain immutable values: constructed through validating
//! constructors, compared by value, and safe to copy and share across threads.
//! [`OffsetTimeOfDay`] is the unit a serialization layer binds to a text field;
//! [`TimeOfDay`] and [`UtcOffset`] are its two halves.

use std::fmt;
use std::str::FromStr;

use chrono::{FixedOffset, NaiveTime};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, TimeError};
use crate::{format, parse};

/// Maximum real-world UTC offset magnitude, in minutes (±18:00).
pub const MAX_OFFSET_MINUTES: i16 = 18 * 60;

/// A wall-clock time of day with nanosecond precision and no offset.
///
/// The fractional-second component holds at most 9 significant digits;
/// anything finer is discarded by the parser before construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
    nanosecond: u32,
}

impl TimeOfDay {
    /// Create a time of day, validating every component range.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::ComponentOutOfRange`] if hour > 23, minute > 59,
    /// second > 59, or nanosecond > 999_999_999.
    pub fn new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Result<Self> {
        if hour > 23 {
            return Err(TimeError::ComponentOutOfRange(format!("hour {hour}")));
        }
        if minute > 59 {
            return Err(TimeError::ComponentOutOfRange(format!("minute {minute}")));
        }
        if second > 59 {
            return Err(TimeError::ComponentOutOfRange(format!("second {second}")));
        }
        if nanosecond > 999_999_999 {
            return Err(TimeError::ComponentOutOfRange(format!(
                "nanosecond {nanosecond}"
            )));
        }
        Ok(Self {
            hour,
            minute,
            second,
            nanosecond,
        })
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    pub fn second(self) -> u8 {
        self.second
    }

    pub fn nanosecond(self) -> u32 {
        self.nanosecond
    }

    /// Convert to a `chrono::NaiveTime` carrying the same wall-clock value.
    pub fn to_naive_time(self) -> NaiveTime {
        // Component ranges are enforced at construction, so this cannot fail.
        NaiveTime::from_hms_nano_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second),
            self.nanosecond,
        )
        .unwrap_or(NaiveTime::MIN)
    }
}

/// A signed UTC offset with minute granularity, or the UTC sentinel.
///
/// `Utc` and a zero-minute offset are the same instant-in-time semantics, so
/// [`UtcOffset::from_minutes`] normalizes zero to `Utc`. This keeps the
/// canonical text form (`Z`, never `+00:00`) round-trip stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UtcOffset {
    /// Zero offset, written as `Z`.
    Utc,
    /// Nonzero offset in whole minutes east of UTC, within ±18:00.
    Minutes(i16),
}

impl UtcOffset {
    /// Create an offset from a signed minute count. Zero becomes [`UtcOffset::Utc`].
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::OffsetOutOfRange`] if `minutes` exceeds ±18:00.
    pub fn from_minutes(minutes: i16) -> Result<Self> {
        if minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(TimeError::OffsetOutOfRange(format!("{minutes} minutes")));
        }
        if minutes == 0 {
            Ok(Self::Utc)
        } else {
            Ok(Self::Minutes(minutes))
        }
    }

    /// Create an offset from a `chrono::FixedOffset`.
    ///
    /// Zone rules can yield historical offsets with a seconds component
    /// (pre-standardization local mean time); those seconds are truncated
    /// toward zero to fit the minute granularity of `xs:time`.
    pub fn from_fixed_offset(offset: FixedOffset) -> Result<Self> {
        let minutes = offset.local_minus_utc() / 60;
        let minutes = i16::try_from(minutes)
            .map_err(|_| TimeError::OffsetOutOfRange(format!("{minutes} minutes")))?;
        Self::from_minutes(minutes)
    }

    /// Total signed minutes east of UTC (zero for [`UtcOffset::Utc`]).
    pub fn total_minutes(self) -> i16 {
        match self {
            Self::Utc => 0,
            Self::Minutes(m) => m,
        }
    }

    pub fn is_utc(self) -> bool {
        matches!(self, Self::Utc)
    }
}

/// A [`TimeOfDay`] paired with a [`UtcOffset`] — the unit exchanged with callers.
///
/// Both halves are validated values, so an `OffsetTimeOfDay` is never partially
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetTimeOfDay {
    pub time: TimeOfDay,
    pub offset: UtcOffset,
}

impl OffsetTimeOfDay {
    pub fn new(time: TimeOfDay, offset: UtcOffset) -> Self {
        Self { time, offset }
    }
}

impl fmt::Display for OffsetTimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::format(self))
    }
}

impl FromStr for OffsetTimeOfDay {
    type Err = TimeError;

    /// Lenient parse using the default system offset resolver.
    fn from_str(s: &str) -> Result<Self> {
        parse::parse(s)
    }
}

impl Serialize for OffsetTimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&format::format(self))
    }
}

impl<'de> Deserialize<'de> for OffsetTimeOfDay {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        struct TimeVisitor;

        impl Visitor<'_> for TimeVisitor {
            type Value = OffsetTimeOfDay;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an xs:time string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
                parse::parse(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(TimeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_of_day_rejects_out_of_range_components() {
        assert!(TimeOfDay::new(24, 0, 0, 0).is_err());
        assert!(TimeOfDay::new(12, 60, 0, 0).is_err());
        assert!(TimeOfDay::new(12, 0, 60, 0).is_err());
        assert!(TimeOfDay::new(12, 0, 0, 1_000_000_000).is_err());
        assert!(TimeOfDay::new(23, 59, 59, 999_999_999).is_ok());
    }

    #[test]
    fn zero_minutes_normalizes_to_utc() {
        assert_eq!(UtcOffset::from_minutes(0).unwrap(), UtcOffset::Utc);
        assert_eq!(
            UtcOffset::from_minutes(120).unwrap(),
            UtcOffset::Minutes(120)
        );
    }

    #[test]
    fn offset_range_is_plus_minus_eighteen_hours() {
        assert!(UtcOffset::from_minutes(18 * 60).is_ok());
        assert!(UtcOffset::from_minutes(-18 * 60).is_ok());
        assert!(UtcOffset::from_minutes(18 * 60 + 1).is_err());
        assert!(UtcOffset::from_minutes(-(18 * 60 + 1)).is_err());
    }

    #[test]
    fn fixed_offset_seconds_truncate_toward_zero() {
        // +00:19:32 — an LMT-style offset with a seconds component.
        let fixed = FixedOffset::east_opt(19 * 60 + 32).unwrap();
        assert_eq!(
            UtcOffset::from_fixed_offset(fixed).unwrap(),
            UtcOffset::Minutes(19)
        );
        let fixed = FixedOffset::west_opt(19 * 60 + 32).unwrap();
        assert_eq!(
            UtcOffset::from_fixed_offset(fixed).unwrap(),
            UtcOffset::Minutes(-19)
        );
    }

    #[test]
    fn serde_round_trip_through_json() {
        let value = OffsetTimeOfDay::new(
            TimeOfDay::new(13, 5, 0, 500_000_000).unwrap(),
            UtcOffset::from_minutes(-330).unwrap(),
        );
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"13:05:00.5-05:30\"");
        let back: OffsetTimeOfDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
