//! Canonical `xs:time` formatting.
//!
//! Formatting has no leniency: the output is always strictly
//! standard-conformant so that values round-trip through external schema
//! validators. Hour, minute, and second are zero-padded to two digits, the
//! fraction appears only when nonzero with trailing zeros stripped, and a
//! zero offset is written as `Z`.

use crate::model::{OffsetTimeOfDay, UtcOffset};

/// Format a value as canonical `xs:time` text.
pub fn format(value: &OffsetTimeOfDay) -> String {
    let time = value.time;
    let mut out = format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    );
    if time.nanosecond() != 0 {
        let digits = format!("{:09}", time.nanosecond());
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    match value.offset {
        UtcOffset::Utc => out.push('Z'),
        UtcOffset::Minutes(minutes) => {
            let sign = if minutes < 0 { '-' } else { '+' };
            let magnitude = minutes.unsigned_abs();
            out.push_str(&format!(
                "{sign}{:02}:{:02}",
                magnitude / 60,
                magnitude % 60
            ));
        }
    }
    out
}

/// Format an optional value, passing an absent value through unchanged.
///
/// Mirrors how a serialization layer represents an absent field: `None` in,
/// `None` out, never an error.
pub fn format_opt(value: Option<&OffsetTimeOfDay>) -> Option<String> {
    value.map(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TimeOfDay;

    fn value(h: u8, m: u8, s: u8, ns: u32, offset_minutes: i16) -> OffsetTimeOfDay {
        OffsetTimeOfDay::new(
            TimeOfDay::new(h, m, s, ns).unwrap(),
            UtcOffset::from_minutes(offset_minutes).unwrap(),
        )
    }

    #[test]
    fn pads_every_field_to_two_digits() {
        assert_eq!(format(&value(9, 5, 3, 0, 0)), "09:05:03Z");
    }

    #[test]
    fn zero_fraction_is_omitted() {
        assert_eq!(format(&value(13, 5, 0, 0, 0)), "13:05:00Z");
    }

    #[test]
    fn fraction_uses_only_significant_digits() {
        assert_eq!(format(&value(13, 5, 0, 500_000_000, 0)), "13:05:00.5Z");
        assert_eq!(format(&value(13, 5, 0, 1, 0)), "13:05:00.000000001Z");
        assert_eq!(
            format(&value(13, 5, 0, 123_456_789, 0)),
            "13:05:00.123456789Z"
        );
    }

    #[test]
    fn nonzero_offsets_are_signed_and_padded() {
        assert_eq!(format(&value(8, 0, 0, 0, 330)), "08:00:00+05:30");
        assert_eq!(format(&value(8, 0, 0, 0, -330)), "08:00:00-05:30");
        assert_eq!(format(&value(8, 0, 0, 0, -60)), "08:00:00-01:00");
    }

    #[test]
    fn absent_value_passes_through() {
        assert_eq!(format_opt(None), None);
        assert_eq!(
            format_opt(Some(&value(13, 5, 0, 0, 0))),
            Some("13:05:00Z".to_string())
        );
    }
}
