//! Lenient `xs:time` parsing.
//!
//! The grammar is the XML Schema `time` lexical form:
//!
//! ```text
//! time     := hh ':' mm ':' ss [fraction] [offset]
//! fraction := '.' 1*digit
//! offset   := 'Z' | ('+'|'-') hh ':' mm
//! ```
//!
//! Three documented deviations from the strict grammar are accepted, and no
//! others:
//!
//! - surrounding whitespace is trimmed before parsing;
//! - a single-digit hour is accepted (`"9:00:00"` as well as `"09:00:00"`);
//! - lowercase `z` is accepted as the UTC designator.
//!
//! Two further behaviors extend the value space rather than the syntax:
//! hour `24` is accepted as exactly `24:00:00` (midnight at the end of the
//! day, normalized to `00:00:00`), and fractional-second digits beyond the
//! ninth are discarded without rounding.
//!
//! When the input carries no offset, the supplied [`OffsetResolver`] is
//! invoked exactly once with the parsed [`TimeOfDay`]; its failure fails the
//! whole parse. Input is never silently defaulted to UTC.

use crate::error::{Result, TimeError};
use crate::model::{OffsetTimeOfDay, TimeOfDay, UtcOffset, MAX_OFFSET_MINUTES};
use crate::resolve::{OffsetResolver, SystemOffsetResolver};

/// Parse an `xs:time` string, resolving a missing offset with
/// [`SystemOffsetResolver`].
///
/// # Errors
///
/// Returns [`TimeError`] on empty input, malformed or out-of-range fields,
/// trailing characters, or resolver failure.
pub fn parse(input: &str) -> Result<OffsetTimeOfDay> {
    parse_with(input, &SystemOffsetResolver)
}

/// Parse an `xs:time` string, resolving a missing offset with `resolver`.
///
/// The resolver is consulted only when the input has no offset designator,
/// and then exactly once.
pub fn parse_with<R>(input: &str, resolver: &R) -> Result<OffsetTimeOfDay>
where
    R: OffsetResolver + ?Sized,
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeError::EmptyInput);
    }
    let bytes = trimmed.as_bytes();
    let mut pos = 0usize;

    let hour = parse_hour(bytes, &mut pos)?;
    expect_colon(bytes, &mut pos, "minute")?;
    let minute = parse_ranged(bytes, &mut pos, "minute", 59)?;
    expect_colon(bytes, &mut pos, "second")?;
    let second = parse_ranged(bytes, &mut pos, "second", 59)?;
    let nanosecond = parse_fraction(bytes, &mut pos)?;
    let offset = parse_offset(bytes, &mut pos)?;

    if pos != bytes.len() {
        return Err(TimeError::TrailingInput {
            position: pos,
            rest: snippet(bytes, pos),
        });
    }

    // 24:00:00 is midnight at the end of the day; any other use of hour 24
    // is a semantic violation, not a lexical one.
    let hour = if hour == 24 {
        if minute != 0 || second != 0 || nanosecond != 0 {
            return Err(TimeError::EndOfDay);
        }
        0
    } else {
        hour
    };

    let time = TimeOfDay::new(hour as u8, minute as u8, second as u8, nanosecond)?;
    let offset = match offset {
        Some(offset) => offset,
        None => resolver.resolve(&time)?,
    };
    Ok(OffsetTimeOfDay::new(time, offset))
}

/// Hour field: one or two digits (the single-digit form is a documented
/// leniency), value `00`..=`24`.
fn parse_hour(bytes: &[u8], pos: &mut usize) -> Result<u32> {
    let start = *pos;
    let mut value = 0u32;
    let mut len = 0usize;
    while len < 2 {
        match bytes.get(*pos) {
            Some(b) if b.is_ascii_digit() => {
                value = value * 10 + u32::from(b - b'0');
                len += 1;
                *pos += 1;
            }
            _ => break,
        }
    }
    if len == 0 || value > 24 {
        return Err(TimeError::InvalidField {
            field: "hour",
            position: start,
            value: snippet(bytes, start),
        });
    }
    Ok(value)
}

/// Exactly two digits with an inclusive upper bound.
fn parse_ranged(bytes: &[u8], pos: &mut usize, field: &'static str, max: u32) -> Result<u32> {
    let start = *pos;
    let value = two_digits(bytes, pos).ok_or_else(|| TimeError::InvalidField {
        field,
        position: start,
        value: snippet(bytes, start),
    })?;
    if value > max {
        return Err(TimeError::InvalidField {
            field,
            position: start,
            value: snippet(bytes, start),
        });
    }
    Ok(value)
}

/// Optional fractional seconds: `'.'` followed by at least one digit.
/// Digits beyond the ninth are discarded, not rounded.
fn parse_fraction(bytes: &[u8], pos: &mut usize) -> Result<u32> {
    if bytes.get(*pos) != Some(&b'.') {
        return Ok(0);
    }
    *pos += 1;
    let start = *pos;
    let mut nanos = 0u32;
    let mut seen = 0usize;
    while let Some(b) = bytes.get(*pos) {
        if !b.is_ascii_digit() {
            break;
        }
        if seen < 9 {
            nanos = nanos * 10 + u32::from(b - b'0');
        }
        seen += 1;
        *pos += 1;
    }
    if seen == 0 {
        return Err(TimeError::InvalidField {
            field: "fraction",
            position: start,
            value: snippet(bytes, start),
        });
    }
    if seen < 9 {
        nanos *= 10u32.pow((9 - seen) as u32);
    }
    Ok(nanos)
}

/// Optional offset designator: `Z`/`z` or `±hh:mm` within ±18:00.
fn parse_offset(bytes: &[u8], pos: &mut usize) -> Result<Option<UtcOffset>> {
    let sign = match bytes.get(*pos) {
        Some(b'Z') | Some(b'z') => {
            *pos += 1;
            return Ok(Some(UtcOffset::Utc));
        }
        Some(b'+') => 1i16,
        Some(b'-') => -1i16,
        _ => return Ok(None),
    };
    *pos += 1;
    let hours = parse_ranged(bytes, pos, "offset hour", 18)?;
    expect_colon(bytes, pos, "offset minute")?;
    let minutes = parse_ranged(bytes, pos, "offset minute", 59)?;
    let total = (hours * 60 + minutes) as i16;
    if total > MAX_OFFSET_MINUTES {
        return Err(TimeError::OffsetOutOfRange(format!(
            "{}{hours:02}:{minutes:02}",
            if sign < 0 { '-' } else { '+' }
        )));
    }
    Ok(Some(UtcOffset::from_minutes(sign * total)?))
}

fn two_digits(bytes: &[u8], pos: &mut usize) -> Option<u32> {
    let pair = bytes.get(*pos..*pos + 2)?;
    if !pair.iter().all(u8::is_ascii_digit) {
        return None;
    }
    *pos += 2;
    Some(u32::from(pair[0] - b'0') * 10 + u32::from(pair[1] - b'0'))
}

/// `field` names the component the separator introduces, so the error points
/// at what the parser was looking for.
fn expect_colon(bytes: &[u8], pos: &mut usize, field: &'static str) -> Result<()> {
    if bytes.get(*pos) == Some(&b':') {
        *pos += 1;
        Ok(())
    } else {
        Err(TimeError::InvalidField {
            field,
            position: *pos,
            value: snippet(bytes, *pos),
        })
    }
}

/// A short slice of the input starting at `position`, for error messages.
fn snippet(bytes: &[u8], position: usize) -> String {
    let rest = &bytes[position.min(bytes.len())..];
    String::from_utf8_lossy(&rest[..rest.len().min(8)]).into_owned()
}
