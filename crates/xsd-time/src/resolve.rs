//! Offset-resolution policies for input that carries no UTC offset.
//!
//! `xs:time` allows the offset to be left out, so the parser needs a policy
//! for attaching one. The policy is an injected strategy, not an override
//! point: the parser depends only on the [`OffsetResolver`] trait, and a
//! resolver must either return an offset or fail the whole parse. Returning
//! a silent UTC default is not an option any resolver here takes.
//!
//! - [`SystemOffsetResolver`] — the default: today's date in the process's
//!   local zone, offset from that zone's rules.
//! - [`ZoneOffsetResolver`] — an explicit date and zone, fully deterministic.
//! - [`FixedOffsetResolver`] — always the same offset.

use chrono::{Duration, Local, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone};

use crate::error::{Result, TimeError};
use crate::model::{TimeOfDay, UtcOffset};

/// The capability the parser needs: given a local time of day with no offset
/// in the input, produce the offset to attach.
pub trait OffsetResolver {
    /// Resolve the UTC offset for `time`.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::UnresolvedOffset`] (or another [`TimeError`])
    /// when no offset can be determined; the parser propagates this as a
    /// parse failure.
    fn resolve(&self, time: &TimeOfDay) -> Result<UtcOffset>;
}

/// The default policy: combine the current local calendar date with the
/// parsed time and ask the process's local zone rules for the offset at
/// that point in time.
///
/// The clock and zone are re-read on every call, never cached — the correct
/// answer can change between calls when the process runs across a DST
/// transition.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOffsetResolver;

impl OffsetResolver for SystemOffsetResolver {
    fn resolve(&self, time: &TimeOfDay) -> Result<UtcOffset> {
        let today = Local::now().date_naive();
        offset_in_zone(&Local, today, time)
    }
}

/// A deterministic policy: a fixed calendar date and an explicit zone.
///
/// This is the injectable "clock + zone provider" form of the default
/// policy. Tests substitute it for [`SystemOffsetResolver`] to get answers
/// independent of the wall clock, and callers use it to pin resolution to a
/// zone other than the process default.
#[derive(Debug, Clone)]
pub struct ZoneOffsetResolver<Z: TimeZone> {
    zone: Z,
    date: NaiveDate,
}

impl<Z: TimeZone> ZoneOffsetResolver<Z> {
    pub fn new(zone: Z, date: NaiveDate) -> Self {
        Self { zone, date }
    }
}

impl ZoneOffsetResolver<chrono_tz::Tz> {
    /// Build a resolver for an IANA zone name.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::InvalidZone`] if `name` is not a valid IANA
    /// timezone.
    pub fn for_zone_name(name: &str, date: NaiveDate) -> Result<Self> {
        let zone = name
            .parse::<chrono_tz::Tz>()
            .map_err(|_| TimeError::InvalidZone(format!("'{name}'")))?;
        Ok(Self::new(zone, date))
    }
}

impl<Z: TimeZone> OffsetResolver for ZoneOffsetResolver<Z> {
    fn resolve(&self, time: &TimeOfDay) -> Result<UtcOffset> {
        offset_in_zone(&self.zone, self.date, time)
    }
}

/// A policy that attaches the same offset to every offset-less input.
#[derive(Debug, Clone, Copy)]
pub struct FixedOffsetResolver(pub UtcOffset);

impl OffsetResolver for FixedOffsetResolver {
    fn resolve(&self, _time: &TimeOfDay) -> Result<UtcOffset> {
        Ok(self.0)
    }
}

/// Query `zone`'s rules for the offset in effect at `date` + `time`.
///
/// During a fall-back overlap two instants share the wall-clock time; the
/// earlier instant's (pre-transition) offset is chosen so the answer is
/// deterministic. During a spring-forward gap the wall-clock time does not
/// exist; the probe moves forward in one-hour steps (transitions are at most
/// a few hours wide) and the post-transition offset is used.
pub fn offset_in_zone<Z: TimeZone>(zone: &Z, date: NaiveDate, time: &TimeOfDay) -> Result<UtcOffset> {
    let local = NaiveDateTime::new(date, time.to_naive_time());
    let mut probe = local;
    for _ in 0..=3 {
        match zone.offset_from_local_datetime(&probe) {
            LocalResult::Single(offset) | LocalResult::Ambiguous(offset, _) => {
                return UtcOffset::from_fixed_offset(offset.fix());
            }
            LocalResult::None => probe += Duration::hours(1),
        }
    }
    Err(TimeError::UnresolvedOffset(format!(
        "zone rules have no offset near local time {local}"
    )))
}
