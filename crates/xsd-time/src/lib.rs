//! # xsd-time
//!
//! Lenient parsing and canonical formatting of XML Schema `xs:time` values.
//!
//! A serialization layer binding text fields to time values needs three
//! things: a parser that accepts what real-world documents actually contain,
//! a formatter whose output always passes strict schema validation, and a
//! policy for the offset when the input leaves it out. This crate provides
//! exactly those three, as synchronous, reentrant, value-level operations
//! with no shared state and no I/O beyond the default resolver's read of the
//! system clock and zone.
//!
//! ## Modules
//!
//! - [`parse`] — lenient `xs:time` text → [`OffsetTimeOfDay`]
//! - [`format`] — [`OffsetTimeOfDay`] → canonical `xs:time` text
//! - [`resolve`] — offset-resolution policies for offset-less input
//! - [`model`] — the value types exchanged with callers
//! - [`error`] — error types
//!
//! ## Example
//!
//! ```
//! use xsd_time::{parse_with, format, FixedOffsetResolver, UtcOffset};
//!
//! let resolver = FixedOffsetResolver(UtcOffset::from_minutes(120)?);
//! let value = parse_with(" 9:30:00.500 ", &resolver)?;
//! assert_eq!(format(&value), "09:30:00.5+02:00");
//! # Ok::<(), xsd_time::TimeError>(())
//! ```

pub mod error;
pub mod format;
pub mod model;
pub mod parse;
pub mod resolve;

pub use error::TimeError;
pub use format::{format, format_opt};
pub use model::{OffsetTimeOfDay, TimeOfDay, UtcOffset};
pub use parse::{parse, parse_with};
pub use resolve::{
    offset_in_zone, FixedOffsetResolver, OffsetResolver, SystemOffsetResolver, ZoneOffsetResolver,
};
