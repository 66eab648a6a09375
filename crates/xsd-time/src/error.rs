//! Error types for xsd-time operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("empty input")]
    EmptyInput,

    #[error("invalid {field} at byte {position}: '{value}'")]
    InvalidField {
        field: &'static str,
        position: usize,
        value: String,
    },

    #[error("trailing characters at byte {position}: '{rest}'")]
    TrailingInput { position: usize, rest: String },

    #[error("hour 24 is only valid as exactly 24:00:00")]
    EndOfDay,

    #[error("UTC offset out of range: {0}")]
    OffsetOutOfRange(String),

    #[error("time component out of range: {0}")]
    ComponentOutOfRange(String),

    #[error("invalid timezone: {0}")]
    InvalidZone(String),

    #[error("cannot resolve UTC offset: {0}")]
    UnresolvedOffset(String),
}

pub type Result<T> = std::result::Result<T, TimeError>;
