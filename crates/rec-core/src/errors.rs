//! Error types for the recurrence crates.
//!
//! Every failure the engine can report is an input-validation failure, raised
//! either when a rule is built or when a query enters the engine. Nothing is
//! retryable, and enumeration itself never fails once a rule exists.

use thiserror::Error;

/// The top-level error type used throughout the recurrence crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The frequency is not one of daily, weekly, monthly or yearly.
    #[error("invalid frequency: {0:?}")]
    InvalidFrequency(String),

    /// The interval is not a positive integer.
    #[error("invalid interval {0}: must be a positive integer")]
    InvalidInterval(i64),

    /// The start instant is not a valid calendar instant.
    #[error("invalid start: {0}")]
    InvalidStart(String),

    /// The until instant is not a valid calendar instant.
    #[error("invalid until: {0}")]
    InvalidUntil(String),

    /// An occurrence count is not a positive integer.
    #[error("invalid count {0}: must be a positive integer")]
    InvalidCount(i64),

    /// Both or neither of `until` and `count` were given.
    #[error("exactly one of until or count must be given (until: {until}, count: {count})")]
    AmbiguousTerminator {
        /// Whether an `until` was given.
        until: bool,
        /// Whether a `count` was given.
        count: bool,
    },

    /// The start date lies after the until date.
    #[error("start {start} is after until {until}")]
    InvertedRange {
        /// The offending start date.
        start: String,
        /// The offending until date.
        until: String,
    },

    /// A query window is malformed.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Calendar arithmetic or parsing failed in the date primitive.
    #[error("date error: {0}")]
    Date(String),
}

/// Shorthand `Result` type used throughout the recurrence crates.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with `Err($err)` unless `$cond` holds.
///
/// # Example
/// ```
/// use rec_core::{ensure, errors::{Error, Result}};
/// fn positive(n: i64) -> Result<u32> {
///     ensure!(n > 0, Error::InvalidInterval(n));
///     Ok(n as u32)
/// }
/// assert!(positive(2).is_ok());
/// assert_eq!(positive(0), Err(Error::InvalidInterval(0)));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err.into());
        }
    };
}
