//! # rec-time
//!
//! Calendar primitives for the recurrence engine: time-stripped dates,
//! wall-clock times, month arithmetic, and the "Nth / last weekday of a
//! month" resolvers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `TimeOfDay` and `DateTime`.
pub mod datetime;

/// `Month` and `YearMonth`.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

/// Conversions to and from `chrono`.
#[cfg(feature = "chrono")]
pub mod interop;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{days_in_month, is_leap_year, Date};
pub use datetime::{DateTime, TimeOfDay};
pub use month::{Month, YearMonth};
pub use weekday::Weekday;
