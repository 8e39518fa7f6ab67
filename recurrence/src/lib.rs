//! # recurrence
//!
//! Recurrence rules for calendar events: "every 3 days", "every other week",
//! "the last Friday of every month", "every year on the 29th of February".
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `rec-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! recurrence = "0.1"
//! ```
//!
//! ```rust
//! use recurrence::{Frequency, RecurrenceRule};
//!
//! let start = "2024-01-26T17:00".parse().unwrap();
//! let rule = RecurrenceRule::builder(Frequency::Monthly, start)
//!     .count(3)
//!     .build()
//!     .unwrap();
//! let dates: Vec<String> = rule.all().iter().map(|o| o.to_string()).collect();
//! assert_eq!(
//!     dates,
//!     ["2024-01-26T17:00:00", "2024-02-23T17:00:00", "2024-03-29T17:00:00"]
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and result alias.
pub use rec_core as core;

/// Dates, times of day, months and weekdays.
pub use rec_time as time;

/// Rules, their builders and occurrence queries.
pub use rec_rule as rule;

pub use rec_core::{Error, Result};
pub use rec_rule::{
    Frequency, MonthlyAnchor, MonthlyPattern, RecurrenceRule, RuleBuilder, RuleSpec, Terminator,
    Window,
};
pub use rec_time::{Date, DateTime, TimeOfDay, Weekday};
