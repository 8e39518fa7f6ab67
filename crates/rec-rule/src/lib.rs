//! # rec-rule
//!
//! Recurrence rules and the queries over them.
//!
//! A [`RecurrenceRule`] is built once from a frequency, an interval, a start
//! instant and either an inclusive end date or an occurrence count. From then
//! on it answers three questions without changing:
//!
//! * [`all`](RecurrenceRule::all): every occurrence;
//! * [`by_count`](RecurrenceRule::by_count): the first `n` occurrences;
//! * [`between`](RecurrenceRule::between): the occurrences on a span of days,
//!   found by jumping straight to the first interval step of the span.
//!
//! ```
//! use rec_rule::{Frequency, RecurrenceRule};
//!
//! let start = "2024-01-01T09:30".parse().unwrap();
//! let rule = RecurrenceRule::builder(Frequency::Daily, start)
//!     .interval(3)
//!     .count(4)
//!     .build()
//!     .unwrap();
//! let days: Vec<String> = rule.all().iter().map(|o| o.date().to_string()).collect();
//! assert_eq!(days, ["2024-01-01", "2024-01-04", "2024-01-07", "2024-01-10"]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

mod enumerate;
mod walk;

/// `Frequency` — daily, weekly, monthly, yearly.
pub mod frequency;

/// Monthly "Nth / last weekday" anchors.
pub mod pattern;

/// `RecurrenceRule`, `RuleBuilder`, `Terminator`.
pub mod rule;

/// `RuleSpec` — the persisted, unvalidated form of a rule.
pub mod spec;

/// `Window` — a span of days to query.
pub mod window;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use frequency::Frequency;
pub use pattern::{MonthlyAnchor, MonthlyPattern};
pub use rule::{RecurrenceRule, RuleBuilder, Terminator};
pub use spec::RuleSpec;
pub use window::Window;
