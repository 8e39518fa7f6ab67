//! `RuleSpec` — the plain-data form of a rule that hosts store and load.
//!
//! Every field is a primitive so that a persisted spec can hold anything a
//! user typed; [`RuleSpec::build`] is where it gets validated.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rec_core::errors::{Error, Result};
use rec_time::{Date, DateTime};

use crate::frequency::Frequency;
use crate::pattern::MonthlyPattern;
use crate::rule::{checked_interval, RecurrenceRule, Terminator};

/// An unvalidated rule definition.
///
/// ```
/// use rec_rule::RuleSpec;
///
/// let spec = RuleSpec {
///     frequency: "daily".into(),
///     interval: 3,
///     start: "2024-01-01T08:00".into(),
///     until: None,
///     count: Some(4),
///     by_ordinal: false,
/// };
/// let rule = spec.build().unwrap();
/// assert_eq!(rule.all().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct RuleSpec {
    /// `daily`, `weekly`, `monthly` or `yearly`, in any case.
    pub frequency: String,
    /// Frequency units between occurrences.
    #[cfg_attr(feature = "serde", serde(default = "default_interval"))]
    pub interval: i64,
    /// ISO 8601 start date or date-time.
    pub start: String,
    /// ISO 8601 inclusive end date or date-time.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub until: Option<String>,
    /// Total number of occurrences.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub count: Option<i64>,
    /// Monthly rules only: keep the origin's ordinal even when it is also the
    /// last such weekday of its month.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "is_false"))]
    pub by_ordinal: bool,
}

#[cfg(feature = "serde")]
fn default_interval() -> i64 {
    1
}

#[cfg(feature = "serde")]
fn is_false(b: &bool) -> bool {
    !*b
}

impl RuleSpec {
    /// Validate the spec and build the rule.
    ///
    /// # Errors
    /// Checked in this order: [`Error::InvalidFrequency`],
    /// [`Error::InvalidInterval`], [`Error::InvalidStart`],
    /// [`Error::InvalidUntil`], then the builder's own checks
    /// ([`Error::AmbiguousTerminator`], [`Error::InvalidCount`],
    /// [`Error::InvertedRange`]).
    pub fn build(&self) -> Result<RecurrenceRule> {
        let frequency: Frequency = self.frequency.parse()?;
        checked_interval(self.interval)?;
        let start: DateTime = self
            .start
            .parse()
            .map_err(|e: Error| Error::InvalidStart(e.to_string()))?;
        let until = self
            .until
            .as_deref()
            .map(str::parse::<DateTime>)
            .transpose()
            .map_err(|e| Error::InvalidUntil(e.to_string()))?;

        let mut builder = RecurrenceRule::builder(frequency, start)
            .interval(self.interval)
            .by_ordinal(self.by_ordinal);
        if let Some(until) = until {
            builder = builder.until(until);
        }
        if let Some(count) = self.count {
            builder = builder.count(count);
        }
        builder.build()
    }
}

impl From<&RecurrenceRule> for RuleSpec {
    /// The canonical spec that builds back into an identical rule.
    fn from(rule: &RecurrenceRule) -> Self {
        let (until, count) = match rule.terminator() {
            Terminator::Until(until) => (Some(until.to_string()), None),
            Terminator::Count(n) => (None, Some(i64::from(n))),
        };
        let origin: Date = rule.origin();
        let by_ordinal = rule.monthly_anchor().map_or(false, |a| {
            a.pattern() == MonthlyPattern::NthWeekday && origin.is_last_weekday_of_month()
        });
        Self {
            frequency: rule.frequency().to_string().to_lowercase(),
            interval: i64::from(rule.interval()),
            start: DateTime::new(origin, rule.time_of_day()).to_string(),
            until,
            count,
            by_ordinal,
        }
    }
}
