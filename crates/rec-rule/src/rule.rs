//! `RecurrenceRule` and its builder.
//!
//! A rule is validated once, by [`RuleBuilder::build`], and is read-only from
//! then on. It is `Copy`, and every query derives a fresh sequence from it.

use rec_core::ensure;
use rec_core::errors::{Error, Result};
use rec_time::{Date, DateTime, TimeOfDay};

use crate::enumerate;
use crate::frequency::Frequency;
use crate::pattern::MonthlyAnchor;
use crate::window::Window;

/// How a rule ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminator {
    /// Inclusive end, normalized to the last second of its day.
    Until(DateTime),
    /// Total number of occurrences.
    Count(u32),
}

/// Frequency with the data each arm needs to step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Cadence {
    Daily,
    Weekly,
    Monthly(MonthlyAnchor),
    Yearly,
}

/// A validated, immutable recurrence rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecurrenceRule {
    pub(crate) cadence: Cadence,
    pub(crate) interval: u32,
    pub(crate) origin: Date,
    pub(crate) time_of_day: TimeOfDay,
    pub(crate) terminator: Terminator,
}

impl RecurrenceRule {
    /// Begin building a rule that starts at `start`.
    pub fn builder(frequency: Frequency, start: DateTime) -> RuleBuilder {
        RuleBuilder::new(frequency, start)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The rule's frequency.
    pub fn frequency(&self) -> Frequency {
        match self.cadence {
            Cadence::Daily => Frequency::Daily,
            Cadence::Weekly => Frequency::Weekly,
            Cadence::Monthly(_) => Frequency::Monthly,
            Cadence::Yearly => Frequency::Yearly,
        }
    }

    /// Frequency units between occurrences.
    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// The time-stripped start date.
    pub fn origin(&self) -> Date {
        self.origin
    }

    /// The wall-clock time every occurrence carries.
    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }

    /// How the rule ends.
    pub fn terminator(&self) -> Terminator {
        self.terminator
    }

    /// The monthly anchor, for monthly rules only.
    pub fn monthly_anchor(&self) -> Option<MonthlyAnchor> {
        match self.cadence {
            Cadence::Monthly(anchor) => Some(anchor),
            _ => None,
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    /// Every occurrence of the rule, in ascending order.
    ///
    /// The sequence is finite but not capped: a rule running until the year
    /// 9999 yields every occurrence until then.
    #[tracing::instrument(level = "trace", skip(self), fields(rule = %self))]
    pub fn all(&self) -> Vec<DateTime> {
        let dates = match self.terminator {
            Terminator::Count(n) => enumerate::by_count(self, n),
            Terminator::Until(until) => {
                enumerate::in_window(self, &Window::spanning(self.origin, until.date()))
            }
        };
        self.stamp(dates)
    }

    /// The first `n` occurrences, starting at the origin, in ascending order.
    ///
    /// The rule's own terminator is not consulted.
    ///
    /// # Errors
    /// [`Error::InvalidCount`] unless `n` is a positive integer.
    #[tracing::instrument(level = "trace", skip(self), fields(rule = %self))]
    pub fn by_count(&self, n: i64) -> Result<Vec<DateTime>> {
        let n = checked_count(n)?;
        Ok(self.stamp(enumerate::by_count(self, n)))
    }

    /// The occurrences falling on the days from `start` to `end`, inclusive.
    ///
    /// Only the dates of `start` and `end` matter; their times are ignored.
    /// An empty intersection is not an error.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] if `start` falls on a later day than `end`.
    #[tracing::instrument(level = "trace", skip(self), fields(rule = %self))]
    pub fn between(&self, start: DateTime, end: DateTime) -> Result<Vec<DateTime>> {
        let window = Window::new(start.date(), end.date())?;
        Ok(self.occurrences_in(&window))
    }

    /// The occurrences falling within `window`.
    pub fn occurrences_in(&self, window: &Window) -> Vec<DateTime> {
        self.stamp(enumerate::in_window(self, window))
    }

    /// Whether the rule occurs on `date`.
    pub fn is_occurrence(&self, date: Date) -> bool {
        !enumerate::in_window(self, &Window::spanning(date, date)).is_empty()
    }

    /// Reapply the rule's time of day to generated dates.
    fn stamp(&self, dates: Vec<Date>) -> Vec<DateTime> {
        dates
            .into_iter()
            .map(|d| DateTime::new(d, self.time_of_day))
            .collect()
    }
}

/// RFC 5545 style `RRULE` body, e.g. `FREQ=MONTHLY;INTERVAL=1;BYDAY=-1FR;COUNT=6`.
impl std::fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FREQ={};INTERVAL={}", self.frequency(), self.interval)?;
        if let Cadence::Monthly(anchor) = self.cadence {
            write!(f, ";BYDAY={}", anchor.by_day())?;
        }
        match self.terminator {
            Terminator::Count(n) => write!(f, ";COUNT={n}"),
            Terminator::Until(until) => {
                let (y, m, d) = until.date().ymd();
                let t = until.time();
                write!(
                    f,
                    ";UNTIL={y:04}{m:02}{d:02}T{:02}{:02}{:02}",
                    t.hour(),
                    t.minute(),
                    t.second()
                )
            }
        }
    }
}

/// Builder for [`RecurrenceRule`].
///
/// Exactly one of [`until`](Self::until) and [`count`](Self::count) must be
/// set before [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct RuleBuilder {
    frequency: Frequency,
    start: DateTime,
    interval: i64,
    until: Option<DateTime>,
    count: Option<i64>,
    by_ordinal: bool,
}

impl RuleBuilder {
    /// Begin building a rule with interval 1.
    pub fn new(frequency: Frequency, start: DateTime) -> Self {
        Self {
            frequency,
            start,
            interval: 1,
            until: None,
            count: None,
            by_ordinal: false,
        }
    }

    /// Set the number of frequency units between occurrences.
    pub fn interval(mut self, interval: i64) -> Self {
        self.interval = interval;
        self
    }

    /// End the rule on the day of `until`, inclusive.
    pub fn until(mut self, until: DateTime) -> Self {
        self.until = Some(until);
        self
    }

    /// End the rule after `count` occurrences.
    pub fn count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    /// For monthly rules, anchor on the origin's ordinal ("5th Monday") even
    /// when the origin is also the last such weekday of its month. Months
    /// without that ordinal are then skipped instead of resolving to the last
    /// weekday. Ignored by the other frequencies.
    pub fn by_ordinal(mut self, flag: bool) -> Self {
        self.by_ordinal = flag;
        self
    }

    /// Validate and build the rule.
    ///
    /// # Errors
    /// Checked in this order: [`Error::InvalidInterval`],
    /// [`Error::AmbiguousTerminator`], [`Error::InvalidCount`],
    /// [`Error::InvertedRange`].
    pub fn build(self) -> Result<RecurrenceRule> {
        let interval = checked_interval(self.interval)?;
        let origin = self.start.date();

        let terminator = match (self.until, self.count) {
            (Some(until), None) => {
                ensure!(
                    origin <= until.date(),
                    Error::InvertedRange {
                        start: origin.to_string(),
                        until: until.date().to_string(),
                    }
                );
                Terminator::Until(until.end_of_day())
            }
            (None, Some(count)) => Terminator::Count(checked_count(count)?),
            (until, count) => {
                return Err(Error::AmbiguousTerminator {
                    until: until.is_some(),
                    count: count.is_some(),
                })
            }
        };

        let cadence = match self.frequency {
            Frequency::Daily => Cadence::Daily,
            Frequency::Weekly => Cadence::Weekly,
            Frequency::Monthly if self.by_ordinal => Cadence::Monthly(MonthlyAnchor::by_ordinal(origin)),
            Frequency::Monthly => Cadence::Monthly(MonthlyAnchor::from_origin(origin)),
            Frequency::Yearly => Cadence::Yearly,
        };

        let rule = RecurrenceRule {
            cadence,
            interval,
            origin,
            time_of_day: self.start.time(),
            terminator,
        };
        tracing::debug!(
            %origin,
            time_of_day = %rule.time_of_day,
            pattern = ?rule.monthly_anchor().map(|a| a.pattern()),
            "built recurrence rule {rule}"
        );
        Ok(rule)
    }
}

/// Validate an interval.
pub(crate) fn checked_interval(interval: i64) -> Result<u32> {
    ensure!(interval >= 1, Error::InvalidInterval(interval));
    u32::try_from(interval).map_err(|_| Error::InvalidInterval(interval))
}

/// Validate an occurrence count.
pub(crate) fn checked_count(count: i64) -> Result<u32> {
    ensure!(count >= 1, Error::InvalidCount(count));
    u32::try_from(count).map_err(|_| Error::InvalidCount(count))
}
