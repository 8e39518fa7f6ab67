//! Monthly weekday patterns.
//!
//! A monthly rule never repeats a day-of-month. It repeats "the 2nd Tuesday"
//! or "the last Friday" of every interval month, where both the weekday and
//! the ordinal are read off the origin once, when the rule is built.

use rec_time::{Date, Weekday, YearMonth};

/// Which weekday of the month a monthly rule lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthlyPattern {
    /// The Nth occurrence of the weekday; months without one are skipped.
    NthWeekday,
    /// The last occurrence of the weekday, which every month has.
    LastWeekday,
}

/// The weekday, ordinal and pattern a monthly rule resolves every month with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthlyAnchor {
    weekday: Weekday,
    week_of_month: u8,
    pattern: MonthlyPattern,
}

impl MonthlyAnchor {
    /// Classify `origin`.
    ///
    /// An origin whose weekday does not come round again in the same month is
    /// a [`LastWeekday`](MonthlyPattern::LastWeekday) anchor; anything else is
    /// an [`NthWeekday`](MonthlyPattern::NthWeekday) anchor.
    pub fn from_origin(origin: Date) -> Self {
        let pattern = if origin.is_last_weekday_of_month() {
            MonthlyPattern::LastWeekday
        } else {
            MonthlyPattern::NthWeekday
        };
        Self {
            weekday: origin.weekday(),
            week_of_month: origin.week_of_month(),
            pattern,
        }
    }

    /// Classify `origin` by its ordinal alone, even when it is also the last
    /// such weekday of its month.
    pub fn by_ordinal(origin: Date) -> Self {
        Self {
            pattern: MonthlyPattern::NthWeekday,
            ..Self::from_origin(origin)
        }
    }

    /// The anchored weekday.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// The 1-based ordinal of the weekday within the origin's month.
    pub fn week_of_month(&self) -> u8 {
        self.week_of_month
    }

    /// The pattern fixed at construction.
    pub fn pattern(&self) -> MonthlyPattern {
        self.pattern
    }

    /// The anchored date within `month`, or `None` if it has none.
    pub fn resolve(&self, month: YearMonth) -> Option<Date> {
        match self.pattern {
            MonthlyPattern::NthWeekday => Date::nth_weekday(self.week_of_month, self.weekday, month),
            MonthlyPattern::LastWeekday => Some(Date::last_weekday(self.weekday, month)),
        }
    }

    /// RFC 5545 `BYDAY` value, e.g. `2TU` or `-1FR`.
    pub(crate) fn by_day(&self) -> String {
        match self.pattern {
            MonthlyPattern::NthWeekday => format!("{}{}", self.week_of_month, self.weekday.code()),
            MonthlyPattern::LastWeekday => format!("-1{}", self.weekday.code()),
        }
    }
}
