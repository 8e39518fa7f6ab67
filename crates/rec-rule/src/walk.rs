//! Interval stepping shared by the enumerators.
//!
//! Step `k` of a rule is the `k * interval`-th frequency unit after the
//! origin. Each step either lands on a date, misses (the month has no such
//! weekday, or the year has no Feb 29), or runs off the end of the calendar.

use rec_time::{is_leap_year, Date};

use crate::rule::{Cadence, RecurrenceRule};

/// The outcome of one interval step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    Hit(Date),
    Miss,
    Exhausted,
}

impl RecurrenceRule {
    /// Resolve step `k`.
    pub(crate) fn slot(&self, k: i64) -> Slot {
        let Some(offset) = k.checked_mul(self.interval as i64) else {
            return Slot::Exhausted;
        };
        let hit = |d: Option<Date>| d.map_or(Slot::Exhausted, Slot::Hit);
        match self.cadence {
            Cadence::Daily => hit(self.origin.add_days(offset).ok()),
            Cadence::Weekly => hit(
                offset
                    .checked_mul(7)
                    .and_then(|days| self.origin.add_days(days).ok()),
            ),
            Cadence::Monthly(anchor) => match self.origin.year_month().plus_months(offset) {
                Some(month) => anchor.resolve(month).map_or(Slot::Miss, Slot::Hit),
                None => Slot::Exhausted,
            },
            Cadence::Yearly => {
                let (y, m, d) = self.origin.ymd();
                let year = match offset.checked_add(y as i64) {
                    Some(year) if year <= Date::MAX_YEAR as i64 => year as u16,
                    _ => return Slot::Exhausted,
                };
                if m == 2 && d == 29 && !is_leap_year(year) {
                    return Slot::Miss;
                }
                Date::from_ymd(year, m, d).map_or(Slot::Miss, Slot::Hit)
            }
        }
    }

    /// The last step whose frequency unit starts on or before `date`.
    ///
    /// Negative for dates before the origin. Whole-unit arithmetic only, so
    /// the step may still resolve to a date before `date` (same month, same
    /// year), and callers must filter.
    pub(crate) fn step_index(&self, date: Date) -> i64 {
        let interval = self.interval as i64;
        let elapsed = match self.cadence {
            Cadence::Daily => date - self.origin,
            Cadence::Weekly => (date - self.origin).div_euclid(7),
            Cadence::Monthly(_) => date.year_month().months_since(self.origin.year_month()),
            Cadence::Yearly => date.year() as i64 - self.origin.year() as i64,
        };
        elapsed.div_euclid(interval)
    }

    /// Occurrences from step `first` onward, skipping misses.
    pub(crate) fn walk(&self, first: i64) -> Walk<'_> {
        self.walk_steps(first, i64::MAX)
    }

    /// Occurrences of steps `first..=last`, skipping misses.
    pub(crate) fn walk_steps(&self, first: i64, last: i64) -> Walk<'_> {
        Walk {
            rule: self,
            next: first,
            last,
            done: false,
        }
    }
}

/// Ascending occurrence dates, produced one interval step at a time.
#[derive(Debug)]
pub(crate) struct Walk<'a> {
    rule: &'a RecurrenceRule,
    next: i64,
    last: i64,
    done: bool,
}

impl Iterator for Walk<'_> {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        while !self.done && self.next <= self.last {
            let k = self.next;
            self.next += 1;
            match self.rule.slot(k) {
                Slot::Hit(date) => return Some(date),
                Slot::Miss => {}
                Slot::Exhausted => self.done = true,
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Walk<'_> {}
