//! Count-bounded and window-bounded enumeration.
//!
//! Both produce time-stripped dates; the rule reapplies its time of day.

use rec_time::Date;

use crate::rule::{RecurrenceRule, Terminator};
use crate::window::Window;

/// The first `n` occurrences from the origin.
///
/// Months without the anchored weekday and non-leap years of a Feb 29 origin
/// do not use up a slot. Fewer than `n` dates come back only if the walk
/// reaches the end of the calendar.
pub(crate) fn by_count(rule: &RecurrenceRule, n: u32) -> Vec<Date> {
    let dates: Vec<Date> = rule.walk(0).take(n as usize).collect();
    if dates.len() < n as usize {
        tracing::warn!(
            requested = n,
            produced = dates.len(),
            "calendar ends before the requested occurrence count"
        );
    }
    dates
}

/// The occurrences within `window`, clipped to the rule's own lifespan.
pub(crate) fn in_window(rule: &RecurrenceRule, window: &Window) -> Vec<Date> {
    let lo = window.start().max(rule.origin);
    let hi = match rule.terminator {
        Terminator::Until(until) => window.end().min(until.date()),
        Terminator::Count(_) => window.end(),
    };
    if lo > hi {
        tracing::trace!(%lo, %hi, "window lies outside the rule");
        return Vec::new();
    }

    let dates: Vec<Date> = match rule.terminator {
        Terminator::Until(_) => {
            // Jump straight to the interval steps covering `lo` and `hi`; the
            // end steps may still resolve outside them within the same unit.
            let (first, last) = (rule.step_index(lo), rule.step_index(hi));
            tracing::trace!(first, last, "fast-forward");
            rule.walk_steps(first, last)
                .filter(|d| (lo..=hi).contains(d))
                .collect()
        }
        // Counted rules must agree exactly with `by_count`, whose slots depend
        // on every miss since the origin, so walk from the start.
        Terminator::Count(n) => rule
            .walk(0)
            .take(n as usize)
            .skip_while(|d| *d < lo)
            .take_while(|d| *d <= hi)
            .collect(),
    };
    tracing::trace!(count = dates.len(), "enumerated window");
    dates
}
