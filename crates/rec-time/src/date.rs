//! `Date` type.
//!
//! Dates are stored as a serial number of days since the Unix epoch
//! (1970-01-01 is serial 0) in the proleptic Gregorian calendar. A `Date`
//! carries no time-of-day, so every comparison between dates is a calendar
//! comparison; instants with a wall-clock time live in
//! [`DateTime`](crate::datetime::DateTime).
//!
//! # Range
//! The valid range is 0001-01-01 to 9999-12-31.

use std::str::FromStr;

use crate::month::YearMonth;
use crate::weekday::Weekday;
use rec_core::errors::{Error, Result};

/// A time-stripped calendar date represented as a serial day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date(days_from_civil(1, 1, 1));

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(days_from_civil(9999, 12, 31));

    /// Smallest supported year.
    pub const MIN_YEAR: u16 = 1;

    /// Largest supported year.
    pub const MAX_YEAR: u16 = 9999;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number (days since 1970-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} out of range")));
        }
        Ok(d)
    }

    /// Create a date from year (1–9999), month (1–12), and day-of-month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range [1, 9999]")));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
            )));
        }
        Ok(Date(days_from_civil(year as i32, month as u32, day as u32)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (u16, u8, u8) {
        let (y, m, d) = civil_from_days(self.0);
        (y as u16, m as u8, d as u8)
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> u16 {
        self.ymd().0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return the year and month containing this date.
    pub fn year_month(&self) -> YearMonth {
        let (y, m, _) = self.ymd();
        YearMonth::from_parts(y, m)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday (ordinal 4).
        let w = ((self.0 as i64 + 3).rem_euclid(7) + 1) as u8;
        match Weekday::from_ordinal(w) {
            Some(wd) => wd,
            None => unreachable!("rem_euclid always in 1..=7"),
        }
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i64) -> Result<Self> {
        let serial = self.0 as i64 + n;
        if serial < Self::MIN.0 as i64 || serial > Self::MAX.0 as i64 {
            return Err(Error::Date(format!(
                "{self} + {n} days is out of range"
            )));
        }
        Ok(Date(serial as i32))
    }

    /// Return the number of calendar days from `self` to `other`.
    /// Positive if `other > self`.
    pub fn days_until(self, other: Date) -> i64 {
        other.0 as i64 - self.0 as i64
    }

    // ── Month patterns ────────────────────────────────────────────────────────

    /// Return the `ordinal`-th occurrence of `weekday` in `month`.
    ///
    /// For example, `nth_weekday(3, Weekday::Wednesday, 2024-03)` returns the
    /// third Wednesday of March 2024 (2024-03-20). Returns `None` when `ordinal`
    /// is zero or the month has fewer than `ordinal` such weekdays.
    pub fn nth_weekday(ordinal: u8, weekday: Weekday, month: YearMonth) -> Option<Self> {
        if ordinal == 0 {
            return None;
        }
        let first = month.first_day();
        let skip = first.weekday().days_until(weekday) as u32;
        let day = 1 + skip + 7 * (ordinal as u32 - 1);
        if day > month.days() as u32 {
            return None;
        }
        Some(Date(first.0 + day as i32 - 1))
    }

    /// Return the last occurrence of `weekday` in `month`.
    ///
    /// Every month holds at least four of each weekday, so this always exists.
    pub fn last_weekday(weekday: Weekday, month: YearMonth) -> Self {
        let last = month.last_day();
        let back = weekday.days_until(last.weekday());
        Date(last.0 - back as i32)
    }

    /// Return the 1-based ordinal of this date's weekday within its month.
    ///
    /// 2024-01-09 is the second Tuesday of January, so this returns 2.
    pub fn week_of_month(&self) -> u8 {
        (self.day_of_month() - 1) / 7 + 1
    }

    /// Return `true` if the same weekday does not occur again in this month.
    pub fn is_last_weekday_of_month(&self) -> bool {
        let (y, m, d) = self.ymd();
        d as u32 + 7 > days_in_month(y, m) as u32
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> i64 {
        rhs.days_until(self)
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO 8601 calendar date in extended form (`YYYY-MM-DD`).
    fn from_str(s: &str) -> Result<Self> {
        let b = s.as_bytes();
        if !s.is_ascii() || b.len() != 10 || b[4] != b'-' || b[7] != b'-' {
            return Err(Error::Date(format!("expected YYYY-MM-DD, got {s:?}")));
        }
        let field = |range: std::ops::Range<usize>| {
            parse_digits(&s[range]).ok_or_else(|| Error::Date(format!("malformed date {s:?}")))
        };
        let year = field(0..4)?;
        let month = field(5..7)?;
        let day = field(8..10)?;
        Date::from_ymd(year as u16, month as u8, day as u8)
    }
}

/// Parse a non-empty run of ASCII digits.
pub(crate) fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to days since 1970-01-01.
///
/// Years are shifted to start in March so that the leap day falls at the
/// end of the shifted year; eras are 400-year Gregorian cycles.
const fn days_from_civil(year: i32, month: u32, day: u32) -> i32 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = (y - era * 400) as u32;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe as i32 - 719_468
}

/// Decompose days since 1970-01-01 into (year, month, day).
fn civil_from_days(serial: i32) -> (i32, u32, u32) {
    let z = serial + 719_468;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = (z - era * 146_097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe as i32 + era * 400;
    (if m <= 2 { y + 1 } else { y }, m, d)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
