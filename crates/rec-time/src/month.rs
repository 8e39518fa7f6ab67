//! `Month` — month-of-year enum, and `YearMonth` — a month of a specific year.
//!
//! Monthly and yearly recurrences step through whole months without ever
//! touching a day-of-month, so they walk `YearMonth` values and only resolve
//! a concrete [`Date`] once a month has been chosen.

use crate::date::{days_in_month, Date};
use rec_core::errors::{Error, Result};

/// Month of the year.
///
/// Variants are numbered 1–12 (January = 1, December = 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    /// January (1).
    January = 1,
    /// February (2).
    February = 2,
    /// March (3).
    March = 3,
    /// April (4).
    April = 4,
    /// May (5).
    May = 5,
    /// June (6).
    June = 6,
    /// July (7).
    July = 7,
    /// August (8).
    August = 8,
    /// September (9).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

impl Month {
    /// Construct from a number (1 = January … 12 = December).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Month::January),
            2 => Some(Month::February),
            3 => Some(Month::March),
            4 => Some(Month::April),
            5 => Some(Month::May),
            6 => Some(Month::June),
            7 => Some(Month::July),
            8 => Some(Month::August),
            9 => Some(Month::September),
            10 => Some(Month::October),
            11 => Some(Month::November),
            12 => Some(Month::December),
            _ => None,
        }
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }
}

/// A calendar month of a specific year, e.g. March 2024.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: u16,
    month: Month,
}

impl YearMonth {
    /// Create a year-month, validating both parts.
    pub fn new(year: u16, month: u8) -> Result<Self> {
        if !(Date::MIN_YEAR..=Date::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range [1, 9999]")));
        }
        let month = Month::from_number(month)
            .ok_or_else(|| Error::Date(format!("month {month} out of range [1, 12]")))?;
        Ok(Self { year, month })
    }

    /// Build from parts already known to be valid (e.g. taken from a `Date`).
    pub(crate) fn from_parts(year: u16, month: u8) -> Self {
        match Month::from_number(month) {
            Some(month) => Self { year, month },
            None => unreachable!("month {month} taken from a valid date"),
        }
    }

    /// The year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// The month of the year.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Number of days in this month.
    pub fn days(&self) -> u8 {
        days_in_month(self.year, self.month.number())
    }

    /// The first day of this month.
    pub fn first_day(&self) -> Date {
        self.day(1)
    }

    /// The last day of this month.
    pub fn last_day(&self) -> Date {
        self.day(self.days())
    }

    /// Months elapsed since January of year 0.
    fn index(&self) -> i64 {
        self.year as i64 * 12 + (self.month.number() as i64 - 1)
    }

    /// Whole months from `earlier` to `self`; negative if `self` is earlier.
    pub fn months_since(&self, earlier: YearMonth) -> i64 {
        self.index() - earlier.index()
    }

    /// Step `n` months forward (or backward when negative).
    ///
    /// Returns `None` if the result leaves the supported year range.
    pub fn plus_months(&self, n: i64) -> Option<Self> {
        let idx = self.index().checked_add(n)?;
        let year = idx.div_euclid(12);
        if year < Date::MIN_YEAR as i64 || year > Date::MAX_YEAR as i64 {
            return None;
        }
        Some(Self::from_parts(year as u16, (idx.rem_euclid(12) + 1) as u8))
    }

    fn day(&self, day: u8) -> Date {
        match Date::from_ymd(self.year, self.month.number(), day) {
            Ok(d) => d,
            Err(_) => unreachable!("day {day} lies within {self}"),
        }
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month.number())
    }
}

impl std::fmt::Debug for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "YearMonth({self})")
    }
}
