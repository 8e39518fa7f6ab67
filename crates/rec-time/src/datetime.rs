//! `TimeOfDay` and `DateTime` — wall-clock instants in one implicit local
//! calendar.
//!
//! There is no time zone here. A `DateTime` is a [`Date`] paired with a
//! [`TimeOfDay`]; callers that want calendar-only comparisons take
//! [`DateTime::date`] first.

use std::str::FromStr;

use crate::date::{parse_digits, Date};
use rec_core::errors::{Error, Result};

/// A wall-clock time of day with second precision.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// 00:00:00.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// 23:59:59, the last instant of a day.
    pub const END_OF_DAY: TimeOfDay = TimeOfDay {
        hour: 23,
        minute: 59,
        second: 59,
    };

    /// Create a time of day. Leap seconds are not representable.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(Error::Date(format!(
                "time {hour:02}:{minute:02}:{second:02} out of range"
            )));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Hour (0–23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute (0–59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Second (0–59).
    pub fn second(&self) -> u8 {
        self.second
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl std::fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimeOfDay({self})")
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    /// Parse `HH:MM` or `HH:MM:SS`.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::Date(format!("expected HH:MM[:SS], got {s:?}"));
        let mut parts = s.split(':');
        let mut next = |required: bool| -> Result<u8> {
            match parts.next() {
                Some(p) if p.len() == 2 => parse_digits(p).map(|n| n as u8).ok_or_else(malformed),
                None if !required => Ok(0),
                _ => Err(malformed()),
            }
        };
        let hour = next(true)?;
        let minute = next(true)?;
        let second = next(false)?;
        if parts.next().is_some() {
            return Err(malformed());
        }
        TimeOfDay::new(hour, minute, second)
    }
}

/// A calendar date with a wall-clock time of day.
///
/// Ordering compares the date first, then the time.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    date: Date,
    time: TimeOfDay,
}

impl DateTime {
    /// Pair a date with a time of day.
    pub fn new(date: Date, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// Create from individual fields, validating every one of them.
    pub fn from_ymd_hms(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self> {
        Ok(Self::new(
            Date::from_ymd(year, month, day)?,
            TimeOfDay::new(hour, minute, second)?,
        ))
    }

    /// The calendar date with the time stripped.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The time of day.
    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// The same instant moved to the last second of its day.
    pub fn end_of_day(&self) -> Self {
        Self::new(self.date, TimeOfDay::END_OF_DAY)
    }
}

impl From<Date> for DateTime {
    /// Midnight at the start of `date`.
    fn from(date: Date) -> Self {
        Self::new(date, TimeOfDay::MIDNIGHT)
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

impl std::fmt::Debug for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DateTime({self})")
    }
}

impl FromStr for DateTime {
    type Err = Error;

    /// Parse `YYYY-MM-DD` (midnight) or `YYYY-MM-DD[T ]HH:MM[:SS]`.
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(['T', ' ']) {
            Some((date, time)) => Ok(Self::new(date.parse()?, time.parse()?)),
            None => Ok(Self::from(s.parse::<Date>()?)),
        }
    }
}
