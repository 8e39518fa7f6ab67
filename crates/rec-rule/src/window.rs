//! `Window` — an inclusive range of whole days to query a rule over.

use rec_core::ensure;
use rec_core::errors::{Error, Result};
use rec_time::{Date, DateTime};

/// An inclusive span of calendar days, `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    start: Date,
    end: Date,
}

impl Window {
    /// Create a window covering `start` through `end`.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] if `start` is after `end`.
    pub fn new(start: Date, end: Date) -> Result<Self> {
        ensure!(
            start <= end,
            Error::InvalidRange(format!("{start} is after {end}"))
        );
        Ok(Self { start, end })
    }

    /// Parse a window from two ISO 8601 dates or date-times.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] if either bound is malformed or they are
    /// inverted.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let bound = |s: &str| {
            s.parse::<DateTime>()
                .map(|dt| dt.date())
                .map_err(|e| Error::InvalidRange(e.to_string()))
        };
        Self::new(bound(start)?, bound(end)?)
    }

    /// Caller guarantees `start <= end`.
    pub(crate) fn spanning(start: Date, end: Date) -> Self {
        debug_assert!(start <= end, "inverted window {start}..={end}");
        Self { start, end }
    }

    /// First day of the window.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last day of the window, inclusive.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Whether `date` falls inside the window.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}
