//! `Frequency` — the unit a recurrence steps by.

use std::str::FromStr;

use rec_core::errors::Error;

/// How often a rule recurs, before its interval is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// Every `interval` days.
    Daily,
    /// Every `interval` weeks, on the origin's weekday.
    Weekly,
    /// Every `interval` months, on the origin's Nth or last weekday.
    Monthly,
    /// Every `interval` years, on the origin's month and day.
    Yearly,
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Yearly => "YEARLY",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Frequency {
    type Err = Error;

    /// Parse `daily`, `weekly`, `monthly` or `yearly`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Error> {
        [
            Frequency::Daily,
            Frequency::Weekly,
            Frequency::Monthly,
            Frequency::Yearly,
        ]
        .into_iter()
        .find(|f| f.to_string().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| Error::InvalidFrequency(s.to_owned()))
    }
}
