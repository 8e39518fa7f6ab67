//! Conversions to and from `chrono`'s naive (zone-less) types.
//!
//! Only the calendar fields cross the boundary. Sub-second precision on the
//! `chrono` side is dropped when converting into a [`DateTime`].

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::date::Date;
use crate::datetime::{DateTime, TimeOfDay};
use rec_core::errors::{Error, Result};

impl TryFrom<NaiveDate> for Date {
    type Error = Error;

    fn try_from(d: NaiveDate) -> Result<Self> {
        let year = u16::try_from(d.year())
            .map_err(|_| Error::Date(format!("year {} out of range", d.year())))?;
        Date::from_ymd(year, d.month() as u8, d.day() as u8)
    }
}

impl TryFrom<Date> for NaiveDate {
    type Error = Error;

    fn try_from(d: Date) -> Result<Self> {
        let (y, m, day) = d.ymd();
        NaiveDate::from_ymd_opt(y as i32, m as u32, day as u32)
            .ok_or_else(|| Error::Date(format!("{d} is not representable in chrono")))
    }
}

impl TryFrom<NaiveDateTime> for DateTime {
    type Error = Error;

    fn try_from(dt: NaiveDateTime) -> Result<Self> {
        let t = dt.time();
        let time = TimeOfDay::new(t.hour() as u8, t.minute() as u8, t.second() as u8)?;
        Ok(DateTime::new(Date::try_from(dt.date())?, time))
    }
}

impl TryFrom<DateTime> for NaiveDateTime {
    type Error = Error;

    fn try_from(dt: DateTime) -> Result<Self> {
        let t = dt.time();
        let time = NaiveTime::from_hms_opt(t.hour() as u32, t.minute() as u32, t.second() as u32)
            .ok_or_else(|| Error::Date(format!("{t} is not representable in chrono")))?;
        Ok(NaiveDateTime::new(NaiveDate::try_from(dt.date())?, time))
    }
}
