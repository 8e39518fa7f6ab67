//! Integration tests for `Date`, `YearMonth`, and the weekday-of-month
//! resolvers.

use proptest::prelude::*;

use rec_time::{days_in_month, is_leap_year, Date, DateTime, Weekday, YearMonth};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Date consistency test ────────────────────────────────────────────────────

#[test]
fn test_consistency() {
    // Walk four Gregorian cycles day by day and check every invariant.
    let first = date(1600, 1, 1).serial();
    let last = date(2400, 12, 31).serial();

    let prev = Date::from_serial(first - 1).unwrap();
    let (mut y_old, mut m_old, mut d_old) = prev.ymd();
    let mut wd_old = prev.weekday().ordinal();

    for i in first..=last {
        let t = Date::from_serial(i).unwrap();
        assert_eq!(t.serial(), i, "inconsistent serial for date {t}");

        let (y, m, d) = t.ymd();
        assert!(
            (d == d_old + 1 && m == m_old && y == y_old)
                || (d == 1 && m == m_old + 1 && y == y_old)
                || (d == 1 && m == 1 && y == y_old + 1),
            "wrong day/month/year increment: date={t}, prev={y_old}-{m_old}-{d_old}"
        );
        assert!(d >= 1 && d <= days_in_month(y, m), "invalid day of month: {t}");
        (y_old, m_old, d_old) = (y, m, d);

        let wd = t.weekday().ordinal();
        assert!(
            (wd == wd_old + 1) || (wd == 1 && wd_old == 7),
            "invalid weekday increment: date={t}, wd={wd}, prev_wd={wd_old}"
        );
        wd_old = wd;

        assert_eq!(Date::from_ymd(y, m, d).unwrap(), t, "roundtrip failed: {t}");
    }
}

// ─── Leap year tests ─────────────────────────────────────────────────────────

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2004));
    assert!(!is_leap_year(2001));
    assert!(is_leap_year(2400));
    assert!(!is_leap_year(2100));
    assert!(Date::from_ymd(2100, 2, 29).is_err());
    assert!(Date::from_ymd(2000, 2, 29).is_ok());
}

// ─── Weekday tests ──────────────────────────────────────────────────────────

#[test]
fn weekday_consistency() {
    // Known: 2024-01-01 is Monday
    assert_eq!(date(2024, 1, 1).weekday(), Weekday::Monday);
    assert_eq!(date(2024, 1, 2).weekday(), Weekday::Tuesday);
    assert_eq!(date(2024, 1, 6).weekday(), Weekday::Saturday);
    assert_eq!(date(2024, 1, 7).weekday(), Weekday::Sunday);
    assert_eq!(date(2000, 1, 1).weekday(), Weekday::Saturday);
    assert_eq!(Date::MIN.weekday(), Weekday::Monday);
}

// ─── Month pattern tests ─────────────────────────────────────────────────────

#[test]
fn fifth_weekdays_are_rare() {
    // January 2024 has five Mondays, Tuesdays and Wednesdays only.
    let jan = YearMonth::new(2024, 1).unwrap();
    let with_fifth: Vec<Weekday> = (1..=7)
        .filter_map(Weekday::from_ordinal)
        .filter(|&wd| Date::nth_weekday(5, wd, jan).is_some())
        .collect();
    assert_eq!(
        with_fifth,
        [Weekday::Monday, Weekday::Tuesday, Weekday::Wednesday]
    );

    // A non-leap February has exactly four of everything.
    let feb = YearMonth::new(2023, 2).unwrap();
    for wd in (1..=7).filter_map(Weekday::from_ordinal) {
        assert!(Date::nth_weekday(4, wd, feb).is_some());
        assert!(Date::nth_weekday(5, wd, feb).is_none());
        assert_eq!(Date::nth_weekday(4, wd, feb), Some(Date::last_weekday(wd, feb)));
    }
}

#[test]
fn end_of_day_keeps_the_date() {
    let dt: DateTime = "2024-02-01T10:15:00".parse().unwrap();
    assert_eq!(dt.end_of_day().to_string(), "2024-02-01T23:59:59");
}

// ─── Properties ──────────────────────────────────────────────────────────────

fn any_date() -> impl Strategy<Value = Date> {
    (Date::MIN.serial()..=Date::MAX.serial()).prop_map(|s| Date::from_serial(s).unwrap())
}

proptest! {
    #[test]
    fn ordinal_locates_the_date(d in any_date()) {
        let found = Date::nth_weekday(d.week_of_month(), d.weekday(), d.year_month());
        prop_assert_eq!(found, Some(d));
    }

    #[test]
    fn last_weekday_agrees_with_classification(d in any_date()) {
        let last = Date::last_weekday(d.weekday(), d.year_month());
        prop_assert_eq!(last == d, d.is_last_weekday_of_month());
        prop_assert_eq!(last.weekday(), d.weekday());
        prop_assert_eq!(last.year_month(), d.year_month());
    }

    #[test]
    fn display_parses_back(d in any_date()) {
        prop_assert_eq!(d.to_string().parse::<Date>().unwrap(), d);
    }
}
