//! Integration tests for `RecurrenceRule` construction and its three queries.

use rec_core::Error;
use rec_rule::{Frequency, MonthlyPattern, RecurrenceRule, Terminator, Window};
use rec_time::{Date, DateTime, TimeOfDay};

fn at(s: &str) -> DateTime {
    s.parse().unwrap()
}

fn date(s: &str) -> Date {
    s.parse().unwrap()
}

/// Render occurrences as their dates, for compact comparisons.
fn days(occurrences: &[DateTime]) -> Vec<String> {
    occurrences.iter().map(|o| o.date().to_string()).collect()
}

fn counted(freq: Frequency, start: &str, interval: i64, count: i64) -> RecurrenceRule {
    RecurrenceRule::builder(freq, at(start))
        .interval(interval)
        .count(count)
        .build()
        .unwrap()
}

fn until(freq: Frequency, start: &str, interval: i64, until: &str) -> RecurrenceRule {
    RecurrenceRule::builder(freq, at(start))
        .interval(interval)
        .until(at(until))
        .build()
        .unwrap()
}

// ───────────────────────── construction ─────────────────────────

#[test]
fn terminator_must_be_exactly_one() {
    let both = RecurrenceRule::builder(Frequency::Daily, at("2024-01-01"))
        .until(at("2024-02-01"))
        .count(3)
        .build();
    assert_eq!(
        both,
        Err(Error::AmbiguousTerminator {
            until: true,
            count: true
        })
    );

    let neither = RecurrenceRule::builder(Frequency::Daily, at("2024-01-01")).build();
    assert_eq!(
        neither,
        Err(Error::AmbiguousTerminator {
            until: false,
            count: false
        })
    );
}

#[test]
fn invalid_interval_and_count() {
    let start = at("2024-01-01");
    for interval in [0, -1, -52] {
        assert_eq!(
            RecurrenceRule::builder(Frequency::Weekly, start)
                .interval(interval)
                .count(1)
                .build(),
            Err(Error::InvalidInterval(interval))
        );
    }
    assert_eq!(
        RecurrenceRule::builder(Frequency::Weekly, start).count(0).build(),
        Err(Error::InvalidCount(0))
    );
}

#[test]
fn start_after_until_is_inverted() {
    let err = RecurrenceRule::builder(Frequency::Daily, at("2024-03-02T00:00"))
        .until(at("2024-03-01T23:59:59"))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        Error::InvertedRange {
            start: "2024-03-02".into(),
            until: "2024-03-01".into()
        }
    );
}

#[test]
fn monthly_anchor_is_derived_from_origin() {
    let rule = counted(Frequency::Monthly, "2024-01-09T08:00", 1, 1);
    let anchor = rule.monthly_anchor().unwrap();
    assert_eq!(anchor.weekday(), rec_time::Weekday::Tuesday);
    assert_eq!(anchor.week_of_month(), 2);
    assert_eq!(anchor.pattern(), MonthlyPattern::NthWeekday);

    let rule = counted(Frequency::Monthly, "2024-01-31", 1, 1);
    assert_eq!(
        rule.monthly_anchor().unwrap().pattern(),
        MonthlyPattern::LastWeekday
    );
}

// ───────────────────────── by_count ─────────────────────────

#[test]
fn daily_every_third_day() {
    let rule = counted(Frequency::Daily, "2024-01-01T09:30", 3, 4);
    let all = rule.all();
    assert_eq!(days(&all), ["2024-01-01", "2024-01-04", "2024-01-07", "2024-01-10"]);
    assert!(all
        .iter()
        .all(|o| o.time() == TimeOfDay::new(9, 30, 0).unwrap()));
    assert_eq!(rule.by_count(4).unwrap(), all);
}

#[test]
fn weekly_every_other_monday_until() {
    let rule = until(Frequency::Weekly, "2024-01-01T10:00", 2, "2024-02-01");
    assert_eq!(days(&rule.all()), ["2024-01-01", "2024-01-15", "2024-01-29"]);
}

#[test]
fn by_count_ignores_the_until() {
    let rule = until(Frequency::Weekly, "2024-01-01", 2, "2024-02-01");
    assert_eq!(
        days(&rule.by_count(5).unwrap()),
        ["2024-01-01", "2024-01-15", "2024-01-29", "2024-02-12", "2024-02-26"]
    );
}

#[test]
fn by_count_rejects_non_positive() {
    let rule = counted(Frequency::Daily, "2024-01-01", 1, 3);
    assert_eq!(rule.by_count(0), Err(Error::InvalidCount(0)));
    assert_eq!(rule.by_count(-2), Err(Error::InvalidCount(-2)));
}

#[test]
fn monthly_last_friday_never_drifts() {
    let rule = counted(Frequency::Monthly, "2024-01-26T17:00", 1, 6);
    assert_eq!(
        days(&rule.all()),
        [
            "2024-01-26",
            "2024-02-23",
            "2024-03-29",
            "2024-04-26",
            "2024-05-31",
            "2024-06-28"
        ]
    );
}

#[test]
fn monthly_second_tuesday_every_other_month() {
    let rule = counted(Frequency::Monthly, "2024-01-09", 2, 3);
    assert_eq!(days(&rule.all()), ["2024-01-09", "2024-03-12", "2024-05-14"]);
}

#[test]
fn monthly_fifth_monday_skips_months_without_one() {
    let rule = RecurrenceRule::builder(Frequency::Monthly, at("2024-01-29"))
        .count(4)
        .by_ordinal(true)
        .build()
        .unwrap();
    assert_eq!(
        days(&rule.all()),
        ["2024-01-29", "2024-04-29", "2024-07-29", "2024-09-30"]
    );

    // Without pinning the ordinal, a 5th weekday is also the last one.
    let rule = counted(Frequency::Monthly, "2024-01-29", 1, 4);
    assert_eq!(
        days(&rule.all()),
        ["2024-01-29", "2024-02-26", "2024-03-25", "2024-04-29"]
    );
}

#[test]
fn yearly_leap_day_only_in_leap_years() {
    let rule = counted(Frequency::Yearly, "2024-02-29T12:00", 1, 3);
    assert_eq!(days(&rule.all()), ["2024-02-29", "2028-02-29", "2032-02-29"]);

    // 2100 is not a leap year, so a 100-year-step rule waits until 2400.
    let rule = counted(Frequency::Yearly, "2000-02-29", 100, 3);
    assert_eq!(days(&rule.all()), ["2000-02-29", "2400-02-29", "2800-02-29"]);
}

#[test]
fn yearly_ordinary_day() {
    let rule = counted(Frequency::Yearly, "2023-03-31", 2, 3);
    assert_eq!(days(&rule.all()), ["2023-03-31", "2025-03-31", "2027-03-31"]);
}

#[test_log::test]
fn count_stops_at_end_of_calendar() {
    let rule = counted(Frequency::Yearly, "9990-06-01", 4, 10);
    assert_eq!(days(&rule.all()), ["9990-06-01", "9994-06-01", "9998-06-01"]);
}

// ───────────────────────── between ─────────────────────────

#[test]
fn between_uses_whole_days() {
    let rule = counted(Frequency::Daily, "2024-01-01T09:00", 1, 10);
    // The times of the bounds are ignored: 2024-01-03T23:00 still admits the
    // 09:00 occurrence on the 3rd, and 2024-01-05T00:00 the one on the 5th.
    let got = rule
        .between(at("2024-01-03T23:00"), at("2024-01-05T00:00"))
        .unwrap();
    assert_eq!(days(&got), ["2024-01-03", "2024-01-04", "2024-01-05"]);
    assert!(got.iter().all(|o| o.time() == rule.time_of_day()));
}

#[test]
fn between_rejects_inverted_window() {
    let rule = counted(Frequency::Daily, "2024-01-01", 1, 10);
    assert!(matches!(
        rule.between(at("2024-02-01"), at("2024-01-01")),
        Err(Error::InvalidRange(_))
    ));
}

#[test_log::test]
fn monthly_between_fast_forwards() {
    // Every 5 months on the 2nd Tuesday: 2024-01, -06, -11, 2025-04, -09,
    // 2026-02, -07, -12, ...
    let rule = until(Frequency::Monthly, "2024-01-09", 5, "2030-12-31");
    let got = rule.between(at("2026-01-01"), at("2026-12-31")).unwrap();
    assert_eq!(days(&got), ["2026-02-10", "2026-07-14", "2026-12-08"]);

    // A window opening the day after an occurrence drops it.
    let got = rule.between(at("2026-02-11"), at("2026-07-14")).unwrap();
    assert_eq!(days(&got), ["2026-07-14"]);
}

#[test]
fn yearly_between_fast_forwards() {
    let rule = until(Frequency::Yearly, "2024-02-29", 1, "2040-12-31");
    let got = rule.between(at("2025-01-01"), at("2035-12-31")).unwrap();
    assert_eq!(days(&got), ["2028-02-29", "2032-02-29"]);

    let rule = until(Frequency::Yearly, "2020-06-15", 3, "2050-01-01");
    let got = rule.between(at("2030-01-01"), at("2040-12-31")).unwrap();
    assert_eq!(days(&got), ["2032-06-15", "2035-06-15", "2038-06-15"]);
}

#[test]
fn daily_between_far_in_the_future() {
    let rule = until(Frequency::Daily, "2024-01-01T06:00", 3, "9999-12-31");
    let got = rule.between(at("5000-01-01"), at("5000-01-10")).unwrap();
    assert!(!got.is_empty());
    let origin = rule.origin();
    for o in &got {
        assert_eq!((o.date() - origin) % 3, 0, "{o} is off the interval");
        assert!(o.date() >= date("5000-01-01") && o.date() <= date("5000-01-10"));
    }
    assert!(got[0].date() - date("5000-01-01") < 3);
    assert!(got.windows(2).all(|w| w[1].date() - w[0].date() == 3));
}

#[test]
fn between_respects_until() {
    let rule = until(Frequency::Weekly, "2024-01-01", 1, "2024-01-20");
    let got = rule.between(at("2024-01-10"), at("2024-03-01")).unwrap();
    assert_eq!(days(&got), ["2024-01-15"]);
}

#[test]
fn between_outside_lifespan_is_empty() {
    let rule = until(Frequency::Daily, "2024-01-10", 1, "2024-01-20");
    assert!(rule.between(at("2024-01-01"), at("2024-01-09")).unwrap().is_empty());
    assert!(rule.between(at("2024-01-21"), at("2024-12-31")).unwrap().is_empty());

    let rule = counted(Frequency::Weekly, "2024-01-10", 1, 3);
    assert!(rule.between(at("2023-01-01"), at("2024-01-09")).unwrap().is_empty());
    // The last of the three occurrences is 2024-01-24.
    assert!(rule.between(at("2024-01-25"), at("2030-01-01")).unwrap().is_empty());
}

#[test]
fn counted_between_matches_by_count() {
    let rule = counted(Frequency::Yearly, "2024-02-29", 1, 3);
    let lifespan = rule.between(at("2000-01-01"), at("2100-01-01")).unwrap();
    assert_eq!(lifespan, rule.by_count(3).unwrap());

    let got = rule.between(at("2027-01-01"), at("2031-12-31")).unwrap();
    assert_eq!(days(&got), ["2028-02-29"]);
}

#[test]
fn occurrences_in_parsed_window() {
    let rule = counted(Frequency::Monthly, "2024-01-26", 1, 12);
    let window = Window::parse("2024-03-01", "2024-05-31").unwrap();
    assert_eq!(
        days(&rule.occurrences_in(&window)),
        ["2024-03-29", "2024-04-26", "2024-05-31"]
    );
}

#[test]
fn is_occurrence_checks_a_single_day() {
    let rule = until(Frequency::Weekly, "2024-01-01", 2, "2024-12-31");
    assert!(rule.is_occurrence(date("2024-01-01")));
    assert!(rule.is_occurrence(date("2024-01-15")));
    assert!(!rule.is_occurrence(date("2024-01-08")));
    assert!(!rule.is_occurrence(date("2023-12-18")));
    assert!(!rule.is_occurrence(date("2025-01-13")));
}

#[test]
fn terminator_accessor() {
    let rule = counted(Frequency::Daily, "2024-01-01", 1, 7);
    assert_eq!(rule.terminator(), Terminator::Count(7));
    assert_eq!(rule.frequency(), Frequency::Daily);
    assert_eq!(rule.interval(), 1);
}
