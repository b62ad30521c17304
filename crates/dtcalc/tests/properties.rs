//! Property-based tests for parsing, arithmetic and formatting.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use dtcalc::{
    evaluate_with_clock, format_instant, parse_duration_parts, EvaluationError, FixedClock, Op,
    Value,
};
use proptest::prelude::*;

const ALIASES: [(&str, i64, usize); 18] = [
    // (alias, multiplier, component index: 0=days 1=hours 2=minutes 3=seconds)
    ("w", 7, 0),
    ("week", 7, 0),
    ("weeks", 7, 0),
    ("d", 1, 0),
    ("day", 1, 0),
    ("days", 1, 0),
    ("h", 1, 1),
    ("hr", 1, 1),
    ("hour", 1, 1),
    ("hours", 1, 1),
    ("m", 1, 2),
    ("min", 1, 2),
    ("minute", 1, 2),
    ("minutes", 1, 2),
    ("s", 1, 3),
    ("sec", 1, 3),
    ("second", 1, 3),
    ("seconds", 1, 3),
];

fn clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2026, 2, 17)
            .unwrap()
            .and_hms_opt(14, 30, 5)
            .unwrap(),
    )
}

fn instant_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (1970i32..2100, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60).prop_map(
        |(y, mo, d, h, mi, s)| {
            NaiveDate::from_ymd_opt(y, mo, d)
                .unwrap()
                .and_hms_opt(h, mi, s)
                .unwrap()
        },
    )
}

fn duration_literal_strategy() -> impl Strategy<Value = String> {
    (0i64..400, 0i64..48, 0i64..120, 0i64..120)
        .prop_map(|(d, h, m, s)| format!("{d}d {h}h {m}m {s}s"))
}

proptest! {
    #[test]
    fn alias_component_equals_number(n in 0i64..1_000_000, alias in 0usize..ALIASES.len()) {
        let (unit, multiplier, index) = ALIASES[alias];
        let parts = parse_duration_parts(&format!("{n}{unit}")).unwrap().unwrap();
        let components = [parts.days, parts.hours, parts.minutes, parts.seconds];
        for (i, value) in components.iter().enumerate() {
            let expected = if i == index { n * multiplier } else { 0 };
            prop_assert_eq!(*value, expected);
        }
    }

    #[test]
    fn alias_with_space_matches_glued(n in 0i64..10_000, alias in 0usize..ALIASES.len()) {
        let unit = ALIASES[alias].0;
        prop_assert_eq!(
            parse_duration_parts(&format!("{n} {unit}")).unwrap(),
            parse_duration_parts(&format!("{n}{unit}")).unwrap()
        );
    }

    #[test]
    fn add_then_subtract_recovers_instant(
        instant in instant_strategy(),
        literal in duration_literal_strategy(),
    ) {
        let expression = format!("{} + {literal}", instant.format("%Y-%m-%d %H:%M:%S"));
        let shifted = evaluate_with_clock(&expression, &clock()).unwrap();
        let delta = evaluate_with_clock(&literal, &clock()).unwrap();
        prop_assert_eq!(shifted.apply(Op::Sub, delta).unwrap(), Value::Instant(instant));
    }

    #[test]
    fn instant_difference_matches_chrono(a in instant_strategy(), b in instant_strategy()) {
        let expression = format!(
            "{} - {}",
            a.format("%Y-%m-%d %H:%M:%S"),
            b.format("%Y-%m-%d %H:%M:%S")
        );
        let value = evaluate_with_clock(&expression, &clock()).unwrap();
        prop_assert_eq!(value, Value::Duration(a - b));
    }

    #[test]
    fn negation_only_adds_leading_sign(secs in 1i64..10_000_000) {
        let positive = Value::Duration(TimeDelta::seconds(secs)).to_string();
        let negative = Value::Duration(TimeDelta::seconds(-secs)).to_string();
        prop_assert_eq!(negative, format!("-{positive}"));
        prop_assert_eq!(positive.matches('-').count(), 0);
    }

    #[test]
    fn iso_dates_render_back_unchanged(instant in instant_strategy()) {
        let date = instant.date().format("%Y-%m-%d").to_string();
        let value = evaluate_with_clock(&date, &clock()).unwrap();
        prop_assert_eq!(value.to_string(), date);
    }

    #[test]
    fn formatted_instant_reparses(instant in instant_strategy()) {
        let rendered = format_instant(&instant);
        let value = evaluate_with_clock(&rendered, &clock()).unwrap();
        prop_assert_eq!(value, Value::Instant(instant));
    }

    #[test]
    fn unknown_alphabetic_units_are_rejected(n in 0u32..1000, unit in "[q-rx-z][a-z]{0,6}") {
        let result = evaluate_with_clock(&format!("{n}{unit}"), &clock());
        prop_assert_eq!(result.unwrap_err(), EvaluationError::UnsupportedUnit(unit));
    }
}

#[test]
fn today_minus_today_is_zero_seconds() {
    let value = evaluate_with_clock("today - today", &clock()).unwrap();
    assert_eq!(value.to_string(), "0 seconds");
}

#[test]
fn now_offset_is_exact() {
    let value = evaluate_with_clock("now + 3h 15m", &clock()).unwrap();
    let Value::Instant(instant) = value else {
        panic!("expected instant, got {value:?}");
    };
    assert_eq!(
        instant - clock().0,
        TimeDelta::hours(3) + TimeDelta::minutes(15)
    );
    assert_eq!(value.to_string(), "2026-02-17 17:45:05");
}
