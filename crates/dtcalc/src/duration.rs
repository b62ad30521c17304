//! Duration literals: `3d`, `2 hours`, `3w4d`, `3h 15m`.
//!
//! A literal is one or more `<integer><unit>` pairs, optionally separated by
//! whitespace. Units repeat freely and are summed. There are no month or
//! year units; weeks are folded into days.

use chrono::TimeDelta;

use crate::error::{EvaluationError, Result};

/// Per-unit sums of a duration literal, with weeks already folded into days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl DurationParts {
    /// Merge the components into a single [`TimeDelta`].
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::OutOfRange`] if the total does not fit.
    pub fn to_time_delta(self) -> Result<TimeDelta> {
        let total = self
            .days
            .checked_mul(86_400)
            .and_then(|s| s.checked_add(self.hours.checked_mul(3_600)?))
            .and_then(|s| s.checked_add(self.minutes.checked_mul(60)?))
            .and_then(|s| s.checked_add(self.seconds));

        total
            .and_then(TimeDelta::try_seconds)
            .ok_or_else(|| EvaluationError::OutOfRange(format!("duration {self:?}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

/// Map a unit alias (case-insensitive) to its unit.
fn parse_unit(s: &str) -> Option<Unit> {
    match s.to_ascii_lowercase().as_str() {
        "w" | "week" | "weeks" => Some(Unit::Week),
        "d" | "day" | "days" => Some(Unit::Day),
        "h" | "hr" | "hour" | "hours" => Some(Unit::Hour),
        "m" | "min" | "minute" | "minutes" => Some(Unit::Minute),
        "s" | "sec" | "second" | "seconds" => Some(Unit::Second),
        _ => None,
    }
}

/// Split a token into `(number, unit)` pairs.
///
/// Returns `None` unless the whole token is a sequence of such pairs, so
/// that tokens like `2024-01-01 10:30 PM` are left to the datetime parser.
fn scan_pairs(token: &str) -> Option<Vec<(&str, &str)>> {
    let mut pairs = Vec::new();
    let mut rest = token.trim_start();

    while !rest.is_empty() {
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits_end == 0 {
            return None;
        }
        let (number, after) = rest.split_at(digits_end);

        let after = after.trim_start();
        let unit_end = after
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(after.len());
        if unit_end == 0 {
            return None;
        }
        let (unit, after) = after.split_at(unit_end);

        pairs.push((number, unit));
        rest = after.trim_start();
    }

    if pairs.is_empty() {
        None
    } else {
        Some(pairs)
    }
}

/// Find the first `<integer><unit>` pair anywhere in a token whose unit is
/// not a known alias.
///
/// Used once a token has failed both as a duration and as a datetime, so
/// that `3d 5xyz foo` still reports the bad unit.
pub(crate) fn find_unsupported_unit(token: &str) -> Option<&str> {
    let mut rest = token;

    while let Some(start) = rest.find(|c: char| c.is_ascii_digit()) {
        let digits = &rest[start..];
        let digits_end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());

        let after = digits[digits_end..].trim_start();
        let unit_end = after
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(after.len());
        let unit = &after[..unit_end];
        if !unit.is_empty() && parse_unit(unit).is_none() {
            return Some(unit);
        }
        rest = &after[unit_end..];
    }

    None
}

/// Parse a duration literal into its per-unit sums.
///
/// Returns `Ok(None)` when the token is not a duration literal at all.
///
/// # Errors
///
/// Returns [`EvaluationError::UnsupportedUnit`] for an unknown unit in an
/// otherwise well-formed literal (e.g. `"5xyz"`), or
/// [`EvaluationError::OutOfRange`] if a number overflows.
pub fn parse_duration_parts(token: &str) -> Result<Option<DurationParts>> {
    let Some(pairs) = scan_pairs(token) else {
        return Ok(None);
    };

    let mut parts = DurationParts::default();
    for (number, unit) in pairs {
        let unit_kind =
            parse_unit(unit).ok_or_else(|| EvaluationError::UnsupportedUnit(unit.to_string()))?;
        let n: i64 = number.parse().map_err(|_| {
            EvaluationError::OutOfRange(format!("'{number}' in '{}'", token.trim()))
        })?;

        let (slot, factor) = match unit_kind {
            Unit::Week => (&mut parts.days, 7),
            Unit::Day => (&mut parts.days, 1),
            Unit::Hour => (&mut parts.hours, 1),
            Unit::Minute => (&mut parts.minutes, 1),
            Unit::Second => (&mut parts.seconds, 1),
        };
        let summed = n.checked_mul(factor).and_then(|v| slot.checked_add(v));
        *slot = summed.ok_or_else(|| {
            EvaluationError::OutOfRange(format!("'{number}{unit}' in '{}'", token.trim()))
        })?;
    }

    Ok(Some(parts))
}

/// Parse a duration literal into a single merged [`TimeDelta`].
///
/// Returns `Ok(None)` when the token is not a duration literal, letting the
/// caller try other interpretations.
///
/// # Examples
///
/// ```
/// use dtcalc::duration::parse_duration;
///
/// let d = parse_duration("3w4d").unwrap().unwrap();
/// assert_eq!(d.num_days(), 25);
/// assert!(parse_duration("today").unwrap().is_none());
/// ```
pub fn parse_duration(token: &str) -> Result<Option<TimeDelta>> {
    parse_duration_parts(token)?
        .map(DurationParts::to_time_delta)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(token: &str) -> DurationParts {
        parse_duration_parts(token).unwrap().unwrap()
    }

    #[test]
    fn test_every_alias() {
        for alias in ["w", "week", "weeks"] {
            assert_eq!(parts(&format!("2{alias}")).days, 14, "{alias}");
        }
        for alias in ["d", "day", "days"] {
            assert_eq!(parts(&format!("2{alias}")).days, 2, "{alias}");
        }
        for alias in ["h", "hr", "hour", "hours"] {
            assert_eq!(parts(&format!("2{alias}")).hours, 2, "{alias}");
        }
        for alias in ["m", "min", "minute", "minutes"] {
            assert_eq!(parts(&format!("2{alias}")).minutes, 2, "{alias}");
        }
        for alias in ["s", "sec", "second", "seconds"] {
            assert_eq!(parts(&format!("2{alias}")).seconds, 2, "{alias}");
        }
    }

    #[test]
    fn test_units_case_insensitive() {
        assert_eq!(parts("3D").days, 3);
        assert_eq!(parts("2 Hours").hours, 2);
        assert_eq!(parts("1WEEK").days, 7);
    }

    #[test]
    fn test_concatenated_pairs() {
        let p = parts("3w4d");
        assert_eq!(p.days, 25);
        assert_eq!(p.hours, 0);
    }

    #[test]
    fn test_whitespace_between_number_and_unit() {
        assert_eq!(parts("3 days"), parts("3d"));
        assert_eq!(parts("3 d"), parts("3d"));
    }

    #[test]
    fn test_whitespace_between_pairs() {
        let p = parts("3h 15m");
        assert_eq!(p.hours, 3);
        assert_eq!(p.minutes, 15);
    }

    #[test]
    fn test_repeated_units_sum() {
        assert_eq!(parts("1d 2d 1w").days, 10);
        assert_eq!(parts("30m30m").minutes, 60);
    }

    #[test]
    fn test_components_are_not_normalized() {
        let p = parts("90m");
        assert_eq!(p.minutes, 90);
        assert_eq!(p.hours, 0);
    }

    #[test]
    fn test_merged_duration() {
        let d = parse_duration("1d2h3m4s").unwrap().unwrap();
        assert_eq!(d.num_seconds(), 86_400 + 2 * 3_600 + 3 * 60 + 4);
    }

    #[test]
    fn test_zero_is_a_duration() {
        let d = parse_duration("0d").unwrap().unwrap();
        assert!(d.is_zero());
    }

    #[test]
    fn test_unsupported_unit() {
        assert_eq!(
            parse_duration("5xyz").unwrap_err(),
            EvaluationError::UnsupportedUnit("xyz".to_string())
        );
    }

    #[test]
    fn test_unsupported_unit_after_valid_pair() {
        assert_eq!(
            parse_duration("3d 2years").unwrap_err(),
            EvaluationError::UnsupportedUnit("years".to_string())
        );
    }

    #[test]
    fn test_unsupported_unit_keeps_case() {
        assert_eq!(
            parse_duration("2Months").unwrap_err(),
            EvaluationError::UnsupportedUnit("Months".to_string())
        );
    }

    #[test]
    fn test_not_a_duration() {
        for token in ["today", "now", "", "   ", "d", "abc", "3", "2024-01-01", "Jan/02/2024"] {
            assert_eq!(parse_duration(token).unwrap(), None, "{token:?}");
        }
    }

    #[test]
    fn test_datetime_with_meridiem_is_not_a_duration() {
        assert_eq!(parse_duration("2024-01-01 10:30 PM").unwrap(), None);
        assert_eq!(parse_duration("12/25/2024 10:30:15 AM").unwrap(), None);
    }

    #[test]
    fn test_trailing_garbage_is_not_a_duration() {
        assert_eq!(parse_duration("3d foo").unwrap(), None);
        assert_eq!(parse_duration("3d-").unwrap(), None);
        assert_eq!(parse_duration("-3d").unwrap(), None);
    }

    #[test]
    fn test_find_unsupported_unit() {
        assert_eq!(find_unsupported_unit("3d 5xyz foo"), Some("xyz"));
        assert_eq!(find_unsupported_unit("2024-01-01 5xyz"), Some("xyz"));
        assert_eq!(find_unsupported_unit("foo 3 fortnights"), Some("fortnights"));
    }

    #[test]
    fn test_find_unsupported_unit_skips_known_units() {
        assert_eq!(find_unsupported_unit("3d foo"), None);
        assert_eq!(find_unsupported_unit("today -3d"), None);
        assert_eq!(find_unsupported_unit("10:00:00"), None);
        assert_eq!(find_unsupported_unit("tomorrow"), None);
        assert_eq!(find_unsupported_unit(""), None);
    }

    #[test]
    fn test_number_overflow() {
        assert!(matches!(
            parse_duration("99999999999999999999d"),
            Err(EvaluationError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_total_overflow() {
        assert!(matches!(
            parse_duration("9223372036854775807d"),
            Err(EvaluationError::OutOfRange(_))
        ));
    }
}
