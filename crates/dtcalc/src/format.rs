//! Rendering of evaluation results.
//!
//! [`format_value`] produces the human-readable line shown to users.
//! [`Report`] carries the same information in a serializable shape for
//! machine consumers.

use std::fmt;

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};
use serde::Serialize;

use crate::eval::Value;

/// Render an evaluation result.
///
/// Instants at exactly midnight render as `YYYY-MM-DD`, other instants as
/// `YYYY-MM-DD HH:MM:SS`. Durations render as a comma-separated list of
/// their non-zero day/hour/minute/second components, e.g.
/// `"1 day, 2 hours, 3 minutes, 4 seconds"`.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Duration(delta) => format_duration(*delta),
        Value::Instant(instant) => format_instant(instant),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_value(self))
    }
}

/// Render an instant, dropping the time when it is exactly midnight.
pub fn format_instant(instant: &NaiveDateTime) -> String {
    if instant.time() == NaiveTime::MIN {
        instant.format("%Y-%m-%d").to_string()
    } else {
        instant.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Render a duration.
///
/// A negative duration gets a single leading `-`; component magnitudes are
/// always unsigned. The zero duration renders as `"0 seconds"`.
pub fn format_duration(delta: TimeDelta) -> String {
    DurationInfo::from(delta).human_readable
}

// ── Reports ─────────────────────────────────────────────────────────────────

/// Decomposed duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationInfo {
    /// Total duration in seconds (negative for negative durations).
    pub total_seconds: i64,
    /// Days component of the absolute duration.
    pub days: i64,
    /// Hours component (0-23).
    pub hours: i64,
    /// Minutes component (0-59).
    pub minutes: i64,
    /// Seconds component (0-59).
    pub seconds: i64,
    /// Human-readable representation (e.g., "-2 days, 3 hours").
    pub human_readable: String,
}

impl From<TimeDelta> for DurationInfo {
    fn from(delta: TimeDelta) -> Self {
        let total_seconds = delta.num_seconds();
        let abs_seconds = total_seconds.unsigned_abs();

        let days = (abs_seconds / 86400) as i64;
        let remainder = abs_seconds % 86400;
        let hours = (remainder / 3600) as i64;
        let remainder = remainder % 3600;
        let minutes = (remainder / 60) as i64;
        let seconds = (remainder % 60) as i64;

        let sign = if total_seconds < 0 { "-" } else { "" };
        let human_readable = format!(
            "{sign}{}",
            format_human_duration(days, hours, minutes, seconds)
        );

        DurationInfo {
            total_seconds,
            days,
            hours,
            minutes,
            seconds,
            human_readable,
        }
    }
}

/// Calendar fields of an instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstantInfo {
    /// ISO 8601 date-time without offset (e.g., "2024-01-06T00:00:00").
    pub iso: String,
    /// "YYYY-MM-DD".
    pub date: String,
    /// "HH:MM:SS".
    pub time: String,
    /// The same rendering as [`format_instant`].
    pub human_readable: String,
}

impl From<NaiveDateTime> for InstantInfo {
    fn from(instant: NaiveDateTime) -> Self {
        InstantInfo {
            iso: instant.format("%Y-%m-%dT%H:%M:%S").to_string(),
            date: instant.format("%Y-%m-%d").to_string(),
            time: instant.format("%H:%M:%S").to_string(),
            human_readable: format_instant(&instant),
        }
    }
}

/// Serializable description of a [`Value`], tagged by `"kind"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Duration(DurationInfo),
    Instant(InstantInfo),
}

impl From<&Value> for Report {
    fn from(value: &Value) -> Self {
        match *value {
            Value::Duration(delta) => Report::Duration(delta.into()),
            Value::Instant(instant) => Report::Instant(instant.into()),
        }
    }
}

fn plural(n: i64, unit: &str) -> String {
    format!("{n} {unit}{}", if n == 1 { "" } else { "s" })
}

/// Join the non-zero components; all zero renders as "0 seconds".
fn format_human_duration(days: i64, hours: i64, minutes: i64, seconds: i64) -> String {
    let mut parts = Vec::new();
    if days > 0 {
        parts.push(plural(days, "day"));
    }
    if hours > 0 {
        parts.push(plural(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(plural(minutes, "minute"));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(plural(seconds, "second"));
    }
    parts.join(", ")
}
