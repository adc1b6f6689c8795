//! Shift arithmetic: worked minutes, signed hour formatting, clock helpers and
//! advisory shift validation.
//!
//! Nothing here returns an error. Bad input degrades to `0`, `""` or `None`
//! and leaves a warning in the log.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use std::fmt;
use tracing::warn;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const NAIVE_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M",
];

/// Parse a stored timestamp.
///
/// Accepts RFC 3339 (converted to local time) and the naive ISO forms.
/// Empty input is simply "absent"; anything else that fails is logged.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    warn!(value = s, "unparseable timestamp, treating as absent");
    None
}

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Whole minutes between entry and exit, rounded down.
///
/// 0 when either side is missing or when exit is before entry.
pub fn worked_minutes(entry: Option<NaiveDateTime>, exit: Option<NaiveDateTime>) -> i64 {
    match (entry, exit) {
        (Some(start), Some(end)) if end >= start => {
            (end - start).num_milliseconds().div_euclid(60_000)
        }
        _ => 0,
    }
}

/// Same as [`worked_minutes`] on raw stored strings.
pub fn worked_minutes_str(entry: &str, exit: &str) -> i64 {
    worked_minutes(parse_timestamp(entry), parse_timestamp(exit))
}

/// Signed balance: `0:00h`, `+1:30h`, `-0:45h`. Hours are not capped at 24.
pub fn format_minutes(minutes: i64) -> String {
    if minutes == 0 {
        return "0:00h".to_string();
    }

    let sign = if minutes > 0 { "+" } else { "-" };
    let abs = minutes.unsigned_abs();
    format!("{}{}:{:02}h", sign, abs / 60, abs % 60)
}

/// Unsigned duration: `8:00h`, `0:45h`.
pub fn format_hours(minutes: i64) -> String {
    let abs = minutes.max(0);
    format!("{}:{:02}h", abs / 60, abs % 60)
}

/// `HH:MM` of a timestamp, empty string when absent.
pub fn format_clock(ts: Option<NaiveDateTime>) -> String {
    ts.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_default()
}

/// Combine a date with an `HH:MM` clock string.
pub fn parse_clock_into_timestamp(date: NaiveDate, clock: &str) -> Option<NaiveDateTime> {
    let c = clock.trim();
    if c.is_empty() {
        return None;
    }

    match NaiveTime::parse_from_str(c, "%H:%M") {
        Ok(t) => Some(date.and_time(t)),
        Err(_) => {
            warn!(value = c, %date, "unparseable clock time, treating as absent");
            None
        }
    }
}

/// Move a timestamp onto another date, keeping its clock time.
pub fn rebase_to_date(ts: NaiveDateTime, date: NaiveDate) -> NaiveDateTime {
    date.and_time(ts.time())
}

/// Thresholds for advisory shift validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftLimits {
    pub max_minutes: i64,
    pub min_minutes: i64,
}

impl Default for ShiftLimits {
    fn default() -> Self {
        Self {
            max_minutes: 12 * 60,
            min_minutes: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftIssue {
    ExitNotAfterEntry,
    ExceedsMaximum { max_minutes: i64 },
    ImplausiblyShort { min_minutes: i64 },
}

impl fmt::Display for ShiftIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftIssue::ExitNotAfterEntry => write!(f, "exit must be after entry"),
            ShiftIssue::ExceedsMaximum { max_minutes } if max_minutes % 60 == 0 => {
                write!(f, "shift exceeds {} hours", max_minutes / 60)
            }
            ShiftIssue::ExceedsMaximum { max_minutes } => {
                write!(f, "shift exceeds {}", format_hours(*max_minutes))
            }
            ShiftIssue::ImplausiblyShort { .. } => write!(f, "shift implausibly short"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftValidation {
    pub valid: bool,
    pub issue: Option<ShiftIssue>,
}

impl ShiftValidation {
    fn ok() -> Self {
        Self {
            valid: true,
            issue: None,
        }
    }

    fn invalid(issue: ShiftIssue) -> Self {
        Self {
            valid: false,
            issue: Some(issue),
        }
    }

    pub fn reason(&self) -> Option<String> {
        self.issue.map(|i| i.to_string())
    }
}

/// Advisory check with the default limits (12 hours, 30 minutes).
pub fn validate_shift(entry: Option<NaiveDateTime>, exit: Option<NaiveDateTime>) -> ShiftValidation {
    validate_shift_with(entry, exit, &ShiftLimits::default())
}

/// An in-progress record (either side missing) is always valid.
pub fn validate_shift_with(
    entry: Option<NaiveDateTime>,
    exit: Option<NaiveDateTime>,
    limits: &ShiftLimits,
) -> ShiftValidation {
    let (Some(start), Some(end)) = (entry, exit) else {
        return ShiftValidation::ok();
    };

    if end <= start {
        return ShiftValidation::invalid(ShiftIssue::ExitNotAfterEntry);
    }

    let duration = end - start;

    if duration > TimeDelta::minutes(limits.max_minutes) {
        return ShiftValidation::invalid(ShiftIssue::ExceedsMaximum {
            max_minutes: limits.max_minutes,
        });
    }

    if duration < TimeDelta::minutes(limits.min_minutes) {
        return ShiftValidation::invalid(ShiftIssue::ImplausiblyShort {
            min_minutes: limits.min_minutes,
        });
    }

    ShiftValidation::ok()
}
