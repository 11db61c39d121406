//! Reading and writing wall-clock times as typed by people.
//!
//! Accepts `9:30`, `09:30` and `9.30`. Nothing is range checked, so `99:99`
//! is simply 6039 minutes; callers decide what an out-of-day value means.

use timetable_ast::TimeOfDay;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    #[error("no duration given")]
    Empty,
    #[error("not a number of minutes: {0:?}")]
    Invalid(String),
}

/// Reads the integer at the front of `s`, ignoring whatever follows it.
///
/// Leading whitespace and one `+`/`-` sign are allowed. Returns `None` when
/// no digit follows, or when the value does not fit an `i64`.
fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);
    if digits.is_empty() {
        return None;
    }

    let value = digits.parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

pub fn parse_time_to_minutes(input: &str) -> Option<TimeOfDay> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    let s = s.replacen('.', ":", 1);
    let mut segments = s.split(':');
    let hours = leading_int(segments.next()?)?;
    let minutes = match segments.next() {
        Some(segment) => leading_int(segment)?,
        None => 0,
    };

    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .map(TimeOfDay)
}

/// Renders `mins` as `HH:MM`, wrapping into a single day first.
pub fn format_minutes(mins: i64) -> String {
    TimeOfDay(mins).to_string()
}

pub fn parse_duration(input: &str) -> Result<i64, DurationError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(DurationError::Empty);
    }
    leading_int(s).ok_or_else(|| DurationError::Invalid(s.to_string()))
}

/// Splits a comma separated list, dropping blank entries. Order and
/// duplicates are kept.
pub fn parse_subjects(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .map(|x| x.to_string())
        .collect()
}
