//! Working-day arithmetic for drip release.
//!
//! A working day is a calendar day that is not Saturday, not Sunday and not
//! a declared holiday. Every function here works on UTC calendar days;
//! timestamps must go through [`to_utc_day`] first so a client's local
//! time-of-day never shifts a count.

use std::collections::HashSet;

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};

use crate::error::CoreError;
use crate::types::{Day, Timestamp};

/// The set of declared holiday dates.
pub type HolidaySet = HashSet<Day>;

/// Accepted textual form for a bare date.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Truncate a UTC timestamp to its calendar day.
pub fn to_utc_day(ts: Timestamp) -> Day {
    ts.date_naive()
}

/// The current UTC calendar day.
pub fn today_utc() -> Day {
    Utc::now().date_naive()
}

/// Parse a user-supplied date.
///
/// Accepts either a bare `YYYY-MM-DD` date or an RFC 3339 timestamp. A
/// timestamp is converted to UTC before truncation, so
/// `2024-01-03T23:30:00-05:00` is the UTC day `2024-01-04`.
pub fn parse_day(input: &str) -> Result<Day, CoreError> {
    let trimmed = input.trim();

    if let Ok(day) = NaiveDate::parse_from_str(trimmed, DAY_FORMAT) {
        return Ok(day);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|_| {
            CoreError::Validation(format!(
                "Invalid date '{trimmed}'. Expected YYYY-MM-DD or an RFC 3339 timestamp"
            ))
        })
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Saturday or Sunday.
pub fn is_weekend(day: Day) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Whether `day` counts toward drip release.
pub fn is_working_day(day: Day, holidays: &HolidaySet) -> bool {
    !is_weekend(day) && !holidays.contains(&day)
}

// ---------------------------------------------------------------------------
// Counting
// ---------------------------------------------------------------------------

/// Number of Monday-Friday days in the inclusive range `[start, end]`.
///
/// Caller guarantees `start <= end`.
fn weekdays_between(start: Day, end: Day) -> i64 {
    let total = (end - start).num_days() + 1;
    let full_weeks = total / 7;
    let remainder = total % 7;

    // The leftover days run from `start`'s weekday onward, wrapping at Sunday.
    let first = i64::from(start.weekday().num_days_from_monday());
    let leftover = (0..remainder)
        .filter(|offset| (first + offset) % 7 < 5)
        .count() as i64;

    full_weeks * 5 + leftover
}

/// Count working days from `reference` through `today`, both inclusive.
///
/// Returns `0` when `today` is before `reference`. Holidays that fall on a
/// weekend or outside the range do not affect the result.
pub fn count_working_days(reference: Day, today: Day, holidays: &HolidaySet) -> i64 {
    if today < reference {
        return 0;
    }

    let weekday_holidays = holidays
        .iter()
        .filter(|&&h| h >= reference && h <= today && !is_weekend(h))
        .count() as i64;

    weekdays_between(reference, today) - weekday_holidays
}

/// The calendar date of the `n`-th working day at or after `reference`.
///
/// Inverse of [`count_working_days`]: for `n >= 1`,
/// `count_working_days(reference, nth_working_day(reference, n), h) == n`.
/// Returns `None` for `n < 1`.
pub fn nth_working_day(reference: Day, n: i64, holidays: &HolidaySet) -> Option<Day> {
    if n < 1 {
        return None;
    }
    let skip = usize::try_from(n - 1).ok()?;
    reference
        .iter_days()
        .filter(|&day| is_working_day(day, holidays))
        .nth(skip)
}
