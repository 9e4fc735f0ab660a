//! Week-aligned day stepping for weekly recurrence evaluation.

use crate::datetime::CalDateTime;
use chrono::{Datelike, Weekday};

/// ## Summary
/// Advances `t` by `interval` weeks, then realigns backward onto
/// `week_start`.
///
/// When a recurrence's week-start day differs from the anchor date's
/// day-of-week, plain seven-day stepping drifts off the configured week
/// boundary; walking back to `week_start` removes that drift. The result
/// always falls on `week_start`.
#[must_use]
pub fn add_weeks(t: &CalDateTime, interval: i64, week_start: Weekday) -> CalDateTime {
    let mut stepped = t.clone().add_days(interval * 7);
    while stepped.naive().weekday() != week_start {
        stepped = stepped.add_days(-1);
    }
    stepped
}

/// Walks `t` backward to the nearest `week_start` day, returning the
/// realigned value and the number of days walked (0..=6).
#[must_use]
pub fn first_day_of_week(t: &CalDateTime, week_start: Weekday) -> (CalDateTime, u32) {
    let mut aligned = t.clone();
    let mut offset = 0;
    while aligned.naive().weekday() != week_start {
        aligned = aligned.add_days(-1);
        offset += 1;
    }
    (aligned, offset)
}
