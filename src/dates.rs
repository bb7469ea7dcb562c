//! Normalization of source date text into absolute timestamps.
//!
//! Search results show either a relative age (`"3시간 전"`, `"5 minutes ago"`)
//! or an absolute date (`"2024.01.01."`). Forms are tried in this order:
//!
//! 1. hours ago → `now - N hours`
//! 2. minutes ago → `now` (no sub-hour precision)
//! 3. days ago → `now - N days`
//! 4. `YYYY.MM.DD` → midnight of that date
//!
//! Anything else maps to `now` marked
//! [`Defaulted`](crate::models::DateConfidence::Defaulted).
//! [`normalize`] never fails.

use crate::models::NormalizedDate;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use once_cell::sync::Lazy;
use regex::Regex;

static HOURS_AGO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:(\d+)\s*)?(?:시간\s*전|hours?\s+ago)").expect("hours pattern")
});
static MINUTES_AGO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:(\d+)\s*)?(?:분\s*전|minutes?\s+ago|mins?\s+ago)")
        .expect("minutes pattern")
});
static DAYS_AGO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:(\d+)\s*)?(?:일\s*전|days?\s+ago)").expect("days pattern")
});
static DOTTED_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})\.(\d{1,2})\.(\d{1,2})").expect("dotted date pattern"));

/// Convert `text` into an absolute timestamp relative to `now`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use job_news::dates::normalize;
///
/// let now = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let three_hours = normalize("3 hours ago", now);
/// assert_eq!(three_hours.at.to_string(), "2024-01-01 09:00:00");
/// ```
pub fn normalize(text: &str, now: NaiveDateTime) -> NormalizedDate {
    let text = text.trim();

    if let Some(caps) = HOURS_AGO.captures(text) {
        return count(caps.get(1).map(|m| m.as_str()))
            .and_then(TimeDelta::try_hours)
            .and_then(|delta| now.checked_sub_signed(delta))
            .map(NormalizedDate::parsed)
            .unwrap_or_else(|| NormalizedDate::defaulted(now));
    }

    if let Some(caps) = MINUTES_AGO.captures(text) {
        return match count(caps.get(1).map(|m| m.as_str())) {
            Some(_) => NormalizedDate::parsed(now),
            None => NormalizedDate::defaulted(now),
        };
    }

    if let Some(caps) = DAYS_AGO.captures(text) {
        return count(caps.get(1).map(|m| m.as_str()))
            .and_then(TimeDelta::try_days)
            .and_then(|delta| now.checked_sub_signed(delta))
            .map(NormalizedDate::parsed)
            .unwrap_or_else(|| NormalizedDate::defaulted(now));
    }

    if let Some(caps) = DOTTED_DATE.captures(text) {
        let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
        return match (field(1), field(2), field(3)) {
            (Some(y), Some(m), Some(d)) => i32::try_from(y)
                .ok()
                .and_then(|y| NaiveDate::from_ymd_opt(y, m, d))
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(NormalizedDate::parsed)
                .unwrap_or_else(|| NormalizedDate::defaulted(now)),
            _ => NormalizedDate::defaulted(now),
        };
    }

    NormalizedDate::defaulted(now)
}

/// Earliest timestamp inside a window of `days` ending at `now`.
///
/// Shared by the collection-time lookback drop and the query-time filter.
pub fn window_start(now: NaiveDateTime, days: u32) -> NaiveDateTime {
    TimeDelta::try_days(i64::from(days))
        .and_then(|delta| now.checked_sub_signed(delta))
        .unwrap_or(NaiveDateTime::MIN)
}

fn count(digits: Option<&str>) -> Option<i64> {
    digits?.parse::<u32>().ok().map(i64::from)
}
