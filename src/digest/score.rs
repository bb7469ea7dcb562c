//! Heuristic popularity score.
//!
//! The score is a plain sum with no cap and no normalization:
//!
//! | Condition | Points |
//! |-----------|--------|
//! | each distinct importance term in the title | +10 |
//! | summary longer than 50 characters | +5 |
//! | press name contains a major outlet | +15 |
//! | published less than 24h ago | +10 |
//! | published 24h to 48h ago | +5 |

use crate::config::ScoringConfig;
use crate::models::NewsRecord;
use chrono::{NaiveDateTime, TimeDelta};
use itertools::Itertools;

const TERM_POINTS: u32 = 10;
const SUMMARY_POINTS: u32 = 5;
const SUMMARY_MIN_CHARS: usize = 50;
const OUTLET_POINTS: u32 = 15;

/// Score `record` as of `now`.
pub fn score(record: &NewsRecord, now: NaiveDateTime, scoring: &ScoringConfig) -> u32 {
    let terms = scoring
        .importance_terms
        .iter()
        .filter(|term| !term.is_empty())
        .unique()
        .filter(|term| record.title.contains(term.as_str()))
        .count() as u32;

    let summary = if record.summary.chars().count() > SUMMARY_MIN_CHARS {
        SUMMARY_POINTS
    } else {
        0
    };

    let outlet = if scoring
        .major_outlets
        .iter()
        .any(|name| !name.is_empty() && record.press.contains(name.as_str()))
    {
        OUTLET_POINTS
    } else {
        0
    };

    terms * TERM_POINTS + summary + outlet + recency_points(now - record.parsed_date)
}

fn recency_points(age: TimeDelta) -> u32 {
    if age < TimeDelta::hours(24) {
        10
    } else if age < TimeDelta::hours(48) {
        5
    } else {
        0
    }
}
