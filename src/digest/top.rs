//! Per-day top-K selection.

use crate::config::ScoringConfig;
use crate::digest::daily::DailyDigest;
use crate::digest::score::score;
use crate::models::NewsRecord;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredRecord {
    pub score: u32,
    pub record: NewsRecord,
}

/// Scores for every record in `digest`, aligned with `digest.records`.
pub fn score_days(
    digest: &DailyDigest,
    now: NaiveDateTime,
    scoring: &ScoringConfig,
) -> BTreeMap<NaiveDate, Vec<u32>> {
    digest
        .records
        .iter()
        .map(|(day, records)| (*day, records.iter().map(|r| score(r, now, scoring)).collect()))
        .collect()
}

/// The `k` highest-scoring records of each day, highest first.
///
/// Equal scores keep the order the day's records already had. A day missing
/// from `scores` scores every record 0.
pub fn top_by_day(
    digest: &DailyDigest,
    scores: &BTreeMap<NaiveDate, Vec<u32>>,
    k: usize,
) -> BTreeMap<NaiveDate, Vec<ScoredRecord>> {
    digest
        .records
        .iter()
        .map(|(day, records)| {
            let day_scores = scores.get(day);
            let mut scored: Vec<ScoredRecord> = records
                .iter()
                .enumerate()
                .map(|(i, record)| ScoredRecord {
                    score: day_scores.and_then(|s| s.get(i)).copied().unwrap_or(0),
                    record: record.clone(),
                })
                .collect();
            // sort_by is stable
            scored.sort_by(|a, b| b.score.cmp(&a.score));
            scored.truncate(k);
            (*day, scored)
        })
        .collect()
}
