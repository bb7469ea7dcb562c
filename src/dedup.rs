//! Run-wide duplicate removal.
//!
//! Two records are duplicates when their titles are byte-for-byte equal.
//! No case folding or whitespace normalization is applied, so headlines that
//! differ only in punctuation are both kept.

use crate::models::NewsRecord;
use itertools::Itertools;
use tracing::debug;

/// Keep the first record for each title, preserving encounter order.
pub fn dedup_by_title(records: Vec<NewsRecord>) -> Vec<NewsRecord> {
    let before = records.len();
    let unique = records
        .into_iter()
        .unique_by(|r| r.title.clone())
        .collect::<Vec<_>>();
    debug!(before, after = unique.len(), "Removed duplicate titles");
    unique
}
