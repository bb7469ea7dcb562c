//! Calendar-day grouping.

use crate::config::DefaultedDatePolicy;
use crate::models::{DateConfidence, NewsRecord};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

/// Records bucketed by the local calendar day of `parsed_date`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyDigest {
    pub counts: BTreeMap<NaiveDate, usize>,
    /// Each day's records in the order they were given.
    pub records: BTreeMap<NaiveDate, Vec<NewsRecord>>,
}

impl DailyDigest {
    pub fn days(&self) -> impl DoubleEndedIterator<Item = &NaiveDate> {
        self.records.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Group `records` (expected newest first) by day.
///
/// With [`DefaultedDatePolicy::Exclude`], records whose date could not be read
/// from the source are left out entirely.
pub fn group_by_day(records: &[NewsRecord], policy: DefaultedDatePolicy) -> DailyDigest {
    let mut digest = DailyDigest::default();
    let mut excluded = 0usize;

    for record in records {
        if policy == DefaultedDatePolicy::Exclude
            && record.date_confidence() == DateConfidence::Defaulted
        {
            excluded += 1;
            continue;
        }
        let day = record.parsed_date.date();
        *digest.counts.entry(day).or_insert(0) += 1;
        digest.records.entry(day).or_default().push(record.clone());
    }

    debug!(days = digest.records.len(), excluded, "Grouped records by day");
    digest
}
