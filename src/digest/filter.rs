//! Record selection ahead of aggregation.

use crate::dates::window_start;
use crate::models::NewsRecord;
use chrono::NaiveDateTime;

/// Records whose `parsed_date` is no older than `days` before `now`.
///
/// Records whose date was defaulted to their collection time look recent and
/// pass for as long as the collection itself is inside the window.
pub fn filter_by_window(records: &[NewsRecord], days: u32, now: NaiveDateTime) -> Vec<NewsRecord> {
    let start = window_start(now, days);
    records
        .iter()
        .filter(|r| r.parsed_date >= start)
        .cloned()
        .collect()
}

/// Records produced by one of `selected` keywords. An empty selection keeps
/// everything.
pub fn filter_by_keywords(records: Vec<NewsRecord>, selected: &[String]) -> Vec<NewsRecord> {
    if selected.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|r| selected.contains(&r.keyword))
        .collect()
}

/// Stable newest-first ordering by `parsed_date`.
pub fn sort_newest_first(records: &mut [NewsRecord]) {
    records.sort_by(|a, b| b.parsed_date.cmp(&a.parsed_date));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::tests::record;
    use chrono::TimeDelta;

    #[test]
    fn test_window_keeps_boundary_and_newer() {
        let now = record("x", 0).collected_at;
        let records = vec![
            record("exactly 3 days", 72),
            record("just over", 73),
            record("fresh", 1),
        ];
        let kept = filter_by_window(&records, 3, now);
        let titles: Vec<&str> = kept.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["exactly 3 days", "fresh"]);
    }

    #[test]
    fn test_defaulted_dates_always_pass() {
        let mut undated = record("undated", 24 * 30);
        undated.display_date = String::new();
        undated.parsed_date = undated.collected_at;
        let now = undated.collected_at + TimeDelta::hours(2);

        assert_eq!(filter_by_window(&[undated], 1, now).len(), 1);
    }

    #[test]
    fn test_keyword_filter() {
        let mut a = record("a", 1);
        a.keyword = "외국인 알바".to_string();
        let mut b = record("b", 1);
        b.keyword = "외국인 채용".to_string();

        let all = filter_by_keywords(vec![a.clone(), b.clone()], &[]);
        assert_eq!(all.len(), 2);

        let only_b = filter_by_keywords(vec![a, b], &["외국인 채용".to_string()]);
        assert_eq!(only_b.len(), 1);
        assert_eq!(only_b[0].title, "b");
    }

    #[test]
    fn test_sort_newest_first_is_stable() {
        let mut records = vec![
            record("old", 30),
            record("tie-1", 5),
            record("new", 1),
            record("tie-2", 5),
        ];
        sort_newest_first(&mut records);
        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "tie-1", "tie-2", "old"]);
    }
}
