//! The query pipeline: window filter → keyword filter → newest-first sort →
//! day grouping → scoring → per-day top K.
//!
//! Everything here is pure. It performs no I/O and can be run any number of
//! times against one loaded snapshot.
//!
//! # Submodules
//!
//! - [`filter`]: lookback window, keyword selection, ordering
//! - [`daily`]: grouping by calendar day
//! - [`score`]: the popularity heuristic
//! - [`top`]: top-K selection per day

pub mod daily;
pub mod filter;
pub mod score;
pub mod top;

use crate::config::{Config, DefaultedDatePolicy, ScoringConfig};
use crate::models::NewsRecord;
use chrono::{NaiveDate, NaiveDateTime};
use daily::{DailyDigest, group_by_day};
use filter::{filter_by_keywords, filter_by_window, sort_newest_first};
use std::collections::{BTreeMap, HashSet};
use top::{ScoredRecord, score_days, top_by_day};

/// Headline numbers for a filtered record set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overview {
    pub total: usize,
    pub latest: Option<NaiveDateTime>,
    /// Distinct non-empty press names.
    pub press_count: usize,
}

impl Overview {
    pub fn of(records: &[NewsRecord]) -> Self {
        Self {
            total: records.len(),
            latest: records.iter().map(|r| r.parsed_date).max(),
            press_count: records
                .iter()
                .filter(|r| !r.press.is_empty())
                .map(|r| r.press.as_str())
                .collect::<HashSet<_>>()
                .len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportQuery {
    pub days: u32,
    /// Empty means every keyword.
    pub keywords: Vec<String>,
    pub top_k: usize,
    pub defaulted_dates: DefaultedDatePolicy,
}

impl ReportQuery {
    pub fn from_config(config: &Config) -> Self {
        Self {
            days: config.lookback_days,
            keywords: Vec::new(),
            top_k: config.top_k,
            defaulted_dates: config.defaulted_dates,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub query: ReportQuery,
    pub overview: Overview,
    pub digest: DailyDigest,
    pub top: BTreeMap<NaiveDate, Vec<ScoredRecord>>,
}

/// Run the whole query pipeline over `records` as of `now`.
///
/// The overview describes the records the digest actually kept, so it
/// agrees with the per-day counts under either defaulted-date policy.
pub fn build_report(
    records: &[NewsRecord],
    query: &ReportQuery,
    now: NaiveDateTime,
    scoring: &ScoringConfig,
) -> Report {
    let windowed = filter_by_window(records, query.days, now);
    let mut selected = filter_by_keywords(windowed, &query.keywords);
    sort_newest_first(&mut selected);

    let digest = group_by_day(&selected, query.defaulted_dates);
    let scores = score_days(&digest, now, scoring);
    let top = top_by_day(&digest, &scores, query.top_k);
    let kept: Vec<NewsRecord> = digest.records.values().flatten().cloned().collect();

    Report {
        query: query.clone(),
        overview: Overview::of(&kept),
        digest,
        top,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    pub(crate) fn reference_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 8)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    /// A record collected at [`reference_now`] and published `hours_ago` before it.
    pub(crate) fn record(title: &str, hours_ago: i64) -> NewsRecord {
        let now = reference_now();
        NewsRecord {
            title: title.to_string(),
            summary: String::new(),
            press: String::new(),
            display_date: format!("{hours_ago}시간 전"),
            link: format!("https://news.example/{title}"),
            parsed_date: now - TimeDelta::hours(hours_ago),
            keyword: "외국인 알바".to_string(),
            collected_at: now,
        }
    }

    fn query(days: u32) -> ReportQuery {
        ReportQuery {
            days,
            keywords: Vec::new(),
            top_k: 3,
            defaulted_dates: DefaultedDatePolicy::Include,
        }
    }

    #[test]
    fn test_overview() {
        let mut a = record("a", 1);
        a.press = "KBS".to_string();
        let mut b = record("b", 5);
        b.press = "KBS".to_string();
        let mut c = record("c", 30);
        c.press = "MBC".to_string();
        let d = record("d", 2);

        let overview = Overview::of(&[b, a, c, d]);
        assert_eq!(overview.total, 4);
        assert_eq!(overview.press_count, 2);
        assert_eq!(overview.latest, Some(reference_now() - TimeDelta::hours(1)));
        assert_eq!(Overview::of(&[]).latest, None);
    }

    #[test]
    fn test_report_ranks_each_day() {
        // 12:00 reference: 1-11h ago is today, 13-35h ago is yesterday
        let mut strong = record("외국인 알바 채용 모집", 2);
        strong.press = "연합뉴스".to_string();
        let weak = record("외국인 관련 소식", 1);
        let mid = record("외국인 구인", 3);
        let extra = record("외국인 상시 모집", 4);
        let yesterday = record("외국인 채용", 20);
        let too_old = record("외국인 대량 채용", 24 * 10);

        let records = vec![weak, yesterday, strong, mid, extra, too_old];
        let report = build_report(&records, &query(7), reference_now(), &ScoringConfig::default());

        assert_eq!(report.overview.total, 5);
        assert_eq!(report.digest.counts.len(), 2);

        let today = reference_now().date();
        let ranked: Vec<(&str, u32)> = report.top[&today]
            .iter()
            .map(|s| (s.record.title.as_str(), s.score))
            .collect();
        assert_eq!(
            ranked,
            vec![
                ("외국인 알바 채용 모집", 45),
                ("외국인 상시 모집", 30),
                ("외국인 구인", 20),
            ]
        );
        assert_eq!(report.digest.counts[&today], 4);

        let yesterday_day = today.pred_opt().unwrap();
        assert_eq!(report.top[&yesterday_day].len(), 1);
        assert_eq!(report.top[&yesterday_day][0].score, 20);
    }

    #[test]
    fn test_report_keyword_selection() {
        let mut other = record("다른 키워드 기사", 1);
        other.keyword = "외국인 채용".to_string();
        let records = vec![record("기본 키워드 기사", 1), other];

        let mut q = query(7);
        q.keywords = vec!["외국인 채용".to_string()];
        let report = build_report(&records, &q, reference_now(), &ScoringConfig::default());
        assert_eq!(report.overview.total, 1);
        assert_eq!(
            report.top.values().next().unwrap()[0].record.title,
            "다른 키워드 기사"
        );
    }

    #[test]
    fn test_overview_matches_digest_when_defaulted_dates_excluded() {
        let mut undated = record("외국인 채용 지면 기사", 0);
        undated.display_date = "A1면 1단".to_string();
        undated.press = "MBC".to_string();
        let mut dated = record("외국인 모집", 3);
        dated.press = "KBS".to_string();
        let records = vec![undated, dated];

        let mut q = query(7);
        q.defaulted_dates = DefaultedDatePolicy::Exclude;
        let report = build_report(&records, &q, reference_now(), &ScoringConfig::default());

        assert_eq!(report.overview.total, 1);
        assert_eq!(report.overview.total, report.digest.counts.values().sum::<usize>());
        assert_eq!(report.overview.press_count, 1);
        assert_eq!(report.overview.latest, Some(reference_now() - TimeDelta::hours(3)));

        q.defaulted_dates = DefaultedDatePolicy::Include;
        let report = build_report(&records, &q, reference_now(), &ScoringConfig::default());
        assert_eq!(report.overview.total, 2);
        assert_eq!(report.overview.latest, Some(reference_now()));
    }

    #[test]
    fn test_report_is_idempotent() {
        let records = vec![record("외국인 채용", 1), record("외국인 모집", 30)];
        let q = query(3);
        let first = build_report(&records, &q, reference_now(), &ScoringConfig::default());
        let second = build_report(&records, &q, reference_now(), &ScoringConfig::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_query_from_config() {
        let config = Config::default();
        let q = ReportQuery::from_config(&config);
        assert_eq!(q.days, 7);
        assert_eq!(q.top_k, 3);
        assert!(q.keywords.is_empty());
    }
}
