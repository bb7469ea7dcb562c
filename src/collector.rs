//! The collection pipeline: search → parse → date normalization → window
//! check → dedup, once per keyword, strictly one keyword at a time.
//!
//! A keyword whose request fails contributes nothing and the run moves on.
//! After every keyword, successful or not, the collector pauses for the
//! configured request delay.

use crate::config::Config;
use crate::dates;
use crate::dedup::dedup_by_title;
use crate::models::NewsRecord;
use crate::scrapers::SearchSource;
use crate::scrapers::naver::parse_results;
use crate::store::Store;
use chrono::{Local, NaiveDateTime};
use futures::stream::{self, StreamExt};
use std::time::Instant;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument, warn};

/// Outcome of one collect-and-save cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSummary {
    pub total: usize,
    /// Non-zero counts in keyword order.
    pub per_keyword: Vec<(String, usize)>,
    /// `false` when the snapshot write failed. The run still completes.
    pub saved: bool,
}

/// Collect fresh records for every configured keyword.
///
/// Does not persist anything; see [`run_collection`].
pub async fn collect_all_news<S: SearchSource>(
    source: &S,
    config: &Config,
    lookback_days: u32,
) -> Vec<NewsRecord> {
    collect_all_news_at(source, config, lookback_days, Local::now().naive_local()).await
}

/// [`collect_all_news`] with an explicit run time.
///
/// `now` is used as `collected_at`, as the reference for relative dates, and
/// as the end of the lookback window.
#[instrument(level = "info", skip(source, config), fields(keywords = config.keywords.len()))]
pub async fn collect_all_news_at<S: SearchSource>(
    source: &S,
    config: &Config,
    lookback_days: u32,
    now: NaiveDateTime,
) -> Vec<NewsRecord> {
    let total_keywords = config.keywords.len();
    let window_start = dates::window_start(now, lookback_days);
    info!(%window_start, "Starting news collection");

    let per_keyword: Vec<Vec<NewsRecord>> = stream::iter(config.keywords.iter().enumerate())
        .then(|(i, keyword)| async move {
            info!(progress = %format!("{}/{}", i + 1, total_keywords), %keyword, "Searching");
            let records = collect_keyword(source, keyword, window_start, now).await;
            sleep(config.request_delay()).await;
            records
        })
        .collect()
        .await;

    let unique = dedup_by_title(per_keyword.into_iter().flatten().collect());
    info!(count = unique.len(), "Collected unique news records");
    unique
}

async fn collect_keyword<S: SearchSource>(
    source: &S,
    keyword: &str,
    window_start: NaiveDateTime,
    now: NaiveDateTime,
) -> Vec<NewsRecord> {
    let html = match source.search(keyword).await {
        Ok(html) => html,
        Err(e) => {
            error!(%keyword, error = %e, "Search failed; keyword contributes no records");
            return Vec::new();
        }
    };

    let items = parse_results(&html, source.endpoint());
    let found = items.len();
    let records: Vec<NewsRecord> = items
        .into_iter()
        .filter_map(|item| {
            let date = dates::normalize(&item.date_text, now);
            if date.at < window_start {
                debug!(title = %item.title, at = %date.at, "Outside lookback window; dropping");
                return None;
            }
            Some(NewsRecord::from_item(item, date.at, keyword, now))
        })
        .collect();

    info!(%keyword, found, kept = records.len(), "Search complete");
    records
}

/// Per-keyword record counts in keyword order, omitting keywords with none.
pub fn keyword_counts(records: &[NewsRecord], keywords: &[String]) -> Vec<(String, usize)> {
    keywords
        .iter()
        .map(|k| (k.clone(), records.iter().filter(|r| &r.keyword == k).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

/// Collect, then overwrite the snapshot.
///
/// A failed save is logged and reflected in [`CollectionSummary::saved`]
/// but does not fail the run.
#[instrument(level = "info", skip_all, fields(snapshot = %store.path().display()))]
pub async fn run_collection<S: SearchSource>(
    source: &S,
    store: &Store,
    config: &Config,
) -> CollectionSummary {
    let t0 = Instant::now();
    let records = collect_all_news(source, config, config.lookback_days).await;

    let saved = match store.save(&records).await {
        Ok(()) => true,
        Err(e) => {
            error!(error = %e, "Failed to save snapshot");
            false
        }
    };
    if !saved {
        warn!("Collection finished but the snapshot was not updated");
    }

    let summary = CollectionSummary {
        total: records.len(),
        per_keyword: keyword_counts(&records, &config.keywords),
        saved,
    };
    info!(
        total = summary.total,
        saved,
        secs = t0.elapsed().as_secs(),
        "Collection run complete"
    );
    summary
}
