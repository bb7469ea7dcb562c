//! # Job News
//!
//! Collects employment news about foreign workers from Naver News search,
//! keeps one deduplicated snapshot of the most recent collection, and derives
//! ranked per-day summaries from it.
//!
//! ## Architecture
//!
//! Collection (one linear run, no resume):
//! 1. **Search**: one request per keyword, one keyword at a time ([`scrapers`])
//! 2. **Parse**: article blocks → [`RawItem`](models::RawItem)s, bad blocks skipped
//! 3. **Dates**: source date text → absolute timestamps ([`dates`]), then
//!    the lookback window is applied
//! 4. **Dedup**: first record per exact title wins ([`dedup`])
//! 5. **Save**: overwrite the snapshot ([`store`])
//!
//! Query (pure, repeatable against one loaded snapshot): window filter →
//! day grouping → scoring → per-day top K ([`digest`]).
//!
//! ## Entry points
//!
//! - [`Store::load`]: the current snapshot (empty if missing or unreadable)
//! - [`collect_all_news`]: a fresh collection, not persisted
//! - [`Store::save`]: commit a collection as the new snapshot

pub mod cache;
pub mod collector;
pub mod config;
pub mod dates;
pub mod dedup;
pub mod digest;
pub mod error;
pub mod models;
pub mod outputs;
pub mod scrapers;
pub mod store;
pub mod utils;

pub use cache::SnapshotCache;
pub use collector::{CollectionSummary, collect_all_news, run_collection};
pub use config::Config;
pub use models::NewsRecord;
pub use scrapers::naver::NaverSearch;
pub use store::Store;
