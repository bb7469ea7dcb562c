//! # Job News
//!
//! Standalone entry point.
//!
//! ## Usage
//!
//! ```sh
//! job_news                      # collect and save, then print per-keyword counts
//! job_news report --days 3      # ranked daily summary of the saved snapshot
//! ```
//!
//! Logging goes to stderr through `tracing`; set `RUST_LOG=debug` for
//! per-item parse details.

use chrono::Local;
use clap::Parser;
use job_news::digest::{ReportQuery, build_report};
use job_news::outputs::report::render_markdown;
use job_news::{Config, NaverSearch, SnapshotCache, Store, run_collection};
use std::error::Error;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(snapshot) = args.snapshot.clone() {
        config.snapshot_path = snapshot;
    }
    let store = Store::new(&config.snapshot_path);

    match args.command() {
        Command::Collect => {
            let source = NaverSearch::new(&config)?;
            let summary = run_collection(&source, &store, &config).await;

            println!("\n=== Collection complete ===");
            println!("Total articles: {}", summary.total);
            println!("\nArticles per keyword:");
            for (keyword, count) in &summary.per_keyword {
                println!("  {keyword}: {count}");
            }
            if !summary.saved {
                warn!(path = %store.path().display(), "Snapshot was not written");
            }
        }
        Command::Report { days, keywords } => {
            let mut cache = SnapshotCache::from_config(&config);
            let records = cache.get(std::time::Instant::now()).await;
            if records.is_empty() {
                warn!("No saved news data; run `job_news collect` first");
            }

            let mut query = ReportQuery::from_config(&config);
            if let Some(days) = days {
                query.days = days;
            }
            query.keywords = keywords;

            let report = build_report(
                &records,
                &query,
                Local::now().naive_local(),
                &config.scoring,
            );
            print!("{}", render_markdown(&report));
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );
    Ok(())
}
