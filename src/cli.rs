//! Command-line interface definitions.
//!
//! Running with no subcommand performs one collection run, exactly like
//! `job_news collect`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the job news collector.
///
/// # Examples
///
/// ```sh
/// # Collect with built-in defaults, writing ./news_data.json
/// job_news
///
/// # Collect with a config file and a custom snapshot location
/// job_news -c job_news.yaml -s /var/lib/job_news/news_data.json collect
///
/// # Ranked daily summary of the last 3 days for one keyword
/// job_news report --days 3 --keyword "외국인 알바"
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Snapshot file, overriding the config's `snapshot_path`
    #[arg(short, long, env = "JOB_NEWS_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Search every keyword, deduplicate, and overwrite the snapshot
    Collect,
    /// Print per-day counts and top articles from the current snapshot
    Report {
        /// Lookback window in days (defaults to the config's `lookback_days`)
        #[arg(short, long)]
        days: Option<u32>,

        /// Only include articles found by this keyword (repeatable)
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,
    },
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Collect)
    }
}
