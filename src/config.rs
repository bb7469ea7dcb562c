//! Runtime configuration.
//!
//! Every field has a default matching the production deployment, so the
//! binary runs without any file. A YAML file passed with `--config` may
//! override any subset of fields:
//!
//! ```yaml
//! lookback_days: 3
//! keywords:
//!   - 외국인 알바
//! scoring:
//!   major_outlets: [연합뉴스, KBS]
//! defaulted_dates: exclude
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, instrument};

/// What the aggregator does with records whose date text could not be read.
///
/// Such records carry the collection time as their date, so including them
/// makes the result look more recent than it is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultedDatePolicy {
    #[default]
    Include,
    Exclude,
}

/// Terms and outlets the popularity heuristic rewards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Title substrings worth +10 each.
    pub importance_terms: Vec<String>,
    /// Press-name substrings worth +15 (once).
    pub major_outlets: Vec<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            importance_terms: ["채용", "모집", "구인", "급구", "대량", "상시"]
                .map(String::from)
                .to_vec(),
            major_outlets: [
                "연합뉴스", "KBS", "MBC", "SBS", "조선일보", "중앙일보", "동아일보",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search endpoint; `where`, `query` and `sort` are appended per request.
    pub endpoint: String,
    /// Browser-identifying header sent with every search.
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Pause after every keyword, whether or not its request succeeded.
    pub request_delay_secs: u64,
    pub lookback_days: u32,
    pub snapshot_path: PathBuf,
    /// Searched in this order; the order decides which keyword keeps a
    /// title that several keywords return.
    pub keywords: Vec<String>,
    pub scoring: ScoringConfig,
    pub top_k: usize,
    pub cache_ttl_secs: u64,
    pub defaulted_dates: DefaultedDatePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "https://search.naver.com/search.naver".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
            timeout_secs: 10,
            request_delay_secs: 2,
            lookback_days: 7,
            snapshot_path: PathBuf::from("news_data.json"),
            keywords: [
                "외국인 아르바이트",
                "외국인 알바",
                "외국인 채용",
                "외국인 구인",
                "외국인 근로자 채용",
                "외국인 직원 모집",
            ]
            .map(String::from)
            .to_vec(),
            scoring: ScoringConfig::default(),
            top_k: 3,
            cache_ttl_secs: 3600,
            defaulted_dates: DefaultedDatePolicy::Include,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or the defaults when no path is given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or is not valid YAML
    /// for this structure. A missing file is an error here: the caller asked
    /// for it explicitly.
    #[instrument(level = "info")]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            info!("No config file given; using defaults");
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&text)?;
        info!(
            path = %path.display(),
            keywords = config.keywords.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_secs(self.request_delay_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}
