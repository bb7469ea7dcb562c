//! Error types for each stage of the pipeline.
//!
//! None of these reach the query side: the collector and the store decide
//! how each failure degrades (skip the keyword, skip the item, fall back to
//! an empty snapshot) and only log the error itself.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to retrieve one keyword's search results page.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request for '{keyword}' timed out")]
    Timeout { keyword: String },

    #[error("could not connect while searching '{keyword}': {source}")]
    Connect {
        keyword: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("search for '{keyword}' returned HTTP {status}")]
    Status {
        keyword: String,
        status: reqwest::StatusCode,
    },

    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("could not build HTTP client: {0}")]
    Client(String),
}

impl FetchError {
    /// Classify a transport error raised while searching `keyword`.
    pub fn from_reqwest(keyword: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout {
                keyword: keyword.to_string(),
            }
        } else if err.is_connect() {
            FetchError::Connect {
                keyword: keyword.to_string(),
                source: err,
            }
        } else {
            FetchError::Request(err)
        }
    }
}

/// A candidate article block that could not be turned into an item.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("title anchor has no text")]
    MissingTitle,

    #[error("title anchor '{title}' has no usable href")]
    MissingLink { title: String },
}

/// Snapshot read/write failure.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("snapshot I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration file problems. Unlike data problems these abort the run.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
