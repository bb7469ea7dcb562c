//! Search-result sources.
//!
//! A source turns one keyword into the raw HTML of its newest-first results
//! page. The collector only sees the [`SearchSource`] trait, so tests can feed
//! it canned pages.
//!
//! | Source | Module | Method |
//! |--------|--------|--------|
//! | Naver News search | [`naver`] | HTML scraping |

pub mod naver;

use crate::error::FetchError;

/// One search request per keyword.
pub trait SearchSource {
    /// Base URL that relative article links on a results page resolve against.
    fn endpoint(&self) -> &str;

    /// Fetch the results page for `keyword`.
    ///
    /// # Errors
    ///
    /// [`FetchError`] on timeout, connection failure or a non-success status.
    async fn search(&self, keyword: &str) -> Result<String, FetchError>;
}
