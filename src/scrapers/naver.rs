//! Naver News search scraper.
//!
//! Each keyword is searched with `where=news&sort=1` (newest first). The
//! results page lists articles as repeated `div.news_area` blocks:
//!
//! ```text
//! div.news_area
//! ├── a.news_tit[href]      title + link (required)
//! ├── a.info.press          press name
//! ├── span.info             date text ("3시간 전", "2024.01.01.")
//! └── div.news_dsc          summary
//! ```

use crate::config::Config;
use crate::error::{FetchError, ParseError};
use crate::models::RawItem;
use crate::scrapers::SearchSource;
use crate::utils::{squash_whitespace, truncate_for_log};
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use url::Url;

static ARTICLE_BLOCK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.news_area").expect("article selector"));
static TITLE_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.news_tit").expect("title selector"));
static SUMMARY: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.news_dsc").expect("summary selector"));
static PRESS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.info.press").expect("press selector"));
static DATE_INFO: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.info").expect("date selector"));

/// HTTP client for the Naver News search endpoint.
#[derive(Debug, Clone)]
pub struct NaverSearch {
    client: Client,
    endpoint: String,
}

impl NaverSearch {
    /// Build a client with the configured browser user agent and timeout.
    ///
    /// # Errors
    ///
    /// [`FetchError::Client`] if the TLS backend cannot be initialised.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout())
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Results URL for `keyword`, percent-encoded and sorted newest first.
    pub fn search_url(&self, keyword: &str) -> String {
        format!(
            "{}?where=news&query={}&sort=1",
            self.endpoint,
            urlencoding::encode(keyword)
        )
    }
}

impl SearchSource for NaverSearch {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[instrument(level = "info", skip(self))]
    async fn search(&self, keyword: &str) -> Result<String, FetchError> {
        let url = self.search_url(keyword);
        let t0 = Instant::now();

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(keyword, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                keyword: keyword.to_string(),
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(keyword, e))?;

        info!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched search results"
        );
        Ok(body)
    }
}

/// Extract every article block from a results page.
///
/// Blocks without a title anchor are not articles and are skipped silently.
/// Blocks that fail to parse are logged and skipped; the rest of the page is
/// still processed.
pub fn parse_results(html: &str, endpoint: &str) -> Vec<RawItem> {
    let base = Url::parse(endpoint).ok();
    let document = Html::parse_document(html);

    let mut items = Vec::new();
    for (index, block) in document.select(&ARTICLE_BLOCK).enumerate() {
        match parse_item(block, base.as_ref()) {
            Ok(Some(item)) => items.push(item),
            Ok(None) => debug!(index, "Block has no title anchor; skipping"),
            Err(e) => warn!(
                index,
                error = %e,
                block = %truncate_for_log(&block.html(), 200),
                "Could not parse article block; skipping"
            ),
        }
    }

    debug!(count = items.len(), "Parsed search results page");
    items
}

/// Parse one `div.news_area` block.
///
/// Returns `Ok(None)` when the block has no title anchor at all.
pub fn parse_item(
    block: ElementRef<'_>,
    base: Option<&Url>,
) -> Result<Option<RawItem>, ParseError> {
    let Some(anchor) = block.select(&TITLE_LINK).next() else {
        return Ok(None);
    };

    let title = element_text(anchor);
    if title.is_empty() {
        return Err(ParseError::MissingTitle);
    }

    let link = anchor
        .value()
        .attr("href")
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .and_then(|href| resolve_link(href, base))
        .ok_or_else(|| ParseError::MissingLink {
            title: title.clone(),
        })?;

    Ok(Some(RawItem {
        title,
        link,
        summary: first_text(block, &SUMMARY),
        press: first_text(block, &PRESS),
        date_text: first_text(block, &DATE_INFO),
    }))
}

fn resolve_link(href: &str, base: Option<&Url>) -> Option<String> {
    match Url::parse(href) {
        Ok(url) => Some(url.to_string()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            base.and_then(|b| b.join(href).ok()).map(|u| u.to_string())
        }
        Err(_) => None,
    }
}

fn first_text(block: ElementRef<'_>, selector: &Selector) -> String {
    block
        .select(selector)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

fn element_text(element: ElementRef<'_>) -> String {
    squash_whitespace(&element.text().collect::<String>())
}
