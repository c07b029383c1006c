//! Crawl error taxonomy
//!
//! Fetch and extraction failures describe what went wrong with one page.
//! `CrawlError` ties such a failure to the page where it happened, and
//! `CrawlFailure` is what a top-level crawl reports to its caller.

use thiserror::Error;

/// Failure obtaining a page's content
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Crawl deadline elapsed before {url} was fetched")]
    DeadlineElapsed { url: String },

    #[error("Fetch failed for {url}: {message}")]
    Other { url: String, message: String },
}

impl FetchError {
    /// Returns true for failures that may succeed if the fetch is repeated
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http { source, .. } => source.is_connect() || source.is_timeout(),
            Self::Timeout { .. } => true,
            Self::DeadlineElapsed { .. } | Self::Other { .. } => false,
        }
    }
}

/// Failure scanning a fetched page for links
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Invalid page URL {url}: {source}")]
    InvalidPageUrl {
        url: String,
        source: ::url::ParseError,
    },

    #[error("Page URL has no host: {url}")]
    MissingHost { url: String },
}

/// What went wrong at a single page
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// A page-level failure together with the page it happened on
#[derive(Debug, Error)]
#[error("Failed to fetch links from {url}: {cause}")]
pub struct CrawlError {
    pub url: String,
    #[source]
    pub cause: PageError,
}

/// The single failure a top-level crawl reports
///
/// Any page failure aborts the whole traversal; the URLs visited up to that
/// point are not returned.
#[derive(Debug, Error)]
#[error("Failed to crawl site: {cause}")]
pub struct CrawlFailure {
    #[source]
    pub cause: CrawlError,
}

impl CrawlFailure {
    /// The page whose failure aborted the crawl
    pub fn url(&self) -> &str {
        &self.cause.url
    }

    /// Returns true if the aborting page failed in a way a rerun may avoid
    pub fn is_transient(&self) -> bool {
        match &self.cause.cause {
            PageError::Fetch(err) => err.is_transient(),
            PageError::Extraction(_) => false,
        }
    }
}

impl From<CrawlError> for CrawlFailure {
    fn from(cause: CrawlError) -> Self {
        Self { cause }
    }
}
