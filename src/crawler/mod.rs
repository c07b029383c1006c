//! Crawler module for site traversal
//!
//! This module contains the core crawling logic, including:
//! - The fetch capability and its HTTP implementation
//! - Link extraction, by token scanning or full HTML parsing
//! - Per-crawl traversal state
//! - The depth-bounded crawl engine

mod engine;
mod error;
mod extractor;
mod fetcher;
mod html;
mod scanner;
mod state;

pub use engine::CrawlEngine;
pub use error::{CrawlError, CrawlFailure, ExtractionError, FetchError, PageError};
pub use extractor::LinkExtractor;
pub use fetcher::{build_http_client, HttpFetcher, PageFetcher};
pub use html::HtmlLinkExtractor;
pub use scanner::TokenScanExtractor;
pub use state::CrawlState;

use crate::config::Config;
use crate::SitemapCrawlerError;

/// Runs a complete crawl operation over HTTP
///
/// This is the main entry point for crawling a site. It will:
/// 1. Build the HTTP client and engine from the configuration
/// 2. Crawl from `origin` up to `config.crawler.max_depth`
/// 3. Return the visited URLs, origin first
pub async fn crawl(config: &Config, origin: &str) -> Result<Vec<String>, SitemapCrawlerError> {
    let engine = CrawlEngine::from_config(config)?;
    Ok(engine.crawl(origin, config.crawler.max_depth).await?)
}
