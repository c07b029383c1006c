//! Crawl engine - depth-bounded, depth-first traversal of one site
//!
//! The engine drives the crawl loop:
//! - Fetching a page through the configured `PageFetcher`
//! - Extracting its links through the configured `LinkExtractor`
//! - Keeping links that are unvisited and in scope of the origin
//! - Expanding those links depth-first until the frontier is exhausted
//!
//! Traversal uses an explicit frontier stack with one frame per page being
//! expanded, so very deep sites do not grow the call stack. The stack height
//! always equals `CrawlState::current_depth`.

use crate::config::Config;
use crate::crawler::error::{CrawlError, CrawlFailure, FetchError, PageError};
use crate::crawler::extractor::LinkExtractor;
use crate::crawler::fetcher::{HttpFetcher, PageFetcher};
use crate::crawler::scanner::TokenScanExtractor;
use crate::crawler::state::CrawlState;
use crate::url::{ScopePolicy, SubstringScope};
use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::Instant;

/// Links of one page still waiting to be expanded
#[derive(Debug)]
struct Frame {
    pending: VecDeque<String>,
}

/// Crawls a site from an origin URL and reports every page reached
pub struct CrawlEngine {
    fetcher: Box<dyn PageFetcher>,
    extractor: Box<dyn LinkExtractor>,
    scope: Box<dyn ScopePolicy>,
    timeout: Option<Duration>,
}

impl CrawlEngine {
    /// Creates an engine using the token scanner and substring scope
    pub fn new(fetcher: impl PageFetcher + 'static) -> Self {
        Self {
            fetcher: Box::new(fetcher),
            extractor: Box::new(TokenScanExtractor),
            scope: Box::new(SubstringScope),
            timeout: None,
        }
    }

    /// Creates an HTTP-backed engine from the crawler and HTTP settings
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let fetcher = HttpFetcher::from_config(&config.http)?;
        let timeout = (config.crawler.timeout_secs > 0)
            .then(|| Duration::from_secs(config.crawler.timeout_secs));

        Ok(Self::new(fetcher)
            .with_extractor(config.crawler.extractor.extractor())
            .with_scope(config.crawler.scope.policy())
            .with_timeout(timeout))
    }

    pub fn with_extractor(mut self, extractor: Box<dyn LinkExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn with_scope(mut self, scope: Box<dyn ScopePolicy>) -> Self {
        self.scope = scope;
        self
    }

    /// Sets a deadline for a whole crawl; `None` disables it
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Crawls from `origin`, expanding pages up to `max_depth` levels deep
    ///
    /// Returns the visited URLs in first-visit order, starting with the
    /// origin. The origin is listed even when `max_depth` is 0, in which case
    /// it is not fetched.
    ///
    /// # Errors
    ///
    /// The first page whose fetch or link extraction fails aborts the crawl
    /// with a `CrawlFailure` naming that page.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sitemap_crawler::config::Config;
    /// use sitemap_crawler::crawler::CrawlEngine;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let engine = CrawlEngine::from_config(&Config::default())?;
    /// let pages = engine.crawl("https://example.com", 3).await?;
    /// println!("found {} pages", pages.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn crawl(&self, origin: &str, max_depth: u32) -> Result<Vec<String>, CrawlFailure> {
        let mut state = CrawlState::new(origin, max_depth);
        self.crawl_with_state(&mut state).await?;
        Ok(state.into_visited())
    }

    /// Crawls using caller-owned state
    ///
    /// On return, successful or not, `state.current_depth()` is 0 and
    /// `state.visited()` holds every page reached so far.
    pub async fn crawl_with_state(&self, state: &mut CrawlState) -> Result<(), CrawlFailure> {
        let started = std::time::Instant::now();
        let deadline = self.timeout.map(|timeout| Instant::now() + timeout);
        let mut frontier = Vec::new();

        tracing::info!(
            "Starting crawl of {} (max depth {})",
            state.origin(),
            state.max_depth()
        );

        match self.traverse(state, &mut frontier, deadline).await {
            Ok(()) => {
                tracing::info!(
                    "Crawl completed: {} pages visited in {:?}",
                    state.visited().len(),
                    started.elapsed()
                );
                Ok(())
            }
            Err(e) => {
                // Close every expansion still open above the failed page
                while frontier.pop().is_some() {
                    state.leave();
                }
                tracing::error!("Crawl aborted at {}: {}", e.url, e.cause);
                Err(CrawlFailure::from(e))
            }
        }
    }

    async fn traverse(
        &self,
        state: &mut CrawlState,
        frontier: &mut Vec<Frame>,
        deadline: Option<Instant>,
    ) -> Result<(), CrawlError> {
        let origin = state.origin().to_string();
        if state.is_visited(&origin) {
            return Ok(());
        }

        if state.at_depth_limit() {
            state.record(&origin);
            tracing::debug!("Depth limit {} leaves {} unexpanded", state.max_depth(), origin);
            return Ok(());
        }

        self.visit(state, frontier, origin, deadline).await?;

        loop {
            let next = match frontier.last_mut() {
                Some(frame) => frame.pending.pop_front(),
                None => break,
            };

            match next {
                Some(link) => {
                    if state.at_depth_limit() || state.is_visited(&link) {
                        continue;
                    }
                    self.visit(state, frontier, link, deadline).await?;
                }
                None => {
                    frontier.pop();
                    state.leave();
                }
            }
        }

        Ok(())
    }

    /// Records `url`, opens its expansion and pushes its eligible links
    ///
    /// On failure the expansion opened here is closed again before returning.
    async fn visit(
        &self,
        state: &mut CrawlState,
        frontier: &mut Vec<Frame>,
        url: String,
        deadline: Option<Instant>,
    ) -> Result<(), CrawlError> {
        state.record(&url);
        state.enter();
        tracing::debug!("Crawling {} at depth {}", url, state.current_depth());

        let links = match self.links_on_page(&url, deadline).await {
            Ok(links) => links,
            Err(cause) => {
                tracing::warn!("Error fetching links from {}: {}", url, cause);
                state.leave();
                return Err(CrawlError { url, cause });
            }
        };

        let pending: VecDeque<String> = links
            .into_iter()
            .filter(|link| !state.is_visited(link) && self.scope.is_in_scope(state.origin(), link))
            .collect();

        for link in &pending {
            tracing::debug!("Found link: {}", link);
        }

        frontier.push(Frame { pending });
        Ok(())
    }

    async fn links_on_page(
        &self,
        url: &str,
        deadline: Option<Instant>,
    ) -> Result<Vec<String>, PageError> {
        let content = match deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, self.fetcher.fetch(url))
                .await
                .map_err(|_| FetchError::DeadlineElapsed {
                    url: url.to_string(),
                })??,
            None => self.fetcher.fetch(url).await?,
        };

        Ok(self.extractor.extract_links(&content, url)?)
    }
}
