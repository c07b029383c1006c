//! Link extraction interface and the href classification rules shared by
//! every extractor

use crate::config::ExtractorKind;
use crate::crawler::error::ExtractionError;
use crate::crawler::html::HtmlLinkExtractor;
use crate::crawler::scanner::TokenScanExtractor;
use crate::url::authority_prefix;
use std::collections::HashSet;
use url::Url;

/// Turns a page's raw content into the absolute URLs it links to
pub trait LinkExtractor: Send + Sync {
    /// Returns the distinct link targets of a page in first-seen order
    ///
    /// Irregular markup never fails extraction; unusable anchors are skipped.
    fn extract_links(&self, content: &str, page_url: &str) -> Result<Vec<String>, ExtractionError>;
}

impl ExtractorKind {
    /// Builds the extractor this configuration value selects
    pub fn extractor(self) -> Box<dyn LinkExtractor> {
        match self {
            ExtractorKind::Scan => Box::new(TokenScanExtractor),
            ExtractorKind::Html => Box::new(HtmlLinkExtractor),
        }
    }
}

/// The parts of a page URL relative links are resolved against
#[derive(Debug, Clone)]
pub(crate) struct PageBase {
    prefix: String,
}

impl PageBase {
    pub(crate) fn parse(page_url: &str) -> Result<Self, ExtractionError> {
        let url = Url::parse(page_url).map_err(|source| ExtractionError::InvalidPageUrl {
            url: page_url.to_string(),
            source,
        })?;
        let prefix = authority_prefix(&url).ok_or_else(|| ExtractionError::MissingHost {
            url: page_url.to_string(),
        })?;
        Ok(Self { prefix })
    }

    /// Classifies a raw href value, returning its absolute form if it is kept
    ///
    /// - `http...` is kept as is
    /// - `/path` and `./path` become `scheme://host[:port]/path`
    /// - everything else (`//host`, `mailto:`, `javascript:`, `#frag`,
    ///   bare relative paths) is dropped
    pub(crate) fn resolve(&self, href: &str) -> Option<String> {
        if href.starts_with("http") {
            return Some(href.to_string());
        }

        if href.starts_with("//") {
            return None;
        }

        if let Some(path) = href.strip_prefix('.').filter(|p| p.starts_with('/')) {
            return Some(format!("{}{}", self.prefix, path));
        }

        if href.starts_with('/') {
            return Some(format!("{}{}", self.prefix, href));
        }

        None
    }
}

/// Collects links while dropping repeats, keeping first-seen order
#[derive(Debug, Default)]
pub(crate) struct LinkSet {
    links: Vec<String>,
    seen: HashSet<String>,
}

impl LinkSet {
    pub(crate) fn insert(&mut self, link: String) {
        if self.seen.insert(link.clone()) {
            self.links.push(link);
        }
    }

    pub(crate) fn into_vec(self) -> Vec<String> {
        self.links
    }
}
