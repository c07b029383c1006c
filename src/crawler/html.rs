//! HTML-parser backed link extractor
//!
//! Parses the page into a document tree and reads the `href` of every `<a>`
//! element. Unlike the token scanner it copes with single-quoted or unquoted
//! attributes, comments, and entity-encoded values, while applying the same
//! rules for which hrefs are kept.

use crate::crawler::error::ExtractionError;
use crate::crawler::extractor::{LinkExtractor, LinkSet, PageBase};
use scraper::{Html, Selector};

/// Link extractor built on the `scraper` HTML parser
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlLinkExtractor;

impl LinkExtractor for HtmlLinkExtractor {
    fn extract_links(&self, content: &str, page_url: &str) -> Result<Vec<String>, ExtractionError> {
        let base = PageBase::parse(page_url)?;
        let document = Html::parse_document(content);
        let mut links = LinkSet::default();

        if let Ok(a_selector) = Selector::parse("a[href]") {
            for element in document.select(&a_selector) {
                let Some(href) = element.value().attr("href") else {
                    continue;
                };
                if let Some(link) = base.resolve(href.trim()) {
                    links.insert(link);
                }
            }
        }

        Ok(links.into_vec())
    }
}
