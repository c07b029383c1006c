//! Narrow token scanner for `<a href="...">` links
//!
//! The scanner does not build a document tree. It finds every `<a` opening,
//! takes the tag text up to the next `>`, and reads the double-quoted value
//! following `href=`. Anything it cannot read this way is skipped.

use crate::crawler::error::ExtractionError;
use crate::crawler::extractor::{LinkExtractor, LinkSet, PageBase};

/// Default link extractor, scanning raw markup for anchor tags
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenScanExtractor;

impl LinkExtractor for TokenScanExtractor {
    fn extract_links(&self, content: &str, page_url: &str) -> Result<Vec<String>, ExtractionError> {
        let base = PageBase::parse(page_url)?;
        let mut links = LinkSet::default();

        for tag in anchor_tags(content) {
            let Some(href) = href_value(tag) else {
                continue;
            };
            if let Some(link) = base.resolve(href) {
                links.insert(link);
            }
        }

        Ok(links.into_vec())
    }
}

/// Returns the text of every `<a...>` opening tag, `<` through `>` inclusive
///
/// Matching on `<a` is case-insensitive. An opening without a closing `>`
/// ends the scan.
fn anchor_tags(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut tags = Vec::new();
    let mut pos = 0;

    while let Some(offset) = content[pos..].find('<') {
        let start = pos + offset;
        pos = start + 1;

        if !bytes
            .get(start + 1)
            .is_some_and(|b| b.eq_ignore_ascii_case(&b'a'))
        {
            continue;
        }

        match content[start..].find('>') {
            Some(len) => tags.push(&content[start..=start + len]),
            None => break,
        }
    }

    tags
}

/// Reads the value between the first pair of double quotes after `href=`
///
/// The attribute name is matched case-insensitively.
fn href_value(tag: &str) -> Option<&str> {
    let href_pos = tag.to_ascii_lowercase().find("href=")?;
    let after_href = &tag[href_pos..];
    let open = after_href.find('"')?;
    let value = &after_href[open + 1..];
    let close = value.find('"')?;
    Some(&value[..close])
}
