//! Loading externally supplied article records
//!
//! Articles are listed in TOML:
//!
//! ```toml
//! [[article]]
//! url = "https://example.com/news/launch"
//! last-modified = "2024-06-01"
//! ```

use crate::sitemap::entry::ArticleRecord;
use crate::sitemap::{SitemapError, SitemapResult};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ArticleFile {
    #[serde(default, rename = "article")]
    articles: Vec<ArticleRecord>,
}

/// Reads article records from a TOML file
pub fn load_articles(path: &Path) -> SitemapResult<Vec<ArticleRecord>> {
    let content = std::fs::read_to_string(path).map_err(|source| SitemapError::ArticlesRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_articles(&content)
}

/// Parses article records from TOML text, keeping file order
pub fn parse_articles(content: &str) -> SitemapResult<Vec<ArticleRecord>> {
    let file: ArticleFile = toml::from_str(content)?;
    Ok(file.articles)
}
