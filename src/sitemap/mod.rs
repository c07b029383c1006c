//! Sitemap module for rendering crawl results
//!
//! This module handles:
//! - Building sitemap entries from crawled URLs or article records
//! - Serializing entries as sitemap-protocol XML
//! - Loading article records and writing the finished document

mod articles;
mod builder;
mod entry;
mod writer;

pub use articles::{load_articles, parse_articles};
pub use builder::{SitemapBuilder, SitemapDocument, SITEMAP_NAMESPACE};
pub use entry::{ArticleRecord, ChangeFrequency, SitemapEntry};
pub use writer::write_sitemap;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or persisting a sitemap
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("No URLs or article records available to generate a sitemap")]
    EmptyInput,

    #[error("Failed to write sitemap to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read articles from {path}: {source}")]
    ArticlesRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse articles: {0}")]
    ArticlesParse(#[from] toml::de::Error),
}

/// Result type for sitemap operations
pub type SitemapResult<T> = Result<T, SitemapError>;
