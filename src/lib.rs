//! Sitemap Crawler: same-site link discovery and sitemap generation
//!
//! This crate walks the link graph of a single site from a seed URL, collecting
//! every reachable page within a depth bound, and renders the result (or a
//! supplied list of articles) as a sitemap-protocol XML document.

pub mod config;
pub mod crawler;
pub mod sitemap;
pub mod url;

use thiserror::Error;

/// Main error type for sitemap crawler operations
#[derive(Debug, Error)]
pub enum SitemapCrawlerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error(transparent)]
    Crawl(#[from] crawler::CrawlFailure),

    #[error("Sitemap error: {0}")]
    Sitemap(#[from] sitemap::SitemapError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL '{url}': {source}")]
    Parse {
        url: String,
        source: ::url::ParseError,
    },

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL: {0}")]
    MissingHost(String),
}

/// Result type alias for sitemap crawler operations
pub type Result<T> = std::result::Result<T, SitemapCrawlerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlEngine, CrawlState};
pub use sitemap::{SitemapBuilder, SitemapDocument};
