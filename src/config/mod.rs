//! Configuration module for the sitemap crawler
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! A configuration file is optional: `Config::default()` reproduces the
//! built-in crawl settings.
//!
//! # Example
//!
//! ```no_run
//! use sitemap_crawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawler.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, ExtractorKind, HttpConfig, OutputConfig, ScopeKind, SitemapConfig,
};

// Re-export parser functions
pub use parser::{load_config, load_config_with_hash};
pub use validation::validate;
