//! URL handling module for the sitemap crawler
//!
//! This module validates seed URLs and decides which discovered links belong
//! to the crawled site.

mod scope;

use crate::{UrlError, UrlResult};
use url::Url;

pub use scope::{HostScope, ScopePolicy, SubstringScope};

/// Parses and validates a crawl origin
///
/// The origin must be an absolute `http` or `https` URL with a host.
/// Surrounding whitespace (such as a trailing newline from stdin) is trimmed.
///
/// # Examples
///
/// ```
/// use sitemap_crawler::url::parse_origin;
///
/// let origin = parse_origin("https://example.com\n").unwrap();
/// assert_eq!(origin.host_str(), Some("example.com"));
///
/// assert!(parse_origin("ftp://example.com").is_err());
/// assert!(parse_origin("/relative/path").is_err());
/// ```
pub fn parse_origin(input: &str) -> UrlResult<Url> {
    let trimmed = input.trim();
    let url = Url::parse(trimmed).map_err(|source| UrlError::Parse {
        url: trimmed.to_string(),
        source,
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost(trimmed.to_string()));
    }

    Ok(url)
}

/// Returns `scheme://host[:port]` for a URL, the port only when non-default
///
/// Returns None for URLs without a host.
pub fn authority_prefix(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    })
}
