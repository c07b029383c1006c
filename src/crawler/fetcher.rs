//! Page fetching
//!
//! This module defines the fetch capability the crawl engine depends on and
//! its HTTP implementation:
//! - Building HTTP clients with the configured user agent and timeouts
//! - GET requests returning the page body as text
//! - Error classification for transport failures

use crate::config::HttpConfig;
use crate::crawler::error::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Obtains the raw content of a page
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` and returns its body as text
    ///
    /// Implementations fail only when no content could be obtained at all.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for Arc<T> {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url).await
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use sitemap_crawler::config::HttpConfig;
/// use sitemap_crawler::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches pages over HTTP(S) with reqwest
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(config)?))
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    /// Sends a GET request and returns the body
    ///
    /// # Response Handling
    ///
    /// | Condition | Result |
    /// |-----------|--------|
    /// | 2xx | body |
    /// | other status | body, logged as a warning |
    /// | body cannot be read | empty body, logged as a warning |
    /// | timeout | `FetchError::Timeout` |
    /// | connection / DNS / TLS failure | `FetchError::Http` |
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Http {
                    url: url.to_string(),
                    source: e,
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{} returned HTTP {}", url, status.as_u16());
        }

        match response.text().await {
            Ok(body) => Ok(body),
            Err(e) => {
                tracing::warn!("Error reading body of {}: {}", url, e);
                Ok(String::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&HttpConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_http_fetcher_from_config() {
        let config = HttpConfig {
            user_agent: "TestCrawler/1.0".to_string(),
            request_timeout_secs: 5,
            connect_timeout_secs: 1,
        };
        let fetcher = HttpFetcher::from_config(&config).unwrap();
        assert!(format!("{:?}", fetcher).contains("HttpFetcher"));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host_fails() {
        let config = HttpConfig {
            connect_timeout_secs: 1,
            request_timeout_secs: 2,
            ..HttpConfig::default()
        };
        let fetcher = HttpFetcher::from_config(&config).unwrap();

        // Bind and release a port so nothing is listening on it
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let result = fetcher.fetch(&format!("http://127.0.0.1:{}/", port)).await;
        assert!(matches!(result, Err(FetchError::Http { .. })));
    }
}
