use crate::sitemap::ChangeFrequency;
use serde::Deserialize;

/// Main configuration structure for the sitemap crawler
///
/// Every section is optional; a missing file or section falls back to the
/// defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub http: HttpConfig,
    pub output: OutputConfig,
    pub sitemap: SitemapConfig,
}

/// Crawl traversal configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum depth to crawl from the seed URL
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Which links count as belonging to the seed's site
    pub scope: ScopeKind,

    /// Which link extractor scans fetched pages
    pub extractor: ExtractorKind,

    /// Deadline for the whole crawl in seconds, 0 disables it
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            scope: ScopeKind::default(),
            extractor: ExtractorKind::default(),
            timeout_secs: 0,
        }
    }
}

/// Same-site policy selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeKind {
    /// Link text contains the origin text
    #[default]
    Substring,
    /// Link scheme, host and port equal the origin's
    Host,
}

/// Link extractor selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorKind {
    /// Narrow `<a href="...">` token scanner
    #[default]
    Scan,
    /// Full HTML parser
    Html,
}

/// HTTP fetcher configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User agent sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Connection establishment timeout in seconds
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("sitemap-crawler/{}", env!("CARGO_PKG_VERSION")),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path the sitemap document is written to
    #[serde(rename = "sitemap-path")]
    pub sitemap_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            sitemap_path: "sitemap.xml".to_string(),
        }
    }
}

/// Values stamped on every generated sitemap entry
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    #[serde(rename = "change-frequency")]
    pub change_frequency: ChangeFrequency,

    pub priority: f32,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            change_frequency: ChangeFrequency::Monthly,
            priority: 0.8,
        }
    }
}
