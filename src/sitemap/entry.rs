//! Sitemap entry types

use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;

/// How frequently a page is likely to change, per the sitemap protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    /// Returns the protocol string for this frequency
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `<url>` record of a sitemap document
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    /// Absolute page URL, unescaped
    pub location: String,

    /// Date the page was last modified
    pub last_modified: NaiveDate,

    pub change_frequency: ChangeFrequency,

    /// Relative priority in [0, 1]
    pub priority: f32,
}

/// An externally supplied page with its own modification date
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticleRecord {
    pub url: String,

    #[serde(rename = "last-modified")]
    pub last_modified: NaiveDate,
}
