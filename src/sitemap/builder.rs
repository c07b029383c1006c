//! Sitemap document construction and XML serialization

use crate::sitemap::entry::{ArticleRecord, ChangeFrequency, SitemapEntry};
use crate::sitemap::{SitemapError, SitemapResult};
use chrono::{NaiveDate, Utc};
use quick_xml::escape::escape;
use std::fmt::Write;

/// XML namespace of the sitemap protocol
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Builds sitemap documents from crawled URLs or article records
///
/// The builder holds only the change frequency and priority stamped on every
/// entry; each build call is a pure transformation of its input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SitemapBuilder {
    change_frequency: ChangeFrequency,
    priority: f32,
}

impl Default for SitemapBuilder {
    fn default() -> Self {
        Self {
            change_frequency: ChangeFrequency::Monthly,
            priority: 0.8,
        }
    }
}

impl SitemapBuilder {
    /// Creates a builder stamping `monthly` and `0.8` on every entry
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_change_frequency(mut self, change_frequency: ChangeFrequency) -> Self {
        self.change_frequency = change_frequency;
        self
    }

    /// Sets the entry priority, clamped to [0, 1]
    pub fn with_priority(mut self, priority: f32) -> Self {
        self.priority = priority.clamp(0.0, 1.0);
        self
    }

    /// Builds a document from plain URLs, dated with today's UTC date
    ///
    /// # Errors
    ///
    /// Returns `SitemapError::EmptyInput` if `urls` is empty.
    pub fn build_from_urls<S: AsRef<str>>(&self, urls: &[S]) -> SitemapResult<SitemapDocument> {
        self.build_from_urls_dated(urls, Utc::now().date_naive())
    }

    /// Builds a document from plain URLs, all dated `generated_on`
    pub fn build_from_urls_dated<S: AsRef<str>>(
        &self,
        urls: &[S],
        generated_on: NaiveDate,
    ) -> SitemapResult<SitemapDocument> {
        if urls.is_empty() {
            return Err(SitemapError::EmptyInput);
        }

        let entries = urls
            .iter()
            .map(|url| self.entry(url.as_ref().to_string(), generated_on))
            .collect();

        Ok(SitemapDocument { entries })
    }

    /// Builds a document from article records, each keeping its own date
    ///
    /// # Errors
    ///
    /// Returns `SitemapError::EmptyInput` if `records` is empty.
    pub fn build_from_records(&self, records: &[ArticleRecord]) -> SitemapResult<SitemapDocument> {
        if records.is_empty() {
            return Err(SitemapError::EmptyInput);
        }

        let entries = records
            .iter()
            .map(|record| self.entry(record.url.clone(), record.last_modified))
            .collect();

        Ok(SitemapDocument { entries })
    }

    fn entry(&self, location: String, last_modified: NaiveDate) -> SitemapEntry {
        SitemapEntry {
            location,
            last_modified,
            change_frequency: self.change_frequency,
            priority: self.priority,
        }
    }
}

/// An ordered, non-empty sequence of sitemap entries
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapDocument {
    entries: Vec<SitemapEntry>,
}

impl SitemapDocument {
    pub fn entries(&self) -> &[SitemapEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the document as sitemap-protocol XML
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(128 + self.entries.len() * 160);
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        let _ = writeln!(xml, "<urlset xmlns=\"{}\">", SITEMAP_NAMESPACE);

        for entry in &self.entries {
            xml.push_str("  <url>\n");
            let _ = writeln!(xml, "    <loc>{}</loc>", escape(entry.location.as_str()));
            let _ = writeln!(
                xml,
                "    <lastmod>{}</lastmod>",
                entry.last_modified.format("%Y-%m-%d")
            );
            let _ = writeln!(
                xml,
                "    <changefreq>{}</changefreq>",
                entry.change_frequency
            );
            let _ = writeln!(
                xml,
                "    <priority>{}</priority>",
                format_priority(entry.priority)
            );
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Formats a priority with up to two decimals, keeping at least one
///
/// `0.8` renders as `0.8`, `1` as `1.0` and `0.85` as `0.85`.
fn format_priority(priority: f32) -> String {
    let mut text = format!("{:.2}", priority);
    while text.ends_with('0') && !text.ends_with(".0") {
        text.pop();
    }
    text
}
