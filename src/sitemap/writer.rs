//! Persisting sitemap documents

use crate::sitemap::builder::SitemapDocument;
use crate::sitemap::{SitemapError, SitemapResult};
use std::path::Path;

/// Writes a sitemap document to `path` as UTF-8 XML
///
/// Missing parent directories are created. Any I/O failure is reported as
/// `SitemapError::Write` carrying the destination path.
pub fn write_sitemap(document: &SitemapDocument, path: &Path) -> SitemapResult<()> {
    let write_error = |source| SitemapError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    std::fs::write(path, document.to_xml()).map_err(write_error)?;

    tracing::info!(
        "Wrote sitemap with {} entries to {}",
        document.len(),
        path.display()
    );
    Ok(())
}
