//! Per-crawl traversal state

use std::collections::HashSet;

/// Traversal bookkeeping for one crawl invocation
///
/// The visited list only grows and records URLs in first-visit order. The
/// depth counter is raised when a page's links are being expanded and lowered
/// when that expansion ends, so it reads 0 whenever no crawl is running.
#[derive(Debug, Clone)]
pub struct CrawlState {
    origin: String,
    max_depth: u32,
    current_depth: u32,
    visited: Vec<String>,
    seen: HashSet<String>,
}

impl CrawlState {
    /// Creates an empty state scoped to `origin`
    pub fn new(origin: impl Into<String>, max_depth: u32) -> Self {
        Self {
            origin: origin.into(),
            max_depth,
            current_depth: 0,
            visited: Vec::new(),
            seen: HashSet::new(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn current_depth(&self) -> u32 {
        self.current_depth
    }

    /// Returns true once the depth bound stops further expansion
    pub fn at_depth_limit(&self) -> bool {
        self.current_depth >= self.max_depth
    }

    /// Exact string membership; no URL normalization is applied
    pub fn is_visited(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    /// Visited URLs in the order they were first reached
    pub fn visited(&self) -> &[String] {
        &self.visited
    }

    pub fn into_visited(self) -> Vec<String> {
        self.visited
    }

    /// Records a URL as visited; returns false if it already was
    pub(crate) fn record(&mut self, url: &str) -> bool {
        if !self.seen.insert(url.to_string()) {
            return false;
        }
        self.visited.push(url.to_string());
        true
    }

    /// Marks the start of a page's expansion
    pub(crate) fn enter(&mut self) {
        self.current_depth += 1;
    }

    /// Marks the end of a page's expansion
    pub(crate) fn leave(&mut self) {
        debug_assert!(self.current_depth > 0, "leave() without matching enter()");
        self.current_depth = self.current_depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = CrawlState::new("https://example.com", 10);
        assert!(state.visited().is_empty());
        assert_eq!(state.max_depth(), 10);
        assert_eq!(state.origin(), "https://example.com");
        assert_eq!(state.current_depth(), 0);
    }

    #[test]
    fn test_record_keeps_first_visit_order() {
        let mut state = CrawlState::new("https://example.com", 3);
        assert!(state.record("https://example.com"));
        assert!(state.record("https://example.com/b"));
        assert!(!state.record("https://example.com"));
        assert!(state.record("https://example.com/a"));

        assert_eq!(
            state.visited(),
            [
                "https://example.com",
                "https://example.com/b",
                "https://example.com/a"
            ]
        );
    }

    #[test]
    fn test_visited_uses_exact_equality() {
        let mut state = CrawlState::new("https://example.com", 3);
        state.record("https://example.com/a");
        assert!(state.is_visited("https://example.com/a"));
        assert!(!state.is_visited("https://example.com/a/"));
        assert!(!state.is_visited("https://example.com/a#top"));
    }

    #[test]
    fn test_depth_enter_leave() {
        let mut state = CrawlState::new("https://example.com", 2);
        assert!(!state.at_depth_limit());
        state.enter();
        state.enter();
        assert!(state.at_depth_limit());
        state.leave();
        state.leave();
        assert_eq!(state.current_depth(), 0);
    }

    #[test]
    fn test_zero_max_depth_is_always_at_limit() {
        let state = CrawlState::new("https://example.com", 0);
        assert!(state.at_depth_limit());
    }
}
