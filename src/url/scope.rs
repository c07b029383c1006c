//! Same-site policies deciding which discovered links a crawl may follow

use crate::config::ScopeKind;
use url::Url;

/// Decides whether a discovered link belongs to the crawl origin's site
pub trait ScopePolicy: Send + Sync {
    /// Returns true if `candidate` may be followed from a crawl of `origin`
    fn is_in_scope(&self, origin: &str, candidate: &str) -> bool;
}

/// Accepts links whose text contains the origin text
///
/// This is the default policy. It is deliberately loose: a link carrying the
/// origin inside its query string is accepted too, and an origin with a
/// trailing slash rejects links to the bare host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringScope;

impl ScopePolicy for SubstringScope {
    fn is_in_scope(&self, origin: &str, candidate: &str) -> bool {
        candidate.contains(origin)
    }
}

/// Accepts links whose scheme, host and port equal the origin's
///
/// Host comparison is case-insensitive (the URL parser lowercases hosts).
/// Links that fail to parse are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostScope;

impl ScopePolicy for HostScope {
    fn is_in_scope(&self, origin: &str, candidate: &str) -> bool {
        let (Ok(origin), Ok(candidate)) = (Url::parse(origin), Url::parse(candidate)) else {
            return false;
        };

        origin.scheme() == candidate.scheme()
            && origin.host_str().is_some()
            && origin.host_str() == candidate.host_str()
            && origin.port_or_known_default() == candidate.port_or_known_default()
    }
}

impl ScopeKind {
    /// Builds the policy this configuration value selects
    pub fn policy(self) -> Box<dyn ScopePolicy> {
        match self {
            ScopeKind::Substring => Box::new(SubstringScope),
            ScopeKind::Host => Box::new(HostScope),
        }
    }
}
